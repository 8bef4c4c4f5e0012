//! Application message types for the genome view.
//!
//! Every page interaction (drag end, checkbox click, selector change, button
//! press) is represented as a message carrying typed identifiers.

use crate::model::{CategoryType, GenomeId, HexColor};

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Genome table interactions
    Genome(GenomeMessage),
    /// Layer table interactions
    Layer(LayerMessage),
    /// Bookmark panel interactions
    Bookmark(BookmarkMessage),
    /// Function color legend interactions
    Color(ColorMessage),
    /// Navigation and panels
    View(ViewMessage),
}

/// Genome table messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenomeMessage {
    /// Genome rows were dropped in a new order
    Reordered(Vec<GenomeId>),
    /// A genome checkbox was ticked or unticked
    VisibilityChanged {
        /// Genome of the row
        genome: GenomeId,
        /// New checkbox state
        visible: bool,
    },
}

/// Layer table messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerMessage {
    /// Layer rows were dropped in a new order
    Reordered(Vec<String>),
    /// A layer checkbox was ticked or unticked
    VisibilityChanged {
        /// Layer of the row
        layer: String,
        /// New checkbox state
        visible: bool,
    },
    /// A layer color was picked
    ColorChanged {
        /// Layer of the row
        layer: String,
        /// Picked color
        color: HexColor,
    },
}

/// Bookmark panel messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkMessage {
    /// Save the current window under a name
    Create {
        /// Bookmark name
        name: String,
        /// Bookmark description
        description: String,
    },
    /// A bookmark was picked from the selector
    Selected(usize),
    /// Delete a bookmark
    Remove(usize),
}

/// Function color legend messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMessage {
    /// A different category type was selected
    CategoryTypeChanged(CategoryType),
    /// A legend row color was picked
    RowColorChanged {
        /// Row key
        key: String,
        /// Picked color
        color: HexColor,
    },
}

/// Navigation and panel messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMessage {
    /// Show or hide the settings panel
    ToggleSettingsPanel,
    /// The visible window was moved
    RangeChanged {
        /// New window start
        start: u64,
        /// New window stop
        stop: u64,
    },
}

/// Text shown to the user in a dialog after a handler ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Something succeeded
    Info(String),
    /// Something failed
    Error(String),
}

/// What a handler did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The view must be redrawn
    pub redraw: bool,
    /// Dialog to show, if any
    pub notice: Option<Notice>,
}

impl Outcome {
    /// Nothing changed.
    pub fn none() -> Self {
        Self::default()
    }

    /// State changed; redraw needed.
    pub fn redraw() -> Self {
        Self {
            redraw: true,
            notice: None,
        }
    }

    /// Redraw if `changed`.
    pub fn redraw_if(changed: bool) -> Self {
        Self {
            redraw: changed,
            notice: None,
        }
    }

    /// Attach a dialog.
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}
