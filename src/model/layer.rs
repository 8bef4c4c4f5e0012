//! Data layers drawn alongside each genome.

use serde::{Deserialize, Serialize};

use crate::model::HexColor;

/// A track drawn for every genome (ruler, coverage, GC content, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLayer {
    /// Layer name, unique within a view
    pub name: String,
    /// Whether the layer is drawn
    pub visible: bool,
    /// Track color
    pub color: HexColor,
}

impl DataLayer {
    /// Create a visible layer.
    pub fn new(name: &str, color: HexColor) -> Self {
        Self {
            name: name.to_string(),
            visible: true,
            color,
        }
    }
}
