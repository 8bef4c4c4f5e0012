//! Error types for dataset loading and view-state operations.

use thiserror::Error;

/// Errors that can occur while loading a genome dataset.
#[derive(Error, Debug)]
pub enum DataError {
    /// I/O error while reading the dataset
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The same genome ID appears twice
    #[error("Duplicate genome: {id}")]
    DuplicateGenome {
        /// The repeated genome ID
        id: String,
    },

    /// A gene call is malformed
    #[error("Invalid gene {gene} in genome '{genome}': {message}")]
    InvalidGene {
        /// Genome containing the gene
        genome: String,
        /// Gene caller ID
        gene: u32,
        /// What is wrong with it
        message: String,
    },
}

/// Bookmark failures. The display text is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    /// No name was given
    #[error("Please provide a name for your bookmark")]
    MissingName,

    /// The captured view range is empty or inverted
    #[error("Unable to save bookmark: invalid range {start}..{stop}")]
    InvalidRange {
        /// Range start
        start: u64,
        /// Range stop
        stop: u64,
    },

    /// No bookmark at the given index
    #[error("Bookmark {index} does not exist")]
    NotFound {
        /// Requested index
        index: usize,
    },
}

/// Error parsing a hex color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid hex color '{0}': expected #RGB or #RRGGBB")]
pub struct ColorParseError(pub String);

/// Error parsing a category type selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryTypeError {
    /// The selector names no known category type
    #[error("Unknown category type '{0}' (expected Source, COG or KEGG)")]
    Unknown(String),
}
