//! Bookmarks of view coordinates.

use serde::{Deserialize, Serialize};

/// A named nucleotide range the user can jump back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Range start (nucleotides)
    pub start: u64,
    /// Range stop (nucleotides)
    pub stop: u64,
}

impl Bookmark {
    /// Create a bookmark for `start..stop`.
    pub fn new(name: &str, description: &str, start: u64, stop: u64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            start,
            stop,
        }
    }
}
