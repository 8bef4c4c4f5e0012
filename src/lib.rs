//! genome_view - Genome view front-end logic
//!
//! Function color legends, view state (bookmarks, ordering, visibility) and
//! the HTML tables and tooltips of a genome browser page.

pub mod app;
pub mod color_table;
pub mod color_utils;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod message;
pub mod model;
pub mod state;
pub mod ui;

pub use app::GenomeViewApp;
pub use color_table::{
    ColorChange, ColorOverrides, ColorResolver, ColorTable, ColorTableRow, HighlightEntry,
};
pub use error::{BookmarkError, DataError};

#[cfg(test)]
mod tests;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
