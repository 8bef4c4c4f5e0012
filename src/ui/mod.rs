//! HTML fragments for the genome view page.
//!
//! Each builder renders one piece of the sidebar (tables, selectors) or the
//! gene tooltip from the dataset and the view state it is handed.

mod tables;
mod tooltip;

pub use tables::{
    bookmark_options, category_type_options, color_row, color_table_rows, genome_row,
    genome_table, layer_row, layer_table,
};
pub use tooltip::{gene_tooltip, Tooltip};
