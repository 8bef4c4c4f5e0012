//! Global constants for the genome view

/// Separator between entries of a multi-valued accession (e.g. `E!!!G`).
pub const MULTI_VALUE_SEPARATOR: &str = "!!!";

/// Category key of genes that carry no category.
pub const NONE_CATEGORY: &str = "None";

/// Annotation sources consulted for COG categories, in order of preference.
pub const COG_CATEGORY_SOURCES: &[&str] = &["COG20_CATEGORY", "COG14_CATEGORY"];

/// Annotation source consulted for KEGG pathway classes.
pub const KEGG_CLASS_SOURCE: &str = "KEGG_Class";

/// Default pointer offset of the tooltip overlay, in pixels.
pub const DEFAULT_TOOLTIP_OFFSET: [i32; 2] = [10, 10];

/// Layers every view starts with, in display order.
pub const DEFAULT_LAYERS: &[&str] = &["Ruler", "Genome", "Coverage", "GC_Content"];

/// Default visible window when a dataset is first shown, in nucleotides.
pub const DEFAULT_VIEW_WIDTH: u64 = 50_000;
