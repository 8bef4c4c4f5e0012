//! Data models for the genome view.

mod bookmark;
mod category;
mod color;
mod genome;
mod layer;

pub use bookmark::Bookmark;
pub use category::{CategoryDef, CategoryType};
pub use color::HexColor;
pub use genome::{
    Contig, Direction, FunctionHit, Gene, GeneId, GenomeData, GenomeId, GenomeRecord,
};
pub use layer::DataLayer;
