//! View state management.

mod bookmarks;
mod view;

pub use view::{DisplayState, ViewRange, ViewState};
