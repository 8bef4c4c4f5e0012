//! genome_view_ui - Front-end plumbing for the genome view
//!
//! This crate provides an observer registry with explicit unsubscription and
//! a small HTML element builder used to emit table rows and tooltips.

mod html;
mod observer;

pub use html::{element, escape, text, Element, Node};
pub use observer::{Observers, SubscriptionId};

