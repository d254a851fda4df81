//! Presentation adapter between path search and visualization.

pub mod highlight;

pub use highlight::{to_highlight_set, HighlightSet};
