//! Layout Module - page geometry via Taffy.
//!
//! Hosts that do not measure their own page can describe it as a column of
//! blocks and let [Taffy](https://github.com/DioxusLabs/taffy) compute the
//! document-space bounds of every element. The result feeds
//! [`PageBuilder::geometry`](crate::engine::PageBuilder::geometry) and
//! [`Page::apply_geometry`](crate::engine::Page::apply_geometry).
//!
//! # Example
//!
//! ```ignore
//! use folio_motion::layout::{Block, PageBlueprint, compute_page_geometry};
//! use folio_motion::types::ElementId;
//!
//! let blueprint = PageBlueprint::new(1200.0, vec![
//!     Block::leaf(ElementId(0), 80.0),
//!     Block::leaf(ElementId(1), 720.0),
//! ]);
//! let geometry = compute_page_geometry(&blueprint)?;
//! ```

mod taffy_bridge;

pub use taffy_bridge::{Block, PageBlueprint, PageGeometry, compute_page_geometry};
