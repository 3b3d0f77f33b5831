//! Bounding-rectangle quadtree for broad-phase proximity queries.
//!
//! [`Quadtree`] stores opaque payloads alongside an axis-aligned
//! [`Rect`](kurbo::Rect). Entries sink into the single child quadrant
//! that fully contains them; entries straddling a split line stay at the
//! node that split. Queries follow the same rule and return every entry on
//! the path they walk, so results are candidates for an exact overlap test,
//! not final answers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod tree;

pub use config::{ConfigError, QuadtreeConfig};
pub use kurbo::Rect;
pub use tree::Quadtree;
