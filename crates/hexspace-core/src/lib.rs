//! Core primitives for the hexspace workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! ordering primitive used by pathfinding ([`PriorityQueue`]) and the
//! coordinate vocabulary shared by grid payloads and the grid itself:
//! [`Offset`], [`Cube`], and [`Direction`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod error;
pub mod heap;

pub use coord::{Cube, Offset};
pub use direction::Direction;
pub use error::HeapError;
pub use heap::PriorityQueue;
