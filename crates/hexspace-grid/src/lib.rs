//! Toroidal hexagonal grid for hexspace.
//!
//! [`HexGrid`] is a dense, fixed-size container of payload cells laid out
//! in odd-r offset coordinates. Every coordinate wraps on both axes, so the
//! grid behaves as a torus and no access is ever out of bounds.
//!
//! On top of storage it offers:
//!
//! - neighbour and direction queries ([`HexGrid::neighbour`],
//!   [`HexGrid::neighbours`], [`HexGrid::direction`])
//! - cube-coordinate distance and range enumeration
//! - A* pathfinding over per-cell movement costs ([`HexGrid::shortest_path`])
//!
//! Payloads describe themselves through the [`HexCell`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod path;

#[cfg(test)]
pub(crate) mod compliance;

pub use cell::HexCell;
pub use error::GridError;
pub use grid::HexGrid;
pub use hexspace_core::{Cube, Direction, Offset};
pub use path::{Heuristic, Path, PathConfig};
