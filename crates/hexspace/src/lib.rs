//! hexspace: hex grids, pathfinding, and broad-phase spatial queries.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! hexspace sub-crates. For most users, adding `hexspace` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hexspace::prelude::*;
//!
//! struct Tile {
//!     at: Offset,
//!     cost: u32,
//! }
//!
//! impl HexCell for Tile {
//!     fn location(&self) -> Offset {
//!         self.at
//!     }
//!     fn movement_cost(&self) -> u32 {
//!         self.cost
//!     }
//! }
//!
//! // A 4×4 toroidal grid where every step costs 1.
//! let grid = HexGrid::from_fn(4, 4, |at| Tile { at, cost: 1 }).unwrap();
//! let path = grid
//!     .shortest_path(Offset::new(0, 0), Offset::new(2, 0))
//!     .unwrap();
//! assert_eq!(path.cells(), &[Offset::new(0, 0), Offset::new(1, 0), Offset::new(2, 0)]);
//!
//! // Broad-phase candidates for a rectangle query.
//! let mut tree = Quadtree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//! tree.insert("crate", Rect::new(10.0, 10.0, 12.0, 12.0));
//! assert_eq!(tree.query(Rect::new(11.0, 11.0, 13.0, 13.0)), vec![&"crate"]);
//!
//! // A max-heap with an explicit, doubling capacity.
//! let mut queue: PriorityQueue<i32> = [3, 9, 1].into_iter().collect();
//! assert_eq!(queue.pop(), Ok(9));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `hexspace-core` | `PriorityQueue`, coordinates, directions |
//! | [`grid`] | `hexspace-grid` | `HexGrid`, `HexCell`, A* pathfinding |
//! | [`quadtree`] | `hexspace-quadtree` | `Quadtree` and its split limits |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Priority queue and coordinate primitives (`hexspace-core`).
///
/// Contains [`core::PriorityQueue`], the [`core::Offset`] and [`core::Cube`]
/// coordinate systems, and the six [`core::Direction`]s.
pub use hexspace_core as core;

/// Toroidal hex grid and pathfinding (`hexspace-grid`).
///
/// [`grid::HexGrid`] stores payloads implementing [`grid::HexCell`] and
/// answers neighbour, distance, range, and shortest-path queries.
pub use hexspace_grid as grid;

/// Rectangle quadtree for broad-phase queries (`hexspace-quadtree`).
pub use hexspace_quadtree as quadtree;

/// Common imports for typical hexspace usage.
///
/// ```rust
/// use hexspace::prelude::*;
/// ```
pub mod prelude {
    // Core primitives
    pub use hexspace_core::{Cube, Direction, Offset, PriorityQueue};

    // Grid
    pub use hexspace_grid::{Heuristic, HexCell, HexGrid, Path, PathConfig};

    // Quadtree
    pub use hexspace_quadtree::{Quadtree, QuadtreeConfig, Rect};

    // Errors
    pub use hexspace_core::HeapError;
    pub use hexspace_grid::GridError;
    pub use hexspace_quadtree::ConfigError;
}
