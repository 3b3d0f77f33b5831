//! Error types for grid construction and queries.

use hexspace_core::Offset;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or adjacency lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero width or height.
    EmptyGrid,
    /// A dimension does not fit the `i32` coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// Two cells passed to a direction lookup are not neighbours.
    NotAdjacent {
        /// The source cell.
        from: Offset,
        /// The cell that was expected to be adjacent.
        to: Offset,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::NotAdjacent { from, to } => {
                write!(f, "no direction leads from {from} to {to}")
            }
        }
    }
}

impl Error for GridError {}
