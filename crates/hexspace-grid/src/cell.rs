//! The capability a payload needs to live in a [`HexGrid`](crate::HexGrid).

use hexspace_core::Offset;

/// A payload stored in a hex grid cell.
///
/// The grid never inspects payloads beyond these two accessors: the
/// location lets payload-based queries find their cell, and the movement
/// cost is what pathfinding pays to step *into* the cell.
///
/// # Examples
///
/// ```
/// use hexspace_grid::{HexCell, HexGrid, Offset};
///
/// struct Tile {
///     at: Offset,
///     swamp: bool,
/// }
///
/// impl HexCell for Tile {
///     fn location(&self) -> Offset {
///         self.at
///     }
///     fn movement_cost(&self) -> u32 {
///         if self.swamp { 3 } else { 1 }
///     }
/// }
///
/// let grid = HexGrid::from_fn(4, 4, |at| Tile { at, swamp: at.x == 1 }).unwrap();
/// assert_eq!(grid.get(1, 0).movement_cost(), 3);
/// ```
pub trait HexCell {
    /// Offset coordinate of this cell within its grid.
    fn location(&self) -> Offset;

    /// Cost to enter this cell. Zero-cost cells are allowed.
    fn movement_cost(&self) -> u32;
}
