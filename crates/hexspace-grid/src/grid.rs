//! Dense toroidal hex grid: storage, wrapping, and geometry queries.

use crate::cell::HexCell;
use crate::error::GridError;
use hexspace_core::{Direction, Offset};
use kurbo::Vec2;
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// A fixed-size hexagonal grid whose edges wrap around (a torus).
///
/// Cells are stored row-major in a single `Vec` sized `width * height` at
/// construction. Every accessor wraps both coordinates with Euclidean
/// modulo, so `(-1, 0)` addresses the last column and `(x + width, y)`
/// addresses the same cell as `(x, y)`.
///
/// Rows use the odd-r layout: odd rows are shifted half a cell to the
/// right. With an odd height the vertical seam joins two rows of the same
/// parity, so adjacency across that seam is not a proper hex adjacency;
/// construction logs a warning in that case.
///
/// # Examples
///
/// ```
/// use hexspace_grid::{Direction, HexCell, HexGrid, Offset};
///
/// #[derive(Clone)]
/// struct Plain(Offset);
/// impl HexCell for Plain {
///     fn location(&self) -> Offset { self.0 }
///     fn movement_cost(&self) -> u32 { 1 }
/// }
///
/// let grid = HexGrid::from_fn(4, 4, Plain).unwrap();
/// assert_eq!(grid.area(), 16);
///
/// // West of the first column wraps to the last column.
/// assert_eq!(grid.neighbour(Offset::new(0, 0), Direction::W), Offset::new(3, 0));
/// assert_eq!(grid.get(-1, 0).location(), Offset::new(3, 0));
///
/// // A straight two-step path.
/// let path = grid.shortest_path(Offset::new(0, 0), Offset::new(2, 0)).unwrap();
/// assert_eq!(path.hops(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct HexGrid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T> HexGrid<T> {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Build a `width * height` grid, creating each cell from its offset.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn from_fn<F>(width: u32, height: u32, mut make: F) -> Result<Self, GridError>
    where
        F: FnMut(Offset) -> T,
    {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        if height > 1 && height % 2 == 1 {
            log::warn!("hex grid height {height} is odd; adjacency across the vertical seam is skewed");
        }

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(make(Offset::new(x, y)));
            }
        }
        log::debug!("built {width}x{height} hex grid");
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Canonical in-range coordinate for `at`.
    pub fn wrap(&self, at: Offset) -> Offset {
        Offset::new(
            at.x.rem_euclid(self.width as i32),
            at.y.rem_euclid(self.height as i32),
        )
    }

    fn wrap_wide(&self, x: i64, y: i64) -> Offset {
        // Both results are below a dimension that fits i32.
        Offset::new(
            x.rem_euclid(i64::from(self.width)) as i32,
            y.rem_euclid(i64::from(self.height)) as i32,
        )
    }

    fn slot(&self, at: Offset) -> usize {
        let at = self.wrap(at);
        at.y as usize * self.width as usize + at.x as usize
    }

    /// Cell at `(x, y)`, wrapped.
    pub fn get(&self, x: i32, y: i32) -> &T {
        &self.cells[self.slot(Offset::new(x, y))]
    }

    /// Mutable cell at `(x, y)`, wrapped.
    pub fn get_mut(&mut self, x: i32, y: i32) -> &mut T {
        let slot = self.slot(Offset::new(x, y));
        &mut self.cells[slot]
    }

    /// Replace the cell at `(x, y)`, wrapped, returning the previous value.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> T {
        std::mem::replace(self.get_mut(x, y), value)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterate mutably over cells in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// The wrapped cell one step from `at` in `direction`.
    pub fn neighbour(&self, at: Offset, direction: Direction) -> Offset {
        self.wrap(direction.step(self.wrap(at)))
    }

    /// All six neighbours of `at`, in [`Direction::ALL`] order.
    ///
    /// On very small grids several entries may be the same cell, or `at`
    /// itself.
    pub fn neighbours(&self, at: Offset) -> SmallVec<[Offset; 6]> {
        Direction::ALL
            .iter()
            .map(|&d| self.neighbour(at, d))
            .collect()
    }

    /// Payload reached from `at` in `direction`.
    pub fn neighbour_cell(&self, at: Offset, direction: Direction) -> &T {
        &self[self.neighbour(at, direction)]
    }

    /// The direction that steps from `from` onto `to`.
    ///
    /// Both cells are compared after wrapping, so adjacency across a seam
    /// is found. When a tiny grid makes several directions land on `to`,
    /// the first in enumeration order wins.
    ///
    /// Returns `Err(GridError::NotAdjacent)` if no direction matches.
    pub fn direction(&self, from: Offset, to: Offset) -> Result<Direction, GridError> {
        let target = self.wrap(to);
        Direction::ALL
            .into_iter()
            .find(|&d| self.neighbour(from, d) == target)
            .ok_or(GridError::NotAdjacent { from, to })
    }

    /// Screen-space unit vector pointing from `from` towards adjacent `to`.
    pub fn direction_vector(&self, from: Offset, to: Offset) -> Result<Vec2, GridError> {
        self.direction(from, to).map(Direction::unit_vector)
    }

    /// Cube distance between two coordinates, ignoring wrap-around.
    pub fn distance(&self, a: Offset, b: Offset) -> u32 {
        a.to_cube().distance(b.to_cube())
    }

    /// Cube distance on the torus: the shortest distance over the wrapped
    /// images of `b` around `a`.
    ///
    /// Exact for grids with an even height. With an odd height the seam
    /// images are misaligned by half a cell and the result is only an
    /// approximation.
    pub fn toroidal_distance(&self, a: Offset, b: Offset) -> u32 {
        let a = self.wrap(a);
        let b = self.wrap(b);
        let w = i64::from(self.width);
        let h = i64::from(self.height);
        let mut best = u64::MAX;
        for ky in [-h, 0, h] {
            for kx in [-w, 0, w] {
                let d = cube_distance_wide(
                    i64::from(a.x),
                    i64::from(a.y),
                    i64::from(b.x) + kx,
                    i64::from(b.y) + ky,
                );
                best = best.min(d);
            }
        }
        u32::try_from(best).unwrap_or(u32::MAX)
    }

    /// Every cell within cube distance `radius` of `center`, wrapped.
    ///
    /// Always returns `3r(r + 1) + 1` coordinates, so a radius that reaches
    /// around the torus yields duplicates.
    pub fn range(&self, center: Offset, radius: u32) -> Vec<Offset> {
        let r = i64::from(radius);
        let c = self.wrap(center).to_cube();
        let (cx, cz) = (i64::from(c.x), i64::from(c.z));
        let expected = 3 * r as u64 * (r as u64 + 1) + 1;
        let mut out = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
        for dx in -r..=r {
            for dy in (-r).max(-dx - r)..=r.min(-dx + r) {
                let x = cx + dx;
                let z = cz - dx - dy;
                out.push(self.wrap_wide(x + (z - (z & 1)) / 2, z));
            }
        }
        out
    }

    /// Payloads of every cell in [`range`](Self::range).
    pub fn range_cells(&self, center: Offset, radius: u32) -> Vec<&T> {
        self.range(center, radius)
            .into_iter()
            .map(|at| &self[at])
            .collect()
    }
}

impl<T: HexCell> HexGrid<T> {
    /// Payloads of the six neighbours of `cell`, in [`Direction::ALL`] order.
    pub fn neighbours_of(&self, cell: &T) -> SmallVec<[&T; 6]> {
        self.neighbours(cell.location())
            .into_iter()
            .map(|at| &self[at])
            .collect()
    }

    /// The direction from payload `from` to adjacent payload `to`.
    pub fn direction_between(&self, from: &T, to: &T) -> Result<Direction, GridError> {
        self.direction(from.location(), to.location())
    }
}

fn cube_distance_wide(ax: i64, ay: i64, bx: i64, by: i64) -> u64 {
    let dx = (ax - (ay - (ay & 1)) / 2) - (bx - (by - (by & 1)) / 2);
    let dz = ay - by;
    let dy = -dx - dz;
    dx.unsigned_abs()
        .max(dy.unsigned_abs())
        .max(dz.unsigned_abs())
}

impl<T> Index<Offset> for HexGrid<T> {
    type Output = T;

    fn index(&self, at: Offset) -> &T {
        &self.cells[self.slot(at)]
    }
}

impl<T> IndexMut<Offset> for HexGrid<T> {
    fn index_mut(&mut self, at: Offset) -> &mut T {
        let slot = self.slot(at);
        &mut self.cells[slot]
    }
}

impl<'a, T> IntoIterator for &'a HexGrid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
