//! Offset and cube hex coordinates.
//!
//! Grids address cells with [`Offset`] coordinates in the "odd-r" layout:
//! rows are horizontal and every odd row is shifted half a cell. Distance
//! and range arithmetic happen in [`Cube`] coordinates, where the three
//! axes always sum to zero.

use std::fmt;

/// Column/row address of a hex cell in the odd-r layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Offset {
    /// Create an offset coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to cube coordinates.
    ///
    /// `y - (y & 1)` is always even, so the halving is exact for negative
    /// rows as well.
    ///
    /// ```
    /// use hexspace_core::{Cube, Offset};
    ///
    /// assert_eq!(Offset::new(3, 1).to_cube(), Cube::new(3, -4, 1));
    /// assert_eq!(Offset::new(3, 1).to_cube().to_offset(), Offset::new(3, 1));
    /// ```
    pub const fn to_cube(self) -> Cube {
        let x = self.x - (self.y - (self.y & 1)) / 2;
        let z = self.y;
        Cube { x, y: -x - z, z }
    }

    /// Manhattan distance in offset space: `|dx| + |dy|`.
    pub fn manhattan(self, other: Offset) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Offset {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Three-axis hex coordinate with the invariant `x + y + z == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cube {
    /// Column axis.
    pub x: i32,
    /// Diagonal axis, always `-x - z`.
    pub y: i32,
    /// Row axis.
    pub z: i32,
}

impl Cube {
    /// Create a cube coordinate. Debug builds assert `x + y + z == 0`.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        debug_assert_eq!(x + y + z, 0, "cube coordinate must sum to zero");
        Self { x, y, z }
    }

    /// Convert back to odd-r offset coordinates.
    pub const fn to_offset(self) -> Offset {
        Offset {
            x: self.x + (self.z - (self.z & 1)) / 2,
            y: self.z,
        }
    }

    /// Hex distance: `max(|dx|, |dy|, |dz|)`.
    pub fn distance(self, other: Cube) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.max(dy).max(dz)
    }
}

impl std::ops::Add for Cube {
    type Output = Cube;

    fn add(self, rhs: Cube) -> Cube {
        Cube {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
