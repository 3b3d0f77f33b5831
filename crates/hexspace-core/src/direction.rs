//! The six hex directions and their offset-space steps.

use crate::coord::Offset;
use kurbo::Vec2;
use std::f64::consts::PI;
use std::fmt;

/// Offset-space `(dx, dy)` per direction, in enum order.
///
/// Rows with an odd index are shifted half a cell, so every direction with
/// a non-zero `dy` also adds the source row's parity to `dx`.
const OFFSET_DELTAS: [(i32, i32); 6] = [
    (1, 0),   // E
    (0, 1),   // NE
    (-1, 1),  // NW
    (-1, 0),  // W
    (-1, -1), // SW
    (0, -1),  // SE
];

/// One of the six neighbour directions of a hex cell.
///
/// The declaration order is the enumeration order used everywhere a
/// direction sequence is produced, and [`index`](Self::index) times 60°
/// is the direction's screen angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// East.
    E,
    /// North-east.
    NE,
    /// North-west.
    NW,
    /// West.
    W,
    /// South-west.
    SW,
    /// South-east.
    SE,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Direction; 6] = [
        Direction::E,
        Direction::NE,
        Direction::NW,
        Direction::W,
        Direction::SW,
        Direction::SE,
    ];

    /// Position in [`ALL`](Self::ALL).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The raw `(dx, dy)` delta before the odd-row adjustment.
    pub const fn offset_delta(self) -> (i32, i32) {
        OFFSET_DELTAS[self as usize]
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        Self::ALL[(self as usize + 3) % 6]
    }

    /// Apply this direction's row-adjusted step to `from`.
    ///
    /// The result is not wrapped; grids apply their own wrapping.
    ///
    /// ```
    /// use hexspace_core::{Direction, Offset};
    ///
    /// // Even row: NE keeps the column.
    /// assert_eq!(Direction::NE.step(Offset::new(2, 0)), Offset::new(2, 1));
    /// // Odd row: NE shifts one column east.
    /// assert_eq!(Direction::NE.step(Offset::new(2, 1)), Offset::new(3, 2));
    /// ```
    pub fn step(self, from: Offset) -> Offset {
        let (dx, dy) = self.offset_delta();
        let stagger = if dy == 0 { 0 } else { from.y.rem_euclid(2) };
        Offset::new(from.x + dx + stagger, from.y + dy)
    }

    /// Screen angle in radians: `index × 60°`.
    pub fn angle(self) -> f64 {
        self.index() as f64 * PI / 3.0
    }

    /// Unit vector for this direction in screen space (y grows downwards).
    ///
    /// ```
    /// use hexspace_core::Direction;
    ///
    /// let e = Direction::E.unit_vector();
    /// assert!((e.x - 1.0).abs() < 1e-9 && e.y.abs() < 1e-9);
    /// let ne = Direction::NE.unit_vector();
    /// assert!(ne.y < 0.0);
    /// ```
    pub fn unit_vector(self) -> Vec2 {
        let v = Vec2::from_angle(self.angle());
        Vec2::new(v.x, -v.y)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::E => "E",
            Self::NE => "NE",
            Self::NW => "NW",
            Self::W => "W",
            Self::SW => "SW",
            Self::SE => "SE",
        };
        f.write_str(name)
    }
}
