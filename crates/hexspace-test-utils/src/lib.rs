//! Test fixtures for hexspace development.
//!
//! Provides a minimal [`HexCell`] payload ([`TestCell`]), grid builders for
//! common pathfinding scenarios, rectangle helpers for quadtree tests, and
//! seeded random inputs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use hexspace_core::Offset;
use hexspace_grid::{HexCell, HexGrid};

/// Grid payload carrying only a location and a movement cost.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TestCell {
    pub at: Offset,
    pub cost: u32,
}

impl TestCell {
    pub fn new(at: Offset, cost: u32) -> Self {
        Self { at, cost }
    }
}

impl HexCell for TestCell {
    fn location(&self) -> Offset {
        self.at
    }

    fn movement_cost(&self) -> u32 {
        self.cost
    }
}

/// Grid where every cell costs 1.
pub fn uniform_grid(width: u32, height: u32) -> HexGrid<TestCell> {
    grid_with_costs(width, height, |_| 1)
}

/// Grid whose costs come from `cost_of`.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn grid_with_costs<F>(width: u32, height: u32, mut cost_of: F) -> HexGrid<TestCell>
where
    F: FnMut(Offset) -> u32,
{
    HexGrid::from_fn(width, height, |at| TestCell::new(at, cost_of(at)))
        .expect("test grid dimensions must be non-zero")
}

/// Uniform grid with `walls` raised to `wall_cost`.
pub fn walled_grid(width: u32, height: u32, walls: &[Offset], wall_cost: u32) -> HexGrid<TestCell> {
    grid_with_costs(width, height, |at| {
        if walls.contains(&at) {
            wall_cost
        } else {
            1
        }
    })
}
