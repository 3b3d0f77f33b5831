//! Benchmark profiles for hexspace.
//!
//! Provides deterministic workloads shared by the criterion benches:
//!
//! - [`reference_grid`]: 100x100 uniform-cost grid (10K cells)
//! - [`terrain_grid`]: same size, with cost bands that force A* to detour
//! - [`scattered_boxes`]: deterministic bounding rectangles for quadtree loads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexspace_core::Offset;
use hexspace_grid::{GridError, HexCell, HexGrid};
use hexspace_quadtree::Rect;

/// Side length of the reference grid.
pub const REFERENCE_SIDE: u32 = 100;

/// A payload carrying its own location and a movement cost.
#[derive(Clone, Copy, Debug)]
pub struct BenchCell {
    at: Offset,
    cost: u32,
}

impl HexCell for BenchCell {
    fn location(&self) -> Offset {
        self.at
    }

    fn movement_cost(&self) -> u32 {
        self.cost
    }
}

/// Build a reference benchmark grid: 100x100, every step costs 1.
pub fn reference_grid() -> Result<HexGrid<BenchCell>, GridError> {
    HexGrid::from_fn(REFERENCE_SIDE, REFERENCE_SIDE, |at| BenchCell { at, cost: 1 })
}

/// 100x100 grid where every tenth column costs 25 except for one gap row.
pub fn terrain_grid() -> Result<HexGrid<BenchCell>, GridError> {
    HexGrid::from_fn(REFERENCE_SIDE, REFERENCE_SIDE, |at| {
        let wall = at.x % 10 == 5 && at.y != 50;
        BenchCell {
            at,
            cost: if wall { 25 } else { 1 },
        }
    })
}

/// `count` deterministic boxes inside `bounds`, sides between 1 and 16.
///
/// Uses a linear congruential sequence so benches need no RNG dependency.
pub fn scattered_boxes(bounds: Rect, count: usize) -> Vec<Rect> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..count)
        .map(|_| {
            let w = 1.0 + next() * 15.0;
            let h = 1.0 + next() * 15.0;
            let x = bounds.x0 + next() * (bounds.width() - w);
            let y = bounds.y0 + next() * (bounds.height() - h);
            Rect::new(x, y, x + w, y + h)
        })
        .collect()
}
