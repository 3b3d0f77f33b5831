//! Geometry and random-input fixtures shared by tests and benches.

use hexspace_core::Offset;
use kurbo::Rect;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Rectangle from origin and size.
pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, x + w, y + h)
}

/// A small rectangle centred in each quadrant of `bounds`, in quadrant
/// order: top-left, top-right, bottom-left, bottom-right.
pub fn quadrant_probes(bounds: Rect) -> [Rect; 4] {
    let qw = bounds.width() / 4.0;
    let qh = bounds.height() / 4.0;
    let side_w = bounds.width() / 16.0;
    let side_h = bounds.height() / 16.0;
    let at = |cx: f64, cy: f64| Rect::new(cx - side_w, cy - side_h, cx + side_w, cy + side_h);
    [
        at(bounds.x0 + qw, bounds.y0 + qh),
        at(bounds.x0 + 3.0 * qw, bounds.y0 + qh),
        at(bounds.x0 + qw, bounds.y0 + 3.0 * qh),
        at(bounds.x0 + 3.0 * qw, bounds.y0 + 3.0 * qh),
    ]
}

/// `count` non-overlapping unit squares laid out on a lattice inside
/// `bounds`, each separated by at least one unit of empty space.
pub fn scattered_unit_rects(bounds: Rect, count: usize) -> Vec<Rect> {
    let per_row = ((bounds.width() - 1.0) / 2.0).floor().max(1.0) as usize;
    (0..count)
        .map(|i| {
            let col = (i % per_row) as f64;
            let row = (i / per_row) as f64;
            rect(bounds.x0 + 0.5 + 2.0 * col, bounds.y0 + 0.5 + 2.0 * row, 1.0, 1.0)
        })
        .collect()
}

/// Deterministic random integers.
pub fn seeded_values(seed: u64, count: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| i64::from(rng.next_u32() as i32)).collect()
}

/// Deterministic random in-range grid coordinates.
pub fn seeded_offsets(seed: u64, count: usize, width: u32, height: u32) -> Vec<Offset> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Offset::new(
                (rng.next_u32() % width) as i32,
                (rng.next_u32() % height) as i32,
            )
        })
        .collect()
}

/// Deterministic random rectangles with sides in `[min_side, max_side)`
/// lying fully inside `bounds`.
pub fn seeded_rects(seed: u64, count: usize, bounds: Rect, min_side: f64, max_side: f64) -> Vec<Rect> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut unit = move || f64::from(rng.next_u32()) / f64::from(u32::MAX);
    (0..count)
        .map(|_| {
            let w = min_side + unit() * (max_side - min_side);
            let h = min_side + unit() * (max_side - min_side);
            let x = bounds.x0 + unit() * (bounds.width() - w).max(0.0);
            let y = bounds.y0 + unit() * (bounds.height() - h).max(0.0);
            rect(x, y, w, h)
        })
        .collect()
}
