//! Grid invariant test helpers.
//!
//! These functions verify the topological contract of a [`HexGrid`]:
//! periodic wrapping, neighbour symmetry, direction/neighbour inversion,
//! and metric properties of the toroidal distance. They expect a grid with
//! an even height and at least three columns and rows, so that the six
//! neighbours of every cell are distinct.

use crate::cell::HexCell;
use crate::grid::HexGrid;
use hexspace_core::{Direction, Offset};

fn all_offsets<T>(grid: &HexGrid<T>) -> Vec<Offset> {
    let mut out = Vec::with_capacity(grid.area());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            out.push(Offset::new(x, y));
        }
    }
    out
}

/// Assert that each stored payload reports the location it is stored at,
/// and that shifting by a full width or height reaches the same payload.
pub fn assert_wraparound<T: HexCell>(grid: &HexGrid<T>) {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    for at in all_offsets(grid) {
        assert_eq!(grid[at].location(), at, "payload at {at} reports wrong location");
        for (dx, dy) in [(w, 0), (-w, 0), (0, h), (0, -h)] {
            let shifted = Offset::new(at.x + dx, at.y + dy);
            assert_eq!(
                grid[shifted].location(),
                at,
                "{shifted} does not wrap to {at}"
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric<T>(grid: &HexGrid<T>) {
    for at in all_offsets(grid) {
        for nb in grid.neighbours(at) {
            assert!(
                grid.neighbours(nb).contains(&at),
                "neighbour symmetry violated: {nb} in N({at}) but {at} not in N({nb})"
            );
        }
    }
}

/// Assert that `direction(c, neighbour(c, d)) == d` for every cell and direction.
pub fn assert_direction_inverts_neighbour<T>(grid: &HexGrid<T>) {
    for at in all_offsets(grid) {
        for d in Direction::ALL {
            let nb = grid.neighbour(at, d);
            assert_eq!(grid.direction(at, nb), Ok(d), "direction({at}, {nb}) != {d}");
        }
    }
}

/// Assert that every neighbour is at toroidal distance 1.
pub fn assert_neighbours_at_distance_one<T>(grid: &HexGrid<T>) {
    for at in all_offsets(grid) {
        for nb in grid.neighbours(at) {
            assert_eq!(grid.toroidal_distance(at, nb), 1, "{at} -> {nb}");
        }
    }
}

/// Assert reflexivity, symmetry, and the triangle inequality for
/// `toroidal_distance` over all cells.
pub fn assert_toroidal_distance_metric<T>(grid: &HexGrid<T>) {
    let cells = all_offsets(grid);
    for &a in &cells {
        assert_eq!(grid.toroidal_distance(a, a), 0, "distance({a}, {a}) != 0");
        for &b in &cells {
            let dab = grid.toroidal_distance(a, b);
            assert_eq!(dab, grid.toroidal_distance(b, a), "asymmetric: {a} {b}");
            if a != b {
                assert!(dab > 0, "distinct cells {a} and {b} at distance 0");
            }
            for &c in &cells {
                let dac = grid.toroidal_distance(a, c);
                let dbc = grid.toroidal_distance(b, c);
                assert!(
                    dac <= dab + dbc,
                    "triangle inequality violated: d({a},{c})={dac} > d({a},{b})={dab} + d({b},{c})={dbc}"
                );
            }
        }
    }
}

/// Assert that the radius-1 range equals the cell plus its neighbours.
pub fn assert_unit_range_matches_neighbours<T>(grid: &HexGrid<T>) {
    for at in all_offsets(grid) {
        let mut range = grid.range(at, 1);
        let mut expected = grid.neighbours(at).to_vec();
        expected.push(at);
        range.sort();
        expected.sort();
        assert_eq!(range, expected, "range({at}, 1) disagrees with neighbours");
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance<T: HexCell>(grid: &HexGrid<T>) {
    assert_wraparound(grid);
    assert_neighbours_symmetric(grid);
    assert_direction_inverts_neighbour(grid);
    assert_neighbours_at_distance_one(grid);
    assert_toroidal_distance_metric(grid);
    assert_unit_range_matches_neighbours(grid);
}
