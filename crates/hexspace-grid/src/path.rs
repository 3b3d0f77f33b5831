//! A* pathfinding over per-cell movement costs.

use crate::cell::HexCell;
use crate::grid::HexGrid;
use hexspace_core::{Offset, PriorityQueue};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Distance estimate used to order the A* frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Hex distance on the torus ([`HexGrid::toroidal_distance`]).
    ///
    /// Admissible and consistent when every cell costs at least 1 and the
    /// grid height is even, so the returned path is optimal.
    #[default]
    CubeDistance,
    /// `|dx| + |dy|` on wrapped offset coordinates.
    ///
    /// Overestimates hex distance for diagonal moves and ignores the seam,
    /// so paths may be longer than optimal. Kept for layouts tuned against it.
    OffsetManhattan,
    /// No estimate: the search degrades to Dijkstra and is optimal for any
    /// non-negative costs, including zero-cost cells.
    Zero,
}

/// Pathfinding configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathConfig {
    /// Frontier ordering estimate. Default: [`Heuristic::CubeDistance`].
    pub heuristic: Heuristic,
}

/// A route found by [`HexGrid::shortest_path`].
///
/// Cells are wrapped coordinates from start to end, both inclusive, so a
/// path is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Offset>,
    cost: u64,
}

impl Path {
    /// Cells from start to end, inclusive.
    pub fn cells(&self) -> &[Offset] {
        &self.cells
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Offset> {
        self.cells
    }

    /// Number of cells, including both endpoints.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: a path holds at least its start cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of steps taken: `len() - 1`.
    pub fn hops(&self) -> usize {
        self.cells.len() - 1
    }

    /// Sum of the movement costs of every cell entered (the start is free).
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// First cell.
    pub fn start(&self) -> Offset {
        self.cells[0]
    }

    /// Last cell.
    pub fn end(&self) -> Offset {
        self.cells[self.cells.len() - 1]
    }
}

/// Frontier entry ordered so the lowest estimated total pops first.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    priority: u64,
    cost: u64,
    seq: u64,
    at: Offset,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower estimate first, then deeper (higher cost) first, then FIFO.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl<T: HexCell> HexGrid<T> {
    /// Cheapest route from `start` to `end` with the default [`PathConfig`].
    ///
    /// Returns `None` when no route exists. Stepping into a cell costs that
    /// cell's [`movement_cost`](HexCell::movement_cost).
    pub fn shortest_path(&self, start: Offset, end: Offset) -> Option<Path> {
        self.shortest_path_with(start, end, &PathConfig::default())
    }

    /// [`shortest_path`](Self::shortest_path) between two payloads' locations.
    pub fn shortest_path_between(&self, start: &T, end: &T) -> Option<Path> {
        self.shortest_path(start.location(), end.location())
    }

    /// A* search from `start` to `end` under `config`.
    ///
    /// Both endpoints are wrapped first. A cell is re-expanded whenever a
    /// cheaper route to it is found, so inconsistent heuristics still
    /// terminate; they may return a costlier path than the optimum.
    pub fn shortest_path_with(&self, start: Offset, end: Offset, config: &PathConfig) -> Option<Path> {
        let start = self.wrap(start);
        let goal = self.wrap(end);

        let mut frontier = PriorityQueue::new();
        let mut best: IndexMap<Offset, u64> = IndexMap::new();
        let mut came_from: IndexMap<Offset, Offset> = IndexMap::new();
        let mut seq = 0u64;
        let mut expanded = 0usize;

        best.insert(start, 0);
        frontier.push(Frontier {
            priority: self.estimate(config.heuristic, start, goal),
            cost: 0,
            seq,
            at: start,
        });

        while let Ok(current) = frontier.pop() {
            if best.get(&current.at).is_some_and(|&known| current.cost > known) {
                continue;
            }
            if current.at == goal {
                let path = Self::reconstruct(&came_from, start, goal, current.cost);
                log::debug!(
                    "path {start} -> {goal}: cost {}, {} hops, {expanded} cells expanded",
                    path.cost(),
                    path.hops()
                );
                return Some(path);
            }
            expanded += 1;

            for next in self.neighbours(current.at) {
                let cost = current.cost + u64::from(self[next].movement_cost());
                if best.get(&next).is_none_or(|&known| cost < known) {
                    best.insert(next, cost);
                    came_from.insert(next, current.at);
                    seq += 1;
                    frontier.push(Frontier {
                        priority: cost + self.estimate(config.heuristic, next, goal),
                        cost,
                        seq,
                        at: next,
                    });
                }
            }
        }

        log::debug!("no path {start} -> {goal}: frontier exhausted after {expanded} cells");
        None
    }

    fn estimate(&self, heuristic: Heuristic, from: Offset, goal: Offset) -> u64 {
        match heuristic {
            Heuristic::CubeDistance => u64::from(self.toroidal_distance(from, goal)),
            Heuristic::OffsetManhattan => u64::from(from.manhattan(goal)),
            Heuristic::Zero => 0,
        }
    }

    fn reconstruct(
        came_from: &IndexMap<Offset, Offset>,
        start: Offset,
        goal: Offset,
        cost: u64,
    ) -> Path {
        let mut cells = vec![goal];
        let mut at = goal;
        // The start cell never gets a predecessor: no route back to it is
        // cheaper than zero.
        while at != start {
            match came_from.get(&at) {
                Some(&prev) => {
                    cells.push(prev);
                    at = prev;
                }
                None => break,
            }
        }
        cells.reverse();
        Path { cells, cost }
    }
}
