//! Recursive quadtree node.

use crate::config::{ConfigError, QuadtreeConfig};
use kurbo::Rect;

#[derive(Clone, Debug)]
struct Entry<T> {
    item: T,
    bounds: Rect,
}

/// A quadtree node over payloads of type `T`.
///
/// Each node owns its entries and, once split, exactly four children in
/// quadrant order: top-left, top-right, bottom-left, bottom-right (y grows
/// downwards). A node splits once, when an insertion leaves it holding more
/// than `max_entries` entries while it is shallower than `max_depth`.
///
/// An entry moves into a child only when its rectangle lies inside that
/// quadrant without touching either mid line. Everything else, including
/// zero-area rectangles and rectangles that leave the node's bounds, stays
/// at the node.
///
/// # Examples
///
/// ```
/// use hexspace_quadtree::{Quadtree, Rect};
///
/// let mut tree = Quadtree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
/// tree.insert("rock", Rect::new(10.0, 10.0, 20.0, 20.0));
/// tree.insert("tree", Rect::new(60.0, 60.0, 70.0, 70.0));
///
/// let near_rock = tree.query(Rect::new(12.0, 12.0, 14.0, 14.0));
/// assert!(near_rock.contains(&&"rock"));
/// ```
#[derive(Clone, Debug)]
pub struct Quadtree<T> {
    bounds: Rect,
    depth: u32,
    config: QuadtreeConfig,
    entries: Vec<Entry<T>>,
    children: Option<Box<[Quadtree<T>; 4]>>,
}

impl<T> Quadtree<T> {
    /// Create an empty root node with the default [`QuadtreeConfig`].
    pub fn new(bounds: Rect) -> Self {
        Self::node(bounds, 0, QuadtreeConfig::default())
    }

    /// Create an empty root node with custom split limits.
    ///
    /// Returns `Err(ConfigError::ZeroCapacity)` if `config.max_entries == 0`.
    pub fn with_config(bounds: Rect, config: QuadtreeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::node(bounds, 0, config))
    }

    fn node(bounds: Rect, depth: u32, config: QuadtreeConfig) -> Self {
        Self {
            bounds,
            depth,
            config,
            entries: Vec::new(),
            children: None,
        }
    }

    /// The region this node covers.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Depth of this node; the root is 0.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Split limits shared by every node in the tree.
    pub fn config(&self) -> QuadtreeConfig {
        self.config
    }

    /// Payloads held directly at this node.
    pub fn contents(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.item)
    }

    /// The four children, if this node has split.
    pub fn children(&self) -> Option<&[Quadtree<T>; 4]> {
        self.children.as_deref()
    }

    /// Returns `true` once this node has split.
    pub fn is_split(&self) -> bool {
        self.children.is_some()
    }

    /// Total number of entries in this subtree.
    pub fn len(&self) -> usize {
        self.entries.len()
            + self
                .children
                .iter()
                .flat_map(|c| c.iter())
                .map(Quadtree::len)
                .sum::<usize>()
    }

    /// Returns `true` if the subtree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flat_map(|c| c.iter())
            .map(Quadtree::node_count)
            .sum::<usize>()
    }

    /// Insert `item` covering `bounds`.
    pub fn insert(&mut self, item: T, bounds: Rect) {
        if let Some(children) = self.children.as_mut() {
            if let Some(index) = fit_quadrant(self.bounds, bounds) {
                children[index].insert(item, bounds);
                return;
            }
        }

        self.entries.push(Entry { item, bounds });
        if self.entries.len() > self.config.max_entries
            && self.depth < self.config.max_depth
            && self.children.is_none()
        {
            self.split();
        }
    }

    /// Broad-phase candidates for `bounds`.
    ///
    /// Returns every entry held at this node, unfiltered, plus the results
    /// of the one child quadrant that fully contains `bounds`, if any. A
    /// query straddling a mid line does not visit any child, so entries that
    /// live only in sibling quadrants are not reported.
    pub fn query(&self, bounds: Rect) -> Vec<&T> {
        let mut out = Vec::new();
        self.query_into(bounds, &mut out);
        out
    }

    fn query_into<'a>(&'a self, bounds: Rect, out: &mut Vec<&'a T>) {
        if let (Some(children), Some(index)) = (&self.children, fit_quadrant(self.bounds, bounds)) {
            children[index].query_into(bounds, out);
        }
        out.extend(self.entries.iter().map(|e| &e.item));
    }

    /// Drop every entry and child node.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.children = None;
    }

    fn split(&mut self) {
        let depth = self.depth + 1;
        let config = self.config;
        let mut children = Box::new(quadrants(self.bounds).map(|b| Self::node(b, depth, config)));

        let held = std::mem::take(&mut self.entries);
        let total = held.len();
        for entry in held {
            match fit_quadrant(self.bounds, entry.bounds) {
                Some(index) => children[index].insert(entry.item, entry.bounds),
                None => self.entries.push(entry),
            }
        }
        self.children = Some(children);

        log::debug!(
            "quadtree split at depth {} over {:?}: {} of {total} entries moved down",
            self.depth,
            self.bounds,
            total - self.entries.len()
        );
    }
}

/// The four equal sub-rectangles of `r` in quadrant order.
fn quadrants(r: Rect) -> [Rect; 4] {
    let c = r.center();
    [
        Rect::new(r.x0, r.y0, c.x, c.y),
        Rect::new(c.x, r.y0, r.x1, c.y),
        Rect::new(r.x0, c.y, c.x, r.y1),
        Rect::new(c.x, c.y, r.x1, r.y1),
    ]
}

/// Index of the quadrant of `node` that holds `b`, if exactly one does.
fn fit_quadrant(node: Rect, b: Rect) -> Option<usize> {
    if !(b.width() > 0.0 && b.height() > 0.0) {
        return None;
    }
    if b.x0 < node.x0 || b.y0 < node.y0 || b.x1 > node.x1 || b.y1 > node.y1 {
        return None;
    }
    let mid = node.center();
    let top = b.y1 < mid.y;
    let bottom = b.y0 > mid.y;
    let left = b.x1 < mid.x;
    let right = b.x0 > mid.x;
    match (top, bottom, left, right) {
        (true, _, true, _) => Some(0),
        (true, _, _, true) => Some(1),
        (_, true, true, _) => Some(2),
        (_, true, _, true) => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexspace_test_utils::fixtures::{quadrant_probes, rect};
    use proptest::prelude::*;

    fn world() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    // ── Quadrant fitting ────────────────────────────────────────

    #[test]
    fn fit_quadrant_by_corner() {
        assert_eq!(fit_quadrant(world(), rect(10.0, 10.0, 5.0, 5.0)), Some(0));
        assert_eq!(fit_quadrant(world(), rect(60.0, 10.0, 5.0, 5.0)), Some(1));
        assert_eq!(fit_quadrant(world(), rect(10.0, 60.0, 5.0, 5.0)), Some(2));
        assert_eq!(fit_quadrant(world(), rect(60.0, 60.0, 5.0, 5.0)), Some(3));
    }

    #[test]
    fn touching_a_mid_line_straddles() {
        assert_eq!(fit_quadrant(world(), rect(40.0, 10.0, 10.0, 5.0)), None);
        assert_eq!(fit_quadrant(world(), rect(50.0, 10.0, 5.0, 5.0)), None);
        assert_eq!(fit_quadrant(world(), rect(10.0, 45.0, 5.0, 10.0)), None);
    }

    #[test]
    fn zero_area_never_fits() {
        assert_eq!(fit_quadrant(world(), Rect::new(10.0, 10.0, 10.0, 20.0)), None);
        assert_eq!(fit_quadrant(world(), Rect::new(10.0, 10.0, 10.0, 10.0)), None);
    }

    #[test]
    fn outside_node_never_fits() {
        assert_eq!(fit_quadrant(world(), rect(-5.0, 10.0, 10.0, 10.0)), None);
        assert_eq!(fit_quadrant(world(), rect(95.0, 95.0, 10.0, 10.0)), None);
    }

    #[test]
    fn quadrants_tile_the_node() {
        let q = quadrants(Rect::new(0.0, 0.0, 8.0, 4.0));
        assert_eq!(q[0], Rect::new(0.0, 0.0, 4.0, 2.0));
        assert_eq!(q[1], Rect::new(4.0, 0.0, 8.0, 2.0));
        assert_eq!(q[2], Rect::new(0.0, 2.0, 4.0, 4.0));
        assert_eq!(q[3], Rect::new(4.0, 2.0, 8.0, 4.0));
    }

    // ── Insert / split ──────────────────────────────────────────

    #[test]
    fn no_split_at_capacity() {
        let mut tree = Quadtree::new(world());
        for (i, r) in quadrant_probes(world()).into_iter().enumerate() {
            tree.insert(i, r);
        }
        assert!(!tree.is_split());
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn one_over_capacity_splits_once() {
        let mut tree = Quadtree::new(world());
        let probes = quadrant_probes(world());
        for (i, r) in probes.iter().enumerate() {
            tree.insert(i, *r);
        }
        tree.insert(4, rect(5.0, 5.0, 2.0, 2.0));

        assert!(tree.is_split());
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.contents().count(), 0);
        let children = tree.children().unwrap();
        assert_eq!(children[0].contents().count(), 2);
        for child in &children[1..] {
            assert_eq!(child.contents().count(), 1);
            assert!(!child.is_split());
            assert_eq!(child.depth(), 1);
        }
        for (i, r) in probes.iter().enumerate() {
            assert!(tree.query(*r).contains(&&i), "probe {i} not found");
        }
    }

    #[test]
    fn straddlers_stay_at_the_splitting_node() {
        let mut tree = Quadtree::new(world());
        let cross = rect(45.0, 45.0, 10.0, 10.0);
        for i in 0..5 {
            tree.insert(i, cross);
        }
        assert!(tree.is_split());
        assert_eq!(tree.contents().count(), 5);
        assert_eq!(tree.node_count(), 5);
        // Later insertions do not split again.
        tree.insert(5, cross);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.contents().count(), 6);
    }

    #[test]
    fn crowded_quadrant_splits_recursively() {
        let mut tree = Quadtree::new(world());
        let spots = [(5.0, 5.0), (30.0, 5.0), (5.0, 30.0), (30.0, 30.0), (10.0, 10.0)];
        for (i, (x, y)) in spots.into_iter().enumerate() {
            tree.insert(i, rect(x, y, 1.0, 1.0));
        }
        // All five fit the top-left quadrant, which then splits again.
        assert_eq!(tree.node_count(), 9);
        let top_left = &tree.children().unwrap()[0];
        assert!(top_left.is_split());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn depth_limit_stops_splitting() {
        let config = QuadtreeConfig {
            max_depth: 1,
            max_entries: 1,
        };
        let mut tree = Quadtree::with_config(world(), config).unwrap();
        for i in 0..10 {
            tree.insert(i, rect(1.0 + i as f64, 1.0, 0.5, 0.5));
        }
        assert_eq!(tree.node_count(), 5);
        let top_left = &tree.children().unwrap()[0];
        assert_eq!(top_left.depth(), 1);
        assert!(!top_left.is_split());
        assert_eq!(top_left.contents().count(), 10);
    }

    #[test]
    fn with_config_rejects_zero_capacity() {
        let config = QuadtreeConfig {
            max_depth: 3,
            max_entries: 0,
        };
        assert!(matches!(
            Quadtree::<u8>::with_config(world(), config),
            Err(ConfigError::ZeroCapacity)
        ));
    }

    #[test]
    fn zero_area_entries_stay_at_root() {
        let mut tree = Quadtree::new(world());
        for i in 0..6 {
            tree.insert(i, Rect::new(10.0, 10.0, 10.0, 10.0));
        }
        assert!(tree.is_split());
        assert_eq!(tree.contents().count(), 6);
    }

    // ── Query ───────────────────────────────────────────────────

    #[test]
    fn query_includes_ancestors_unfiltered() {
        let mut tree = Quadtree::new(world());
        let probes = quadrant_probes(world());
        for (i, r) in probes.iter().enumerate() {
            tree.insert(i, *r);
        }
        tree.insert(10, rect(45.0, 45.0, 10.0, 10.0));
        // The straddler lives at the root, so every query sees it.
        for r in probes {
            assert!(tree.query(r).contains(&&10));
        }
        // A bottom-right query does not see the top-left probe.
        assert!(!tree.query(probes[3]).contains(&&0));
    }

    #[test]
    fn straddling_query_does_not_fan_out() {
        let mut tree = Quadtree::new(world());
        let probes = quadrant_probes(world());
        for (i, r) in probes.iter().enumerate() {
            tree.insert(i, *r);
        }
        tree.insert(4, rect(5.0, 5.0, 2.0, 2.0));
        // Covers the whole world but fits no quadrant: only root entries.
        assert!(tree.query(world()).is_empty());
    }

    #[test]
    fn query_on_empty_tree() {
        let tree: Quadtree<u32> = Quadtree::new(world());
        assert!(tree.query(rect(1.0, 1.0, 1.0, 1.0)).is_empty());
        assert!(tree.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut tree = Quadtree::new(world());
        for i in 0..20 {
            tree.insert(i, rect(1.0 + 4.0 * i as f64, 1.0 + 4.0 * i as f64, 1.0, 1.0));
        }
        assert!(tree.is_split());
        tree.clear();
        assert!(tree.is_empty());
        assert!(!tree.is_split());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.bounds(), world());

        // The cleared root can split again.
        for (i, r) in quadrant_probes(world()).into_iter().enumerate() {
            tree.insert(i, r);
        }
        tree.insert(4, rect(5.0, 5.0, 2.0, 2.0));
        assert!(tree.is_split());
    }

    proptest! {
        #[test]
        fn every_entry_found_by_its_own_bounds(
            rects in proptest::collection::vec(
                (0.0f64..99.0, 0.0f64..99.0, 0.0f64..20.0, 0.0f64..20.0),
                0..80,
            ),
        ) {
            let mut tree = Quadtree::new(world());
            let mut inserted = Vec::new();
            for (i, (x, y, w, h)) in rects.into_iter().enumerate() {
                let r = Rect::new(x, y, (x + w).min(100.0), (y + h).min(100.0));
                tree.insert(i, r);
                inserted.push(r);
            }
            prop_assert_eq!(tree.len(), inserted.len());
            for (i, r) in inserted.iter().enumerate() {
                prop_assert!(tree.query(*r).contains(&&i), "entry {} with {:?} not found", i, r);
            }
        }
    }
}
