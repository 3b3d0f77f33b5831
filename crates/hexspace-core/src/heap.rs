//! Array-backed binary max-heap.

use crate::error::HeapError;

/// A binary max-heap over any totally ordered element.
///
/// The larger element always pops first. Callers that need "smallest
/// first" ordering (such as a search frontier keyed on cost) wrap their
/// key in [`std::cmp::Reverse`] or implement `Ord` accordingly.
///
/// Elements live in a single contiguous buffer using implicit binary-tree
/// indexing: the children of index `i` are `2i + 1` and `2i + 2`, and the
/// parent of `i` is `(i - 1) / 2`. The queue tracks a logical capacity
/// that doubles whenever a push finds the buffer full.
///
/// # Examples
///
/// ```
/// use hexspace_core::PriorityQueue;
///
/// let mut heap = PriorityQueue::with_capacity(2);
/// heap.push(3);
/// heap.push(9);
/// heap.push(5);
/// assert_eq!(heap.capacity(), 4);
///
/// assert_eq!(heap.peek(), Ok(&9));
/// assert_eq!(heap.pop(), Ok(9));
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Ok(3));
/// assert!(heap.pop().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<T: Ord> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Ord> PriorityQueue<T> {
    /// Initial capacity used by [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Create an empty queue with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY).
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty queue with room for `capacity` elements before the
    /// first growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of elements in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity: the element count at which the next push grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert an element, doubling the capacity first if the queue is full.
    pub fn push(&mut self, item: T) {
        if self.items.len() >= self.capacity {
            self.grow();
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the largest element.
    ///
    /// Returns `Err(HeapError::Empty)` if the queue has no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::Empty);
        }
        // swap_remove moves the last element into the root slot.
        let top = self.items.swap_remove(0);
        self.sift_down(0);
        Ok(top)
    }

    /// Borrow the largest element without removing it.
    ///
    /// Returns `Err(HeapError::Empty)` if the queue has no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.items.first().ok_or(HeapError::Empty)
    }

    /// Remove every element. Capacity is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over the elements in storage order (not priority order).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Pop every element, largest first.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }

    /// Consume the queue, returning its elements sorted largest first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        out.extend(self.drain_sorted());
        out
    }

    fn grow(&mut self) {
        let old = self.capacity;
        let new = old.saturating_mul(2).max(1);
        self.items.reserve_exact(new - self.items.len());
        self.capacity = new;
        log::trace!("priority queue grew from {old} to {new}");
    }

    fn sift_up(&mut self, mut at: usize) {
        while at > 0 {
            let parent = (at - 1) / 2;
            if self.items[parent] >= self.items[at] {
                break;
            }
            self.items.swap(parent, at);
            at = parent;
        }
    }

    fn sift_down(&mut self, mut at: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * at + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let larger = if right < len && self.items[right] > self.items[left] {
                right
            } else {
                left
            };
            if self.items[at] >= self.items[larger] {
                break;
            }
            self.items.swap(at, larger);
            at = larger;
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

/// Draining iterator returned by [`PriorityQueue::drain_sorted`].
///
/// Yields elements largest first. Elements not consumed remain in the queue.
#[derive(Debug)]
pub struct DrainSorted<'a, T: Ord> {
    heap: &'a mut PriorityQueue<T>,
}

impl<T: Ord> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.heap.len();
        (n, Some(n))
    }
}

impl<T: Ord> ExactSizeIterator for DrainSorted<'_, T> {}
