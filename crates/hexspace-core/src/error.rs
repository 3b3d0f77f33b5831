//! Error types for core primitives.

use std::error::Error;
use std::fmt;

/// Errors from [`PriorityQueue`](crate::PriorityQueue) access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// `pop` or `peek` was called on a queue with no elements.
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "priority queue is empty"),
        }
    }
}

impl Error for HeapError {}
