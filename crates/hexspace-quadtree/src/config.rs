//! Quadtree configuration and validation.

use std::error::Error;
use std::fmt;

/// Split limits for a [`Quadtree`](crate::Quadtree).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadtreeConfig {
    /// Deepest level at which a node may still split. The root is depth 0.
    /// Default: 10.
    pub max_depth: u32,
    /// Entries a node holds before its next insertion triggers a split.
    /// Default: 4.
    pub max_entries: usize,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_entries: 4,
        }
    }
}

impl QuadtreeConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entries == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

/// Errors detected by [`QuadtreeConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_entries` is zero, so every insertion would split.
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "max_entries must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
