use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_LIMIT, MAX_LIMIT};

/// Result-count limit clamped to [1, 20].
///
/// The HTTP layer clamps before invoking the engine; this type clamps again
/// so the core stays total regardless of what the caller passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Limit(usize);

impl Limit {
    /// Smallest accepted limit.
    pub const MIN: usize = 1;
    /// Largest accepted limit.
    pub const MAX: usize = MAX_LIMIT;

    /// Create a new Limit, clamping to [1, 20].
    pub fn new(value: usize) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Apply the caller-facing clamp policy to a raw optional value:
    /// missing or non-positive → default (5), above 20 → 20.
    pub fn from_raw(value: Option<i64>) -> Self {
        match value {
            Some(v) if v > 0 => Self::new(v.min(MAX_LIMIT as i64) as usize),
            _ => Self::default(),
        }
    }

    /// Get the raw usize value.
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Limit {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Limit> for usize {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}
