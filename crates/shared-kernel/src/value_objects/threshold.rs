// crates/shared-kernel/src/value_objects/threshold.rs
use serde::{Deserialize, Serialize};

/// Inclusive lower bound on line length, measured in characters.
///
/// A line of exactly `value()` characters passes. Zero admits everything,
/// including an empty line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinLineLength(usize);

impl MinLineLength {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Returns `true` when `line` is at least as long as the threshold.
    pub fn admits(self, line: &str) -> bool {
        // Counting stops early once the threshold is reached.
        self.0 == 0 || line.chars().nth(self.0 - 1).is_some()
    }
}

impl From<usize> for MinLineLength {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
