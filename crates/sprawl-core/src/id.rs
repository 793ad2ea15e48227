//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing step counter.
///
/// Tick 0 is the initial grid; the first call to `step` produces tick 1.
/// Draw sources key their random streams by tick, so two runs with the
/// same seed see identical draws at identical ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
