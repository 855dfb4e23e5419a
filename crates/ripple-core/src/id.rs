//! The [`StepId`] newtype.

use std::fmt;

/// Index of a simulation step.
///
/// The driver calls `advance` with strictly increasing step indices;
/// the index also decides when a drop is injected (`step % interval`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
