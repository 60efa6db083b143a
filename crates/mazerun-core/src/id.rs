//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an agent within one episode.
///
/// Assigned sequentially at episode start: `AgentId(n)` is the n-th
/// controller slot. The same id keys the decision vector the external
/// controller returns for that agent on every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl AgentId {
    /// The id as a slot index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Counts optimizer generations.
///
/// Each generation runs one episode on a freshly generated maze. Supplied
/// by the caller; nothing in the workspace keeps a global counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenerationId(pub u64);

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GenerationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl GenerationId {
    /// The following generation.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Monotonically increasing tick counter within an episode.
///
/// `TickId(0)` is the state before any step; each call to
/// `Episode::step` advances it by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

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
