use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier assigned to every node when a document is loaded.
///
/// Ids are handed out in depth-first document order (epics before tasks,
/// stories before their sub-tasks), starting from zero on every load, and
/// are unique across the whole forest for the lifetime of a session. They
/// are never written back to YAML, so lookups by id only make sense
/// against the session that assigned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}
