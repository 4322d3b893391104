//! Execution runtime partitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The runtime a request is being served under.
///
/// Supplied explicitly by the hosting environment at every entry point;
/// this layer never reads ambient process state to derive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    /// Edge runtime (V8-isolate style deployments).
    Edge,
    /// Node runtime (full server deployments).
    Node,
}

impl Runtime {
    /// Manifest key for this runtime partition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Edge => "edge",
            Runtime::Node => "node",
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
