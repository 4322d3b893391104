//! The server actions manifest and its read contract.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::module::ModuleId;
use crate::runtime::Runtime;

/// Workers able to execute one action, keyed by worker page name.
///
/// Iteration order is the build-time declaration order; the resolver's
/// fallback tie-break depends on it.
pub type WorkerMap = IndexMap<String, ModuleId>;

/// Manifest entry for a single action id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionEntry {
    /// Pages that declare a handler for this action.
    pub workers: WorkerMap,
}

/// The build-produced server actions manifest.
///
/// Keyed by runtime partition, then by action id. Immutable after
/// construction: the deploy pipeline owns it and hands it to request
/// contexts by shared reference, so unsynchronized concurrent reads are
/// safe. Action ids are globally unique within a runtime partition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionManifest {
    /// Actions available on the node runtime.
    #[serde(default)]
    pub node: IndexMap<String, ActionEntry>,
    /// Actions available on the edge runtime.
    #[serde(default)]
    pub edge: IndexMap<String, ActionEntry>,
}

impl ActionManifest {
    /// Look up the worker map for an action on a runtime.
    ///
    /// Pure read: an unknown action id is `None`, never an error.
    pub fn lookup(&self, runtime: Runtime, action_id: &str) -> Option<&WorkerMap> {
        let partition = match runtime {
            Runtime::Node => &self.node,
            Runtime::Edge => &self.edge,
        };
        partition.get(action_id).map(|entry| &entry.workers)
    }

    /// Parse a manifest from its JSON build artifact.
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a manifest from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Errors from loading the manifest artifact.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed manifest: {0}")]
    Parse(#[from] serde_json::Error),
}
