//! Module handles passed through to the module-loading subsystem.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a server module within a bundle.
///
/// Bundlers emit either string or numeric module ids; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleId {
    Str(String),
    Num(u64),
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleId::Str(s) => f.write_str(s),
            ModuleId::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ModuleId {
    fn from(s: &str) -> Self {
        ModuleId::Str(s.to_string())
    }
}

impl From<u64> for ModuleId {
    fn from(n: u64) -> Self {
        ModuleId::Num(n)
    }
}

/// A resolved reference to a loadable server module.
///
/// Opaque to the dispatch layer; the module loader consumes it. `name` is the
/// action id the reference was resolved for, `chunks` the chunk files the
/// loader must pull in before invoking the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleReference {
    /// Bundle-internal module id.
    pub id: ModuleId,
    /// Chunk files required by the module, in load order.
    pub chunks: Vec<String>,
    /// Export name to invoke (the action id).
    pub name: String,
}
