//! Cross-worker server action resolution.
//!
//! Given an action id and the page it was invoked from, decide which
//! deployable unit owns the handler:
//! - `ServerModuleMap` - a per-request, lazily-caching view over the manifest
//!   that resolves action ids to loadable module references
//! - `select_worker_for_forwarding` - picks the fallback worker when the
//!   invoking page's own worker does not declare the action
//!
//! Resolution is synchronous and in-memory. Forwarding decisions are returned
//! as data; the HTTP layer performs the actual redispatch.

mod error;
mod forward;
mod module_map;

pub use error::*;
pub use forward::*;
pub use module_map::*;
