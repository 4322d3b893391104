//! Build-produced server actions manifest.
//!
//! The manifest is a deploy-time JSON artifact mapping `(runtime, action id)`
//! to the set of workers able to execute that action. It is loaded once per
//! process, never mutated afterwards, and read concurrently by every request
//! context:
//! - `ActionManifest` - the manifest and its `lookup` read contract
//! - `Runtime` - the execution runtime partition (`edge` / `node`)
//! - `ModuleId` / `ModuleReference` - opaque handles for the module loader

mod manifest;
mod module;
mod runtime;

pub use manifest::*;
pub use module::*;
pub use runtime::*;
