//! Path and page-name utilities for server actions dispatch.
//!
//! This crate provides the pure string transforms shared by the manifest and
//! resolver layers:
//! - segment-aware path prefix handling
//! - app-route canonicalization
//! - worker page name normalization/denormalization
//!
//! A route exists in two encodings: the *worker page name* used as a manifest
//! key (always rooted at the `app` bundle segment, e.g. `app/dashboard/page`)
//! and the *routable page name* served over HTTP (e.g. `/dashboard`). The
//! functions here convert between the two.

mod app_paths;
mod prefix;
mod worker_name;

pub use app_paths::*;
pub use prefix::*;
pub use worker_name::*;
