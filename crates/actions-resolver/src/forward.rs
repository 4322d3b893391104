//! Forwarding-target selection.

use actions_manifest::{ActionManifest, Runtime};
use actions_router::{denormalize_worker_page_name, normalize_worker_page_name};

/// Pick the worker page name to forward an action invocation to.
///
/// Returns `None` when the action is unknown on this runtime (nothing to
/// forward to) or when the invoking page has its own worker for the action
/// (no forwarding needed). Otherwise returns the first worker declared for
/// the action at build time: a deterministic-per-build, otherwise arbitrary
/// tie-break.
pub fn select_worker_page_name_for_forwarding<'m>(
    action_id: &str,
    page_name: &str,
    runtime: Runtime,
    manifest: &'m ActionManifest,
) -> Option<&'m str> {
    let workers = manifest.lookup(runtime, action_id)?;
    let worker_name = normalize_worker_page_name(page_name);

    if workers.contains_key(&worker_name) {
        return None;
    }

    workers.keys().next().map(String::as_str)
}

/// Like [`select_worker_page_name_for_forwarding`], but denormalized to the
/// routable page name the HTTP layer redispatches against.
pub fn select_worker_for_forwarding(
    action_id: &str,
    page_name: &str,
    runtime: Runtime,
    manifest: &ActionManifest,
) -> Option<String> {
    let worker_page_name =
        select_worker_page_name_for_forwarding(action_id, page_name, runtime, manifest)?;
    Some(denormalize_worker_page_name(worker_page_name))
}
