//! Per-request server module map.

use std::collections::HashMap;
use std::sync::Arc;

use actions_manifest::{ActionManifest, ModuleReference, Runtime};
use actions_router::{denormalize_worker_page_name, normalize_worker_page_name};
use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::forward::select_worker_page_name_for_forwarding;

/// What to do when the handler lives on a worker other than the invoking
/// page's own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForwardingPolicy {
    /// Resolve the fallback worker's module and execute it in-process.
    ///
    /// Only sound when all workers are deployed into one process. This is
    /// the historical behavior and the default.
    #[default]
    ResolveInProcess,

    /// Refuse to execute locally; surface [`ResolveError::ForwardRequired`]
    /// carrying the routable target so the caller redispatches the request.
    ///
    /// Required when workers are isolated deployment units (e.g. one lambda
    /// per page bundle), where the fallback module is not loadable here.
    ForwardExternally,
}

/// A lazily-populated, per-request view over the manifest for one page.
///
/// Presents the `resolve(action_id)` read contract to the rendering and
/// execution subsystem while hiding the manifest's worker/runtime structure.
/// Resolved references are cached for the lifetime of the view; each request
/// context owns its own instance exclusively, so no locking is involved.
#[derive(Debug)]
pub struct ServerModuleMap<'m> {
    manifest: &'m ActionManifest,
    page_name: String,
    runtime: Runtime,
    policy: ForwardingPolicy,
    cache: HashMap<String, Arc<ModuleReference>>,
}

impl<'m> ServerModuleMap<'m> {
    /// Create a view for one `(page, runtime)` pair.
    pub fn new(manifest: &'m ActionManifest, page_name: impl Into<String>, runtime: Runtime) -> Self {
        Self {
            manifest,
            page_name: page_name.into(),
            runtime,
            policy: ForwardingPolicy::default(),
            cache: HashMap::new(),
        }
    }

    /// Set the cross-worker forwarding policy.
    pub fn with_policy(mut self, policy: ForwardingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The page this view resolves for.
    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    /// Resolve an action id to a loadable module reference.
    ///
    /// Tries the invoking page's own worker first, then the forwarding
    /// fallback per the configured [`ForwardingPolicy`]. An action no worker
    /// can serve is a manifest inconsistency and fails with
    /// [`ResolveError::MissingWorker`].
    pub fn resolve(&mut self, action_id: &str) -> Result<Arc<ModuleReference>, ResolveError> {
        if let Some(cached) = self.cache.get(action_id) {
            return Ok(Arc::clone(cached));
        }

        let worker_page_name = normalize_worker_page_name(&self.page_name);
        let workers = self.manifest.lookup(self.runtime, action_id);
        let mut module_id = workers.and_then(|w| w.get(&worker_page_name));

        if module_id.is_none() {
            if let Some(fallback) = select_worker_page_name_for_forwarding(
                action_id,
                &self.page_name,
                self.runtime,
                self.manifest,
            ) {
                match self.policy {
                    ForwardingPolicy::ResolveInProcess => {
                        warn!(
                            action_id,
                            page = %self.page_name,
                            fallback_worker = fallback,
                            "action not owned by this page, resolving fallback worker in-process"
                        );
                        module_id = workers.and_then(|w| w.get(fallback));
                    }
                    ForwardingPolicy::ForwardExternally => {
                        let target_page = denormalize_worker_page_name(fallback);
                        debug!(
                            action_id,
                            page = %self.page_name,
                            %target_page,
                            "action owned by another worker, requesting forward"
                        );
                        return Err(ResolveError::ForwardRequired {
                            action_id: action_id.to_string(),
                            target_page,
                        });
                    }
                }
            }
        }

        let Some(module_id) = module_id else {
            return Err(ResolveError::MissingWorker {
                action_id: action_id.to_string(),
                page_name: self.page_name.clone(),
            });
        };

        let reference = Arc::new(ModuleReference {
            id: module_id.clone(),
            chunks: Vec::new(),
            name: action_id.to_string(),
        });
        self.cache
            .insert(action_id.to_string(), Arc::clone(&reference));
        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actions_manifest::ModuleId;

    fn manifest() -> ActionManifest {
        ActionManifest::from_json_str(
            r#"{
                "node": {
                    "action-a": {
                        "workers": { "app/x": "m1", "app/y": "m2" }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_local_worker_directly() {
        let m = manifest();
        let mut map = ServerModuleMap::new(&m, "/x", Runtime::Node);
        let reference = map.resolve("action-a").unwrap();
        assert_eq!(reference.id, ModuleId::from("m1"));
        assert_eq!(reference.name, "action-a");
        assert!(reference.chunks.is_empty());
    }

    #[test]
    fn test_resolves_fallback_worker_in_process() {
        let m = manifest();
        let mut map = ServerModuleMap::new(&m, "/z", Runtime::Node);
        let reference = map.resolve("action-a").unwrap();
        // first declared worker wins as fallback
        assert_eq!(reference.id, ModuleId::from("m1"));
    }

    #[test]
    fn test_forward_externally_refuses_local_resolution() {
        let m = manifest();
        let mut map = ServerModuleMap::new(&m, "/z", Runtime::Node)
            .with_policy(ForwardingPolicy::ForwardExternally);
        let err = map.resolve("action-a").unwrap_err();
        assert_eq!(
            err,
            ResolveError::ForwardRequired {
                action_id: "action-a".to_string(),
                target_page: "/x".to_string(),
            }
        );

        // a locally-owned action still resolves under the strict policy
        let mut local = ServerModuleMap::new(&m, "/x", Runtime::Node)
            .with_policy(ForwardingPolicy::ForwardExternally);
        assert!(local.resolve("action-a").is_ok());
    }

    #[test]
    fn test_unknown_action_is_missing_worker() {
        let m = manifest();
        let mut map = ServerModuleMap::new(&m, "/x", Runtime::Node);
        let err = map.resolve("action-b").unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingWorker {
                action_id: "action-b".to_string(),
                page_name: "/x".to_string(),
            }
        );
    }

    #[test]
    fn test_cache_returns_identical_reference() {
        let m = manifest();
        let mut map = ServerModuleMap::new(&m, "/x", Runtime::Node);
        let first = map.resolve("action-a").unwrap();
        let second = map.resolve("action-a").unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        // a fresh view for a new request does not share the cache
        let mut fresh = ServerModuleMap::new(&m, "/x", Runtime::Node);
        let third = fresh.resolve("action-a").unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
    }
}
