//! Resolver error taxonomy.

use thiserror::Error;

/// Errors raised while resolving an action id to a module reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No worker anywhere declares the action on the active runtime.
    ///
    /// A build/deploy inconsistency: the action was referenced from a page
    /// but the manifest has no handler for it. Fatal at this layer, never
    /// retried.
    #[error("no worker for action '{action_id}' on page '{page_name}' in the server actions manifest")]
    MissingWorker { action_id: String, page_name: String },

    /// The handler lives on another worker and the resolver is configured
    /// not to execute it in-process.
    ///
    /// Carries the routable page name of the owning worker so the caller can
    /// redispatch the request against the correct deployable unit.
    #[error("action '{action_id}' must be forwarded to '{target_page}'")]
    ForwardRequired {
        action_id: String,
        target_page: String,
    },
}
