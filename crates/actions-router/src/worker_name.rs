//! Worker page name normalization.
//!
//! The bundler keys action workers by bundle path: the relative path to the
//! page entrypoint, rooted at the `app` segment. The HTTP layer speaks
//! routable page names. These two functions convert between the encodings.

use crate::app_paths::normalize_app_path;
use crate::prefix::{path_has_prefix, remove_path_prefix};

/// The root segment every bundle path is keyed under.
const APP_ROOT: &str = "app";

/// Normalize a page name into its manifest worker key.
///
/// Returns the input unchanged when it is already rooted at the `app`
/// segment; otherwise prepends `app` as a segment. The check is
/// segment-aware, so `"apple/foo"` becomes `"app/apple/foo"`.
pub fn normalize_worker_page_name(page_name: &str) -> String {
    if path_has_prefix(page_name, APP_ROOT) {
        return page_name.to_string();
    }
    if page_name.starts_with('/') {
        format!("{APP_ROOT}{page_name}")
    } else {
        format!("{APP_ROOT}/{page_name}")
    }
}

/// Convert a bundle path back to a routable page name.
///
/// Strips the `app` root segment (no-op if absent) and canonicalizes the
/// remainder as an app route.
pub fn denormalize_worker_page_name(bundle_path: &str) -> String {
    normalize_app_path(&remove_path_prefix(bundle_path, APP_ROOT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_already_rooted() {
        assert_eq!(normalize_worker_page_name("app/foo"), "app/foo");
        assert_eq!(normalize_worker_page_name("app"), "app");
    }

    #[test]
    fn test_normalize_prepends_root() {
        assert_eq!(normalize_worker_page_name("/foo"), "app/foo");
        assert_eq!(normalize_worker_page_name("/foo/bar"), "app/foo/bar");
    }

    #[test]
    fn test_normalize_segment_boundary() {
        // string-prefix match is not enough, "apple" is a different segment
        assert_eq!(normalize_worker_page_name("apple/foo"), "app/apple/foo");
    }

    #[test]
    fn test_denormalize() {
        assert_eq!(denormalize_worker_page_name("app/foo"), "/foo");
        assert_eq!(denormalize_worker_page_name("app/dashboard/page"), "/dashboard");
        assert_eq!(denormalize_worker_page_name("app/(shop)/cart/page"), "/cart");
        assert_eq!(denormalize_worker_page_name("app"), "/");
    }

    #[test]
    fn test_round_trip_idempotent() {
        for page in ["/foo", "/foo/bar", "app/foo", "/"] {
            let normalized = normalize_worker_page_name(page);
            let round_tripped =
                normalize_worker_page_name(&denormalize_worker_page_name(&normalized));
            assert_eq!(round_tripped, normalized, "page {page:?}");
        }
    }
}
