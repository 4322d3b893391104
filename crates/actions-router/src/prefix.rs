//! Segment-aware path prefix checks.

/// Check whether `path` starts with `prefix` as a full path segment.
///
/// Unlike a plain string-prefix test, `"app"` matches `"app"` and `"app/x"`
/// but never `"apple/x"`.
pub fn path_has_prefix(path: &str, prefix: &str) -> bool {
    path == prefix || path.starts_with(prefix) && path[prefix.len()..].starts_with('/')
}

/// Strip a leading segment `prefix` from `path`.
///
/// No-op when the prefix is absent. The stripped result always begins with a
/// slash; stripping the entire path yields `"/"`.
pub fn remove_path_prefix(path: &str, prefix: &str) -> String {
    if !path_has_prefix(path, prefix) {
        return path.to_string();
    }
    let rest = &path[prefix.len()..];
    if rest.is_empty() {
        "/".to_string()
    } else {
        rest.to_string()
    }
}
