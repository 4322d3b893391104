//! App-route canonicalization.

/// Canonicalize a filesystem-style app route into its routable form.
///
/// - route-group segments (`(marketing)`) are dropped
/// - parallel-slot segments (`@modal`) are dropped
/// - a trailing `page` or `route` leaf segment is dropped
/// - empty segments collapse, the result always has a leading slash
///
/// An empty result canonicalizes to `"/"`.
pub fn normalize_app_path(route: &str) -> String {
    let segments: Vec<&str> = route.split('/').collect();
    let last = segments.len() - 1;
    let mut pathname = String::new();

    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        if is_group_segment(segment) || segment.starts_with('@') {
            continue;
        }
        if (*segment == "page" || *segment == "route") && index == last {
            continue;
        }
        pathname.push('/');
        pathname.push_str(segment);
    }

    if pathname.is_empty() {
        pathname.push('/');
    }
    pathname
}

/// Whether a segment is a route group (`(name)`).
pub fn is_group_segment(segment: &str) -> bool {
    segment.starts_with('(') && segment.ends_with(')')
}
