//! URL matching and query-string helpers.

/// Whether an existing `<script>` source counts as `requested`.
///
/// A script matches when its resolved `src` equals the requested location or
/// contains it, so relative and protocol-less requests match the absolute
/// URL the browser reports.
pub fn src_matches(existing: &str, requested: &str) -> bool {
    existing == requested || existing.contains(requested)
}

/// Append `key=value` to the query string of `url`, before any fragment.
pub fn append_query_param(url: &str, key: &str, value: &str) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    let mut out = format!("{}{}{}={}", base, separator, key, value);
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
