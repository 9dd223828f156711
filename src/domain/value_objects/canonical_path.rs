//! Canonical Path Value Object
//!
//! Route paths arrive from the host router with a locale prefix and an
//! optional `/index` marker. Comparison happens on the canonical form:
//! - `?query` and `#fragment` suffixes are dropped
//! - any segment equal to `index` that follows a `/` is removed
//! - on rooted paths, leading segments equal to the locale are removed
//!   (literal comparison, repeated while the first segment still matches)
//!
//! A segment equal to the locale further down the path is content, not a
//! prefix, and is kept: `/fr/docs/fr` with locale `fr` becomes `/docs/fr`.
//!
//! Everything is string based; no filesystem access.

const INDEX_SEGMENT: &str = "index";

/// Canonicalise a route path for equality comparisons.
///
/// Never fails: input with nothing to strip comes back unchanged.
/// `normalize(&normalize(p, l), l) == normalize(p, l)` for every input.
pub fn normalize(raw_path: &str, locale: Option<&str>) -> String {
    let path = strip_query_and_fragment(raw_path);
    let locale = locale.filter(|l| !l.is_empty());

    let mut segments = path.split('/');
    let first = segments.next().unwrap_or_default();
    let mut rest: Vec<&str> = segments.filter(|s| *s != INDEX_SEGMENT).collect();

    if first.is_empty() {
        if let Some(locale) = locale {
            let prefix = rest.iter().take_while(|s| **s == locale).count();
            rest.drain(..prefix);
        }
    }

    let mut out = String::with_capacity(path.len());
    out.push_str(first);
    for segment in &rest {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() && path.starts_with('/') {
        out.push('/');
    }
    out
}

/// Trailing-slash-insensitive equality of two canonical paths.
pub fn routes_match(a: &str, b: &str) -> bool {
    a.trim_end_matches('/') == b.trim_end_matches('/')
}

fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}
