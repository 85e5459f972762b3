//! Path helpers used by both the client router and the catalog API.

/// Route pattern of a single catalog page.
pub const CATALOG_ROUTE: &str = "/catalog/:catalogName";

/// Derives the URL segment for a category name.
///
/// Whitespace runs collapse into a single `-` and the result is lower-cased,
/// so `"Web  Development"` becomes `web-development`.
pub fn catalog_slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

pub fn catalog_path(name: &str) -> String {
    format!("/catalog/{}", catalog_slug(name))
}

/// Reports whether `path` matches a route `pattern`.
///
/// Both sides are compared segment by segment and must have the same number
/// of segments. A pattern segment starting with `:` accepts any non-empty
/// segment. Empty segments are ignored, so `/about/` matches `/about`.
pub fn match_route(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = segments(pattern).collect();
    let path_segments: Vec<&str> = segments(path).collect();

    if pattern_segments.len() != path_segments.len() {
        return false;
    }

    pattern_segments
        .iter()
        .zip(path_segments.iter())
        .all(|(expected, actual)| match expected.strip_prefix(':') {
            Some(_) => !actual.is_empty(),
            None => expected == actual,
        })
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
