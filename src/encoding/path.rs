//! Ordinary (non-proxy) path encoding

use super::escape::escape_path_segment;

/// Encode a path segment by segment.
///
/// The path may or may not start with `/`; the output always does. Each
/// `/`-separated segment is escaped on its own and `+` is rewritten to
/// `%2B`, since a bare `+` is read as a space by some origins.
pub fn encode_path(path: &str) -> String {
    let body = path.strip_prefix('/').unwrap_or(path);
    format!("/{}", split_and_escape(body))
}

fn split_and_escape(body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }

    body.split('/')
        .map(|segment| escape_path_segment(segment).replace('+', "%2B"))
        .collect::<Vec<_>>()
        .join("/")
}
