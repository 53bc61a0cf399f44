//! Proxy path detection and encoding
//!
//! A proxy path embeds a complete remote URL (`/https://host/img.png`)
//! that the CDN fetches on the caller's behalf. It is escaped as one
//! opaque unit rather than segment by segment.

use super::escape::escape_path_segment;

const ASCII_HTTP: &str = "http://";
const ASCII_HTTPS: &str = "https://";

const ENCODED_HTTP: &str = "http%3A%2F%2F";
const ENCODED_HTTPS: &str = "https%3A%2F%2F";

const ENCODED_HTTP_LOWER: &str = "http%3a%2f%2f";
// Older clients shipped this prefix as "https%3a%ff%2f", which never matches
// an encoded "https://". The corrected form is used here.
const ENCODED_HTTPS_LOWER: &str = "https%3a%2f%2f";

/// Result of inspecting a path for an embedded remote URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProxyClassification {
    /// Path carries an `http`/`https` URL
    pub is_proxy: bool,
    /// The embedded URL is already percent-encoded. Only meaningful when
    /// `is_proxy` is set.
    pub is_encoded: bool,
}

impl ProxyClassification {
    const NOT_PROXY: Self = Self {
        is_proxy: false,
        is_encoded: false,
    };

    const RAW: Self = Self {
        is_proxy: true,
        is_encoded: false,
    };

    const ENCODED: Self = Self {
        is_proxy: true,
        is_encoded: true,
    };
}

fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Classify a path by its scheme prefix.
///
/// One leading `/` is ignored. Raw prefixes are case-sensitive; the
/// percent-encoded prefixes are accepted with either all-uppercase or
/// all-lowercase hex.
pub fn classify_proxy(path: &str) -> ProxyClassification {
    let path = strip_leading_slash(path);

    if path.starts_with(ASCII_HTTP) || path.starts_with(ASCII_HTTPS) {
        return ProxyClassification::RAW;
    }

    if path.starts_with(ENCODED_HTTP) || path.starts_with(ENCODED_HTTPS) {
        return ProxyClassification::ENCODED;
    }

    if path.starts_with(ENCODED_HTTP_LOWER) || path.starts_with(ENCODED_HTTPS_LOWER) {
        return ProxyClassification::ENCODED;
    }

    ProxyClassification::NOT_PROXY
}

/// Encode a proxy path.
///
/// Already-encoded input is returned untouched. Otherwise the body after
/// one optional leading `/` is escaped whole, re-prefixed with `/`, and
/// every `:` is rewritten to `%3A` so the embedded scheme separator cannot
/// be read as part of the outer URL.
pub fn encode_proxy_path(path: &str, is_encoded: bool) -> String {
    if is_encoded {
        return path.to_string();
    }

    let nearly_escaped = format!("/{}", escape_path_segment(strip_leading_slash(path)));
    nearly_escaped.replace(':', "%3A")
}
