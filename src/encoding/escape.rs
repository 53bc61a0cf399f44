//! Percent-escaping primitives
//!
//! Two conventions are pinned here and every fix-up elsewhere in the
//! encoding module is written against them:
//!
//! - Path segments keep ASCII alphanumerics and `-_.~$&+:=@` as-is and
//!   escape everything else. Space becomes `%20`, `/` becomes `%2F`.
//! - Query components keep only ASCII alphanumerics and `-_.~`. Space
//!   becomes `+` and a literal `+` becomes `%2B`.
//!
//! All escapes use uppercase hex digits.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped inside a single path segment.
///
/// The sub-delimiters `$&+:=@` are legal in a segment and left alone;
/// `/`, `;`, `,` and `?` are escaped so a segment never splits.
const PATH_SEGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Escape a single path segment.
///
/// `+` and `:` pass through unchanged; callers that need them escaped
/// rewrite them afterwards.
pub fn escape_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_SET).to_string()
}

/// Escape a query key or value.
///
/// A space is rendered as `+`, so a literal `+` in the input always comes
/// out as `%2B` and the two never collide.
pub fn escape_query_component(value: &str) -> String {
    let encoded = urlencoding::encode(value);
    if encoded.contains("%20") {
        encoded.replace("%20", "+")
    } else {
        encoded.into_owned()
    }
}
