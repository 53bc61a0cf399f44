//! Request signing
//!
//! The signature token is the lowercase hex MD5 of:
//!
//! ```text
//! {secret}{encoded_path}[?{encoded_query}]
//! ```
//!
//! The `?` is present only when the query is non-empty. Inputs must be the
//! already-encoded path and query exactly as they appear in the URL.

use md5::{Digest, Md5};

/// Compute the signature token for an encoded path and query.
pub fn sign_url(secret: &str, encoded_path: &str, encoded_query: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(signature_base(secret, encoded_path, encoded_query).as_bytes());
    hex::encode(hasher.finalize())
}

/// Build the exact string that is hashed.
pub fn signature_base(secret: &str, encoded_path: &str, encoded_query: &str) -> String {
    let delimiter = if encoded_query.is_empty() { "" } else { "?" };
    format!("{}{}{}{}", secret, encoded_path, delimiter, encoded_query)
}
