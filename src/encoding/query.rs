//! Canonical query serialization
//!
//! Keys are emitted in ascending byte order so that two parameter sets
//! with the same content always produce the same query, and therefore the
//! same signature.

use std::collections::HashMap;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use super::escape::escape_query_component;

/// Multi-valued query parameters, keyed by parameter name
pub type QueryParams = HashMap<String, Vec<String>>;

/// Keys carrying this suffix have their value base64url-encoded
const BASE64_SUFFIX: &str = "64";

/// Separator used when a key carries several values
const VALUE_SEPARATOR: &str = ",";

/// Canonicalize a parameter set into ordered `key=value` parts.
///
/// Joining the parts (normally with `&`) is left to the caller.
pub fn encode_query_parameters(params: &QueryParams) -> Vec<String> {
    let mut keys: Vec<&String> = params.keys().collect();
    keys.sort_unstable();

    keys.into_iter()
        .map(|key| {
            let (encoded_key, encoded_value) = encode_query_param(key, &params[key]);
            format!("{}={}", encoded_key, encoded_value)
        })
        .collect()
}

/// Encode one key and its values.
///
/// Values are joined with `,` first; the base64 switch applies to the
/// joined value as a whole.
fn encode_query_param(key: &str, values: &[String]) -> (String, String) {
    let encoded_key = escape_query_component(key);
    let value = values.join(VALUE_SEPARATOR);

    let encoded_value = if is_base64_key(key) {
        base64_encode_param(&value)
    } else {
        escape_query_component(&value)
    };

    (encoded_key, encoded_value)
}

/// Collect `(key, value)` pairs into a parameter set.
///
/// Repeated keys accumulate their values in order.
pub fn query_params<I, K, V>(pairs: I) -> QueryParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut params = QueryParams::new();
    for (key, value) in pairs {
        params.entry(key.into()).or_default().push(value.into());
    }
    params
}

/// Whether the key requests base64url encoding of its value
pub fn is_base64_key(key: &str) -> bool {
    key.ends_with(BASE64_SUFFIX)
}

/// Base64url-encode a parameter value without trailing `=` padding.
///
/// Dropping the padding is only safe because each value is consumed as a
/// single `&`-delimited unit and never concatenated with another blob.
pub fn base64_encode_param(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value.as_bytes())
}
