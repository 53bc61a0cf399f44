//! Path and query encoding
//!
//! Turns a raw resource path and a parameter set into the exact text that
//! is placed in the URL and fed to the signer. Nothing here decodes.

pub mod escape;
pub mod path;
pub mod proxy;
pub mod query;

pub use escape::{escape_path_segment, escape_query_component};
pub use path::encode_path;
pub use proxy::{classify_proxy, encode_proxy_path, ProxyClassification};
pub use query::{
    base64_encode_param, encode_query_parameters, is_base64_key, query_params,
    QueryParams,
};

/// Encode a path with whichever encoder its classification calls for.
pub fn encode_any_path(path: &str) -> String {
    let classification = classify_proxy(path);
    if classification.is_proxy {
        encode_proxy_path(path, classification.is_encoded)
    } else {
        encode_path(path)
    }
}
