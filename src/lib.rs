// Urlsmith: URL encoding and signing for image-transformation CDNs
//
// The encoding and signing modules are pure and never fail; builder,
// srcset and config wrap them for callers that want complete URLs.

pub mod builder;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod signing;
pub mod srcset;

pub use builder::UrlBuilder;
pub use encoding::{
    base64_encode_param, classify_proxy, encode_path, encode_proxy_path,
    encode_query_parameters, query_params, ProxyClassification, QueryParams,
};
pub use error::{Error, Result};
pub use signing::sign_url;
pub use srcset::SrcsetOptions;
