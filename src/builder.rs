//! URL assembly
//!
//! Combines the encoders and the signer into a complete request URL:
//!
//! ```text
//! {scheme}://{domain}{encoded_path}[?{encoded_query}[&s={signature}]]
//! ```
//!
//! When the query is empty and a token is configured, the signature is the
//! only parameter (`?s=...`).

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::{
    DEFAULT_INCLUDE_LIBRARY_PARAM, DEFAULT_USE_HTTPS, LIBRARY_PARAM_KEY, LIBRARY_PARAM_VALUE,
    SIGNATURE_PARAM_KEY,
};
use crate::encoding::{classify_proxy, encode_any_path, encode_query_parameters, QueryParams};
use crate::error::{Error, Result};
use crate::signing::sign_url;

fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?i)(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)*[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?::[0-9]{1,5})?$",
        )
        .expect("domain pattern is a valid regex")
    })
}

/// Check that `domain` is a bare hostname (optionally with a port).
pub fn validate_domain(domain: &str) -> Result<()> {
    if domain.is_empty() || !domain_pattern().is_match(domain) {
        return Err(Error::InvalidDomain(domain.to_string()));
    }
    Ok(())
}

/// Builds encoded, optionally signed URLs for one CDN domain
#[derive(Clone)]
pub struct UrlBuilder {
    domain: String,
    token: Option<String>,
    use_https: bool,
    include_library_param: bool,
}

impl UrlBuilder {
    /// Create a builder for `domain` (e.g. `assets.example.com`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] when the domain is empty or carries
    /// a scheme, path or other characters a hostname cannot contain.
    pub fn new(domain: impl Into<String>) -> Result<Self> {
        let domain = domain.into();
        validate_domain(&domain)?;

        Ok(Self {
            domain,
            token: None,
            use_https: DEFAULT_USE_HTTPS,
            include_library_param: DEFAULT_INCLUDE_LIBRARY_PARAM,
        })
    }

    /// Sign every URL with `token`. An empty token disables signing.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn with_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    pub fn with_library_param(mut self, include: bool) -> Self {
        self.include_library_param = include;
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn scheme(&self) -> &'static str {
        if self.use_https {
            "https"
        } else {
            "http"
        }
    }

    pub fn is_signed(&self) -> bool {
        self.token.is_some()
    }

    pub fn includes_library_param(&self) -> bool {
        self.include_library_param
    }

    /// Build the full URL for `path` with `params`.
    ///
    /// A caller-supplied library parameter takes precedence over the
    /// builder's own value.
    pub fn create_url(&self, path: &str, params: &QueryParams) -> String {
        let mut params = params.clone();
        if self.include_library_param {
            params
                .entry(LIBRARY_PARAM_KEY.to_string())
                .or_insert_with(|| vec![LIBRARY_PARAM_VALUE.to_string()]);
        }

        let encoded_path = encode_any_path(path);

        let parts = encode_query_parameters(&params);
        let mut query = parts.join("&");

        if let Some(token) = &self.token {
            let signature = sign_url(token, &encoded_path, &query);
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(SIGNATURE_PARAM_KEY);
            query.push('=');
            query.push_str(&signature);
        }

        let classification = classify_proxy(path);
        tracing::debug!(
            domain = %self.domain,
            proxy = classification.is_proxy,
            proxy_encoded = classification.is_encoded,
            query_parts = parts.len(),
            signed = self.token.is_some(),
            "Built URL"
        );

        let mut url = format!("{}://{}{}", self.scheme(), self.domain, encoded_path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

impl fmt::Debug for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlBuilder")
            .field("domain", &self.domain)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("use_https", &self.use_https)
            .field("include_library_param", &self.include_library_param)
            .finish()
    }
}
