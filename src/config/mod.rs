// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::builder::{validate_domain, UrlBuilder};
use crate::constants::{DEFAULT_INCLUDE_LIBRARY_PARAM, DEFAULT_USE_HTTPS};
use crate::error::{Error, Result};
use crate::srcset::SrcsetOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CDN hostname, without scheme or path
    pub domain: String,

    /// Signing secret; usually supplied as `${VAR}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Emit https URLs (default: true)
    #[serde(default = "default_use_https")]
    pub use_https: bool,

    /// Append the library identification parameter (default: true)
    #[serde(default = "default_include_library_param")]
    pub include_library_param: bool,

    #[serde(default)]
    pub srcset: SrcsetOptions,
}

fn default_use_https() -> bool {
    DEFAULT_USE_HTTPS
}

fn default_include_library_param() -> bool {
    DEFAULT_INCLUDE_LIBRARY_PARAM
}

impl Config {
    /// Parse YAML after replacing `${VAR_NAME}` with environment values.
    ///
    /// Every referenced variable must be set; an unset one is an error
    /// rather than an empty substitution.
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self> {
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| Error::Config(e.to_string()))?;

        // Resolve every referenced variable first so a missing one is
        // reported before any substitution happens
        let mut vars = HashMap::new();
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            if vars.contains_key(var_name) {
                continue;
            }
            let value = std::env::var(var_name).map_err(|_| {
                Error::Config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
            vars.insert(var_name.to_string(), value);
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            vars.get(&caps[1]).cloned().unwrap_or_default()
        });

        let config: Config = serde_yaml::from_str(&substituted)?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        validate_domain(&self.domain)?;
        self.srcset.validate()?;
        Ok(())
    }

    /// Validate and turn the configuration into a ready builder.
    pub fn into_builder(self) -> Result<UrlBuilder> {
        self.validate()?;

        tracing::info!(
            domain = %self.domain,
            use_https = self.use_https,
            include_library_param = self.include_library_param,
            signed = self.token.as_deref().is_some_and(|t| !t.is_empty()),
            "Configuration loaded"
        );

        let builder = UrlBuilder::new(self.domain)?
            .with_https(self.use_https)
            .with_library_param(self.include_library_param);

        Ok(match self.token {
            Some(token) => builder.with_token(token),
            None => builder,
        })
    }
}
