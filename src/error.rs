// Error types module

use thiserror::Error;

/// Library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the fallible outer layers (builder setup, srcset
/// options, configuration). The encoding and signing functions never fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Domain is empty, carries a scheme or path, or is not a hostname
    #[error("invalid domain '{0}': expected a bare hostname such as assets.example.com")]
    InvalidDomain(String),

    /// Srcset width range, tolerance or explicit widths are unusable
    #[error("invalid srcset options: {0}")]
    InvalidSrcset(String),

    /// Configuration is structurally valid YAML but semantically wrong
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Short category name, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidDomain(_) => "invalid_domain",
            Error::InvalidSrcset(_) => "invalid_srcset",
            Error::Config(_) => "config",
            Error::Io(_) => "io",
            Error::Yaml(_) => "yaml",
        }
    }
}
