// Constants module - centralized default values
//
// Defaults shared by the URL builder, srcset generation and configuration.

// =============================================================================
// URL builder defaults
// =============================================================================

/// Query parameter identifying the client library to the CDN
pub const LIBRARY_PARAM_KEY: &str = "ixlib";

/// Value sent with `LIBRARY_PARAM_KEY`
pub const LIBRARY_PARAM_VALUE: &str = concat!("rust-", env!("CARGO_PKG_VERSION"));

/// Query parameter carrying the signature token
pub const SIGNATURE_PARAM_KEY: &str = "s";

/// URLs use https unless configured otherwise
pub const DEFAULT_USE_HTTPS: bool = true;

/// The library parameter is sent unless configured otherwise
pub const DEFAULT_INCLUDE_LIBRARY_PARAM: bool = true;

// =============================================================================
// Srcset defaults
// =============================================================================

/// Smallest width in a generated width ladder
pub const DEFAULT_MIN_WIDTH: u32 = 100;

/// Largest width in a generated width ladder
pub const DEFAULT_MAX_WIDTH: u32 = 8192;

/// Allowed relative size difference between neighbouring widths
pub const DEFAULT_WIDTH_TOLERANCE: f64 = 0.08;

/// Smallest tolerance accepted; anything lower explodes the ladder size
pub const MIN_WIDTH_TOLERANCE: f64 = 0.01;

/// Device pixel ratios emitted for fixed-size images
pub const DPR_RATIOS: [u32; 5] = [1, 2, 3, 4, 5];

/// Quality used for each entry of `DPR_RATIOS` when variable quality is on
pub const DPR_QUALITIES: [u32; 5] = [75, 50, 35, 23, 20];

/// Separator between srcset entries
pub const SRCSET_SEPARATOR: &str = ",\n";

// =============================================================================
// Logging defaults
// =============================================================================

/// Filter directive used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
