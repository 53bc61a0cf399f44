//! Responsive `srcset` generation
//!
//! Two shapes are produced:
//!
//! - Fluid images (no `w` or `h` parameter) get a width ladder:
//!   `url?w=100 100w,\nurl?w=116 116w,\n...`
//! - Fixed-size images get one entry per device pixel ratio:
//!   `url?dpr=1&q=75 1x,\n...`
//!
//! Every entry is built and signed independently by the [`UrlBuilder`].

use serde::{Deserialize, Serialize};

use crate::builder::UrlBuilder;
use crate::constants::{
    DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, DEFAULT_WIDTH_TOLERANCE, DPR_QUALITIES, DPR_RATIOS,
    MIN_WIDTH_TOLERANCE, SRCSET_SEPARATOR,
};
use crate::encoding::QueryParams;
use crate::error::{Error, Result};

/// Options controlling srcset output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrcsetOptions {
    /// Smallest generated width (default: 100)
    #[serde(default = "default_min_width")]
    pub min_width: u32,

    /// Largest generated width (default: 8192)
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    /// Relative step between neighbouring widths (default: 0.08)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Explicit widths; replaces the generated ladder when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widths: Option<Vec<u32>>,

    /// Lower the quality as the pixel ratio grows (default: true)
    #[serde(default = "default_variable_quality")]
    pub variable_quality: bool,
}

fn default_min_width() -> u32 {
    DEFAULT_MIN_WIDTH
}

fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

fn default_tolerance() -> f64 {
    DEFAULT_WIDTH_TOLERANCE
}

fn default_variable_quality() -> bool {
    true
}

impl Default for SrcsetOptions {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            tolerance: DEFAULT_WIDTH_TOLERANCE,
            widths: None,
            variable_quality: true,
        }
    }
}

impl SrcsetOptions {
    pub fn validate(&self) -> Result<()> {
        if let Some(widths) = &self.widths {
            if widths.is_empty() {
                return Err(Error::InvalidSrcset("widths list is empty".to_string()));
            }
            if widths.contains(&0) {
                return Err(Error::InvalidSrcset("widths must be positive".to_string()));
            }
            return Ok(());
        }
        validate_range(self.min_width, self.max_width, self.tolerance)
    }

    /// Widths used for the fluid form
    pub fn resolve_widths(&self) -> Result<Vec<u32>> {
        self.validate()?;
        match &self.widths {
            Some(widths) => Ok(widths.clone()),
            None => target_widths(self.min_width, self.max_width, self.tolerance),
        }
    }
}

fn validate_range(min_width: u32, max_width: u32, tolerance: f64) -> Result<()> {
    if min_width == 0 {
        return Err(Error::InvalidSrcset("min_width must be positive".to_string()));
    }
    if min_width > max_width {
        return Err(Error::InvalidSrcset(format!(
            "min_width {} is greater than max_width {}",
            min_width, max_width
        )));
    }
    if !tolerance.is_finite() || tolerance < MIN_WIDTH_TOLERANCE {
        return Err(Error::InvalidSrcset(format!(
            "tolerance must be at least {}, got {}",
            MIN_WIDTH_TOLERANCE, tolerance
        )));
    }
    Ok(())
}

/// Generate the width ladder from `min_width` to `max_width`.
///
/// Each step grows by `2 * tolerance` and is rounded to an even width; the
/// ladder always ends at `max_width`.
pub fn target_widths(min_width: u32, max_width: u32, tolerance: f64) -> Result<Vec<u32>> {
    validate_range(min_width, max_width, tolerance)?;

    let step = 1.0 + tolerance * 2.0;
    let max = f64::from(max_width);
    let mut current = f64::from(min_width);
    let mut widths = Vec::new();

    while current < max {
        widths.push(ensure_even(current));
        current *= step;
    }
    widths.push(max_width);
    widths.dedup();

    Ok(widths)
}

fn ensure_even(n: f64) -> u32 {
    2 * (n / 2.0).round() as u32
}

fn is_fixed_size(params: &QueryParams) -> bool {
    params.contains_key("w") || params.contains_key("h")
}

impl UrlBuilder {
    /// Build a `srcset` attribute value for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSrcset`] when the width options are unusable.
    /// Options are not consulted for fixed-size images beyond
    /// `variable_quality`.
    pub fn create_srcset(
        &self,
        path: &str,
        params: &QueryParams,
        options: &SrcsetOptions,
    ) -> Result<String> {
        if is_fixed_size(params) {
            return Ok(self.dpr_srcset(path, params, options.variable_quality));
        }

        let widths = options.resolve_widths()?;
        tracing::debug!(entries = widths.len(), "Building width srcset");

        let entries: Vec<String> = widths
            .iter()
            .map(|width| {
                let mut entry_params = params.clone();
                entry_params.insert("w".to_string(), vec![width.to_string()]);
                format!("{} {}w", self.create_url(path, &entry_params), width)
            })
            .collect();

        Ok(entries.join(SRCSET_SEPARATOR))
    }

    fn dpr_srcset(&self, path: &str, params: &QueryParams, variable_quality: bool) -> String {
        tracing::debug!(
            entries = DPR_RATIOS.len(),
            variable_quality,
            "Building DPR srcset"
        );

        let entries: Vec<String> = DPR_RATIOS
            .iter()
            .zip(DPR_QUALITIES.iter())
            .map(|(ratio, quality)| {
                let mut entry_params = params.clone();
                entry_params.insert("dpr".to_string(), vec![ratio.to_string()]);
                if variable_quality && !entry_params.contains_key("q") {
                    entry_params.insert("q".to_string(), vec![quality.to_string()]);
                }
                format!("{} {}x", self.create_url(path, &entry_params), ratio)
            })
            .collect();

        entries.join(SRCSET_SEPARATOR)
    }
}
