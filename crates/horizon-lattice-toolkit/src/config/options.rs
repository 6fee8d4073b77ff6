//! Base pixel size configuration and option-string parsing.

use std::str::FromStr;

use crate::{Error, Result};

/// Base pixel size used when a conversion call supplies no explicit base.
pub const DEFAULT_BASE_PX: f64 = 16.0;

/// Option key for the base pixel size.
pub const BASE_PX_OPTION: &str = "base-px";

/// Configuration for the toolkit functions.
///
/// # Example
///
/// ```
/// use horizon_lattice_toolkit::prelude::ToolkitConfig;
///
/// let config: ToolkitConfig = "base-px=10".parse().unwrap();
/// assert_eq!(config.base_px(), 10.0);
///
/// assert_eq!(ToolkitConfig::default().base_px(), 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolkitConfig {
    base_px: f64,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            base_px: DEFAULT_BASE_PX,
        }
    }
}

impl ToolkitConfig {
    /// Create a configuration with the given base pixel size.
    pub fn new(base_px: f64) -> Self {
        Self { base_px }
    }

    /// The pixel size that equals one relative unit.
    pub fn base_px(&self) -> f64 {
        self.base_px
    }

    /// Return a copy with a different base pixel size.
    pub fn with_base_px(mut self, base_px: f64) -> Self {
        self.base_px = base_px;
        self
    }

    /// Parse plugin options of the form `base-px=<integer>`.
    ///
    /// Pairs may be separated by whitespace or commas. An empty string yields
    /// the default configuration.
    pub fn from_options(options: &str) -> Result<Self> {
        let mut config = Self::default();

        for pair in options
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
        {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(Error::invalid_option(pair, "expected key=value"));
            };

            match key.trim() {
                BASE_PX_OPTION => {
                    let px: i64 = value.trim().parse().map_err(|_| {
                        Error::invalid_option(pair, "base-px must be an integer")
                    })?;
                    config.base_px = px as f64;
                }
                other => {
                    return Err(Error::invalid_option(other, "unrecognized option"));
                }
            }
        }

        tracing::debug!(base_px = config.base_px, "parsed toolkit options");
        Ok(config)
    }
}

impl FromStr for ToolkitConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_options(s)
    }
}
