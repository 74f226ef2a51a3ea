use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SqrtSumError};
use crate::sum::NegativePolicy;

/// Upper bound used when none is configured.
pub const DEFAULT_N: i64 = 20;
/// Fractional digits printed when none are configured.
pub const DEFAULT_PRECISION: usize = 6;
/// Largest precision that still carries information for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Options controlling a summation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SumOpts {
    /// Inclusive upper bound of the summation.
    pub n: i64,
    /// Number of digits after the decimal point in the printed result.
    pub precision: usize,
    /// Treatment of a negative upper bound.
    pub negative: NegativePolicy,
}

impl Default for SumOpts {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            precision: DEFAULT_PRECISION,
            negative: NegativePolicy::Empty,
        }
    }
}

impl SumOpts {
    /// Returns a sanitised copy with the precision clamped to [`MAX_PRECISION`].
    pub fn sanitised(&self) -> Self {
        Self {
            n: self.n,
            precision: self.precision.min(MAX_PRECISION),
            negative: self.negative,
        }
    }

    /// Parses options from a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(data: &str) -> Result<Self, SqrtSumError> {
        // An empty document is a valid "all defaults" config.
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(data).map_err(|err| {
            SqrtSumError::Config(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_hint("expected keys: n, precision, negative (empty | reject)"),
            )
        })
    }

    /// Reads and parses a YAML options file.
    pub fn from_yaml_path(path: &Path) -> Result<Self, SqrtSumError> {
        let data = fs::read_to_string(path).map_err(|err| {
            SqrtSumError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&data).map_err(|err| match err {
            SqrtSumError::Config(info) => {
                SqrtSumError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }
}
