//! Serializable record of a single summation run.

use serde::{Deserialize, Serialize};

use crate::errors::SqrtSumError;
use crate::params::SumOpts;
use crate::sum::{format_fixed, sum_of_square_roots_checked};

/// Semantic version describing the schema of serialized reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Result of a summation together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumReport {
    /// Schema version of this payload.
    pub schema_version: SchemaVersion,
    /// Inclusive upper bound that was summed.
    pub n: i64,
    /// Computed sum.
    pub value: f64,
    /// IEEE-754 bit pattern of `value` as 16 lowercase hex digits.
    pub value_bits: String,
    /// Fractional digits used for `formatted`.
    pub precision: usize,
    /// `value` rendered as a fixed-point decimal.
    pub formatted: String,
}

impl SumReport {
    /// Runs the summation described by `opts` and records the outcome.
    pub fn compute(opts: &SumOpts) -> Result<Self, SqrtSumError> {
        let opts = opts.sanitised();
        let value = sum_of_square_roots_checked(opts.n, opts.negative)?;
        Ok(Self {
            schema_version: SchemaVersion::default(),
            n: opts.n,
            value,
            value_bits: format!("{:016x}", value.to_bits()),
            precision: opts.precision,
            formatted: format_fixed(value, opts.precision),
        })
    }
}
