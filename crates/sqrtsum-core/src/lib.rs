#![deny(missing_docs)]
#![doc = "Deterministic sum of square roots over `1..=n` in IEEE-754 double precision."]

pub mod errors;
/// Summation options and YAML loading.
pub mod params;
pub mod report;
/// Canonical JSON and YAML helpers.
#[path = "serde.rs"]
pub mod serde_io;
/// The summation itself and its formatting.
pub mod sum;

pub use errors::{ErrorInfo, SqrtSumError};
pub use params::{SumOpts, DEFAULT_N, DEFAULT_PRECISION, MAX_PRECISION};
pub use report::{SchemaVersion, SumReport};
pub use serde_io::{from_json_slice, to_canonical_json_bytes, to_canonical_json_string};
pub use sum::{
    format_fixed, partial_sums, sum_of_square_roots, sum_of_square_roots_checked, NegativePolicy,
    PartialSums,
};
