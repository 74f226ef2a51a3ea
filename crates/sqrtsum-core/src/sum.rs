use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ErrorInfo, SqrtSumError};

/// Treatment of a negative upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NegativePolicy {
    /// `1..=n` is empty for `n < 0`, so the sum is `0.0`.
    #[default]
    Empty,
    /// `n < 0` is rejected with an input error.
    Reject,
}

/// Returns `sqrt(1) + sqrt(2) + ... + sqrt(n)` accumulated in ascending order.
///
/// The terms are added one at a time into a single `f64` accumulator starting
/// from `0.0`, so the result matches any other IEEE-754 double implementation
/// of the same naive loop bit for bit. A negative `n` yields an empty range and
/// therefore `0.0`.
pub fn sum_of_square_roots(n: i64) -> f64 {
    let mut value = 0.0_f64;
    for i in 1..=n {
        value += (i as f64).sqrt();
    }
    value
}

/// Variant of [`sum_of_square_roots`] that applies an explicit
/// [`NegativePolicy`] to the upper bound.
pub fn sum_of_square_roots_checked(n: i64, policy: NegativePolicy) -> Result<f64, SqrtSumError> {
    if n < 0 && policy == NegativePolicy::Reject {
        return Err(SqrtSumError::Input(
            ErrorInfo::new("negative-bound", "upper bound must be non-negative")
                .with_context("n", n.to_string())
                .with_hint("pass n >= 0 or use the empty-range policy"),
        ));
    }
    Ok(sum_of_square_roots(n))
}

/// Iterator over the running accumulator after each term of the summation.
///
/// Created by [`partial_sums`].
#[derive(Debug, Clone)]
pub struct PartialSums {
    next: i64,
    end: i64,
    value: f64,
}

/// Yields the accumulator after adding `sqrt(i)` for each `i` in `1..=n`.
///
/// The final item equals [`sum_of_square_roots`]`(n)` exactly since both walk
/// the same ascending sequence of additions.
pub fn partial_sums(n: i64) -> PartialSums {
    PartialSums {
        next: 1,
        end: n,
        value: 0.0,
    }
}

impl Iterator for PartialSums {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > self.end {
            return None;
        }
        let term = (self.next as f64).sqrt();
        self.value += term;
        debug!(i = self.next, term, partial = self.value, "accumulated term");
        // `end` may be i64::MAX; stop without overflowing the cursor.
        match self.next.checked_add(1) {
            Some(next) => self.next = next,
            None => self.end = self.next - 1,
        }
        Some(self.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next > self.end {
            return (0, Some(0));
        }
        let remaining = (self.end - self.next).checked_add(1).map(|n| n as u64);
        match remaining.and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Formats `value` as a fixed-point decimal with `precision` fractional digits.
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}
