//! Statistical randomness tests.
//!
//! Both tests take a plain slice of samples, so they work on values from any
//! generator, not only [`SineRand`](crate::SineRand).

pub mod chi_squared;
pub mod critical;
pub mod runs;

use crate::error::{Result, SineRandError};

/// Rejects empty input and input containing NaN or infinities.
pub(crate) fn validate_sample(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(SineRandError::EmptySample);
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(SineRandError::NonFiniteSample);
    }
    Ok(())
}

/// Median of a non-empty sample; mean of the two middle values for even
/// lengths.
pub(crate) fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
