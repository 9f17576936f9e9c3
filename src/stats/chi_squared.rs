//! Chi-squared goodness-of-fit test against a uniform distribution.
//!
//! Values are binned into equal-width intervals over their observed range
//! and the bin counts are compared with a flat expectation.
//!
//! # Bin edges
//!
//! Edges are `min + k * (max - min) / bins` for `k = 0..bins`, with the last
//! edge pinned to `max`. Intervals are closed on the right, `(e_k, e_k+1]`,
//! and the first bin is also closed on the left so that `min` lands in bin 0.
//! When every value is equal, all of them go to bin 0. If `max - min`
//! overflows, edges are interpolated as `min * (1 - t) + max * t`.

use serde::Serialize;
use tracing::debug;

use super::validate_sample;
use crate::error::{Result, SineRandError};

/// Number of bins used by [`chi_squared_test`].
pub const CHI_SQUARED_BINS: usize = 10;

/// Degrees of freedom of the statistic returned by [`chi_squared_test`].
pub const CHI_SQUARED_DF: usize = CHI_SQUARED_BINS - 1;

/// Equal-width histogram over the observed range of a sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl Histogram {
    /// Bins `values` into `bins` equal-width intervals.
    ///
    /// # Errors
    /// - [`SineRandError::InvalidBinCount`] if `bins` is zero.
    /// - [`SineRandError::EmptySample`] / [`SineRandError::NonFiniteSample`]
    ///   for unusable input.
    pub fn from_samples(values: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(SineRandError::InvalidBinCount);
        }
        validate_sample(values)?;

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let span = max - min;
        let mut edges: Vec<f64> = if span.is_finite() {
            let width = span / bins as f64;
            (0..bins).map(|k| min + k as f64 * width).collect()
        } else {
            // Range wider than f64::MAX: interpolate without forming the span
            (0..bins)
                .map(|k| {
                    let t = k as f64 / bins as f64;
                    min - min * t + max * t
                })
                .collect()
        };
        edges.push(max);

        let mut counts = vec![0u64; bins];
        for &val in values {
            // Number of upper edges strictly below `val`
            let idx = edges[1..].partition_point(|&edge| edge < val);
            counts[idx.min(bins - 1)] += 1;
        }

        Ok(Histogram { edges, counts })
    }

    /// Returns the `bins + 1` bin edges, ascending.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Returns the number of values in each bin.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Returns the number of binned values.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Chi-squared statistic of the counts against a flat expectation.
    pub fn chi_squared(&self) -> Result<f64> {
        chi_squared_statistic(&self.counts)
    }
}

/// Computes `sum((observed - expected)^2 / expected)` with
/// `expected = total / counts.len()`.
///
/// # Errors
/// Returns [`SineRandError::EmptySample`] if there are no bins or every bin
/// is empty.
pub fn chi_squared_statistic(counts: &[u64]) -> Result<f64> {
    let total: u64 = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return Err(SineRandError::EmptySample);
    }
    let expected = total as f64 / counts.len() as f64;
    Ok(counts
        .iter()
        .map(|&obs| {
            let diff = obs as f64 - expected;
            diff * diff / expected
        })
        .sum())
}

/// Ten-bin chi-squared goodness-of-fit statistic.
///
/// Compare the result with a [`CHI_SQUARED_DF`]-degree critical value, e.g.
/// from [`chi_squared_critical`](super::critical::chi_squared_critical).
///
/// # Errors
/// [`SineRandError::EmptySample`] or [`SineRandError::NonFiniteSample`] for
/// unusable input.
///
/// # Examples
///
/// ```
/// use sinerand::chi_squared_test;
///
/// let flat: Vec<f64> = (0..1_000).map(|i| (i as f64 + 0.5) / 1_000.0).collect();
/// assert!(chi_squared_test(&flat).unwrap() < 1e-6);
/// ```
pub fn chi_squared_test(values: &[f64]) -> Result<f64> {
    let histogram = Histogram::from_samples(values, CHI_SQUARED_BINS)?;
    let stat = histogram.chi_squared()?;
    debug!(n = values.len(), counts = ?histogram.counts(), stat, "chi-squared test");
    Ok(stat)
}
