//! Wald–Wolfowitz runs test.
//!
//! Marks every value as above (`>=`) or below (`<`) the sample median and
//! compares the number of runs of equal marks with the number expected from
//! a random ordering. Values within [`TIE_TOLERANCE`] of the median are
//! treated as ties and left out.

use serde::Serialize;
use tracing::debug;

use super::{median, validate_sample};
use crate::error::{Result, SineRandError};

/// Distance from the median under which a value counts as a tie.
pub const TIE_TOLERANCE: f64 = 0.001;

/// How runs are counted at the start of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunBoundary {
    /// Textbook count: ties are dropped, the first remaining value opens the
    /// first run and each change of mark opens another.
    #[default]
    Linear,
    /// Circular count: each non-tied value is compared with the value right
    /// before it in the raw sequence (ties included), and the first value is
    /// compared with the last. The number of mark changes is the run count.
    Wrapping,
}

/// Intermediate quantities of a runs test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunsSummary {
    /// Observed number of runs.
    pub runs: usize,
    /// Values at or above the median (ties excluded).
    pub n_above: usize,
    /// Values below the median (ties excluded).
    pub n_below: usize,
    /// Expected number of runs for a random ordering.
    pub expected_runs: f64,
    /// Standard deviation of the run count for a random ordering.
    pub std_dev: f64,
    /// Signed z-score: positive means more runs than expected.
    pub z: f64,
}

impl RunsSummary {
    /// Returns `|z|`, the statistic reported by [`runs_test`].
    pub fn z_abs(&self) -> f64 {
        self.z.abs()
    }
}

/// Runs test with the [`RunBoundary::Linear`] count.
///
/// # Returns
/// The absolute z-score of the observed run count.
///
/// # Errors
/// - [`SineRandError::EmptySample`] for an empty slice.
/// - [`SineRandError::NonFiniteSample`] if any value is NaN or infinite.
/// - [`SineRandError::InsufficientVariation`] if the values do not fall on
///   both sides of the median often enough to define a standard deviation.
///
/// # Examples
///
/// ```
/// use sinerand::runs_test;
///
/// let z = runs_test(&[1.0, 10.0, 1.0, 10.0, 1.0, 10.0, 1.0, 10.0]).unwrap();
/// assert!(z > 2.0);
/// ```
pub fn runs_test(values: &[f64]) -> Result<f64> {
    runs_test_with(values, RunBoundary::Linear)
}

/// Runs test with an explicit boundary rule. See [`runs_test`].
pub fn runs_test_with(values: &[f64], boundary: RunBoundary) -> Result<f64> {
    runs_summary(values, boundary).map(|summary| summary.z_abs())
}

/// Computes every intermediate quantity of the runs test.
///
/// # Errors
/// Same as [`runs_test`].
pub fn runs_summary(values: &[f64], boundary: RunBoundary) -> Result<RunsSummary> {
    validate_sample(values)?;
    let median = median(values);

    let (runs, n_above, n_below) = match boundary {
        RunBoundary::Linear => count_linear(values, median),
        RunBoundary::Wrapping => count_wrapping(values, median),
    };

    let n = n_above + n_below;
    if n_above == 0 || n_below == 0 || n <= 1 {
        return Err(SineRandError::InsufficientVariation);
    }

    let n = n as f64;
    let two_ab = 2.0 * n_above as f64 * n_below as f64;
    let expected_runs = two_ab / n + 1.0;
    let variance = (two_ab * (two_ab - n)) / (n * n * (n - 1.0));
    let std_dev = variance.sqrt();
    if std_dev.is_nan() || std_dev <= 0.0 {
        return Err(SineRandError::InsufficientVariation);
    }

    let z = (runs as f64 - expected_runs) / std_dev;
    debug!(?boundary, runs, n_above, n_below, expected_runs, z, "runs test");

    Ok(RunsSummary {
        runs,
        n_above,
        n_below,
        expected_runs,
        std_dev,
        z,
    })
}

fn is_tie(value: f64, median: f64) -> bool {
    (value - median).abs() < TIE_TOLERANCE
}

fn count_linear(values: &[f64], median: f64) -> (usize, usize, usize) {
    let mut runs = 0;
    let mut n_above = 0;
    let mut n_below = 0;
    let mut last: Option<bool> = None;

    for &val in values.iter().filter(|&&v| !is_tie(v, median)) {
        let above = val >= median;
        if last != Some(above) {
            runs += 1;
        }
        last = Some(above);
        if above {
            n_above += 1;
        } else {
            n_below += 1;
        }
    }

    (runs, n_above, n_below)
}

fn count_wrapping(values: &[f64], median: f64) -> (usize, usize, usize) {
    let len = values.len();
    let mut runs = 0;
    let mut n_above = 0;
    let mut n_below = 0;

    for (i, &val) in values.iter().enumerate() {
        if is_tie(val, median) {
            continue;
        }
        let prev = values[(i + len - 1) % len];
        let above = val >= median;
        if above != (prev >= median) {
            runs += 1;
        }
        if above {
            n_above += 1;
        } else {
            n_below += 1;
        }
    }

    (runs, n_above, n_below)
}
