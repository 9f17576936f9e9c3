//! Side-by-side randomness report for SineRand and a reference PRNG.
//!
//! Draws the same number of values from a [`SineRand`] and from
//! `rand::rngs::StdRng`, runs both statistical tests on each sample, and
//! judges them against critical values at a chosen significance level.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::random::sine_rand::{SineRand, DEFAULT_CAPACITY, DEFAULT_SEED};
use crate::random::source::{collect_samples, StdSource, UnitSource};
use crate::stats::chi_squared::{Histogram, CHI_SQUARED_BINS, CHI_SQUARED_DF};
use crate::stats::critical::{
    chi_squared_critical, chi_squared_p_value, runs_p_value, z_critical,
};
use crate::stats::runs::{runs_summary, RunBoundary, RunsSummary};

/// Parameters of a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareConfig {
    /// Seed of the SineRand generator.
    pub seed: f64,
    /// Seed of the reference `StdRng`.
    pub reference_seed: u64,
    /// Values drawn from each generator.
    pub samples: usize,
    /// Significance level of both tests.
    pub alpha: f64,
    /// Run counting rule for the runs test.
    pub boundary: RunBoundary,
    /// Number of `draw_int(int_min, int_max)` values to include.
    pub int_draws: usize,
    /// Lower bound of the integer draws.
    pub int_min: i64,
    /// Upper bound of the integer draws.
    pub int_max: i64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            seed: DEFAULT_SEED,
            reference_seed: 0,
            samples: DEFAULT_CAPACITY,
            alpha: 0.05,
            boundary: RunBoundary::Linear,
            int_draws: 10,
            int_min: 0,
            int_max: 10,
        }
    }
}

/// Test results for one generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorReport {
    /// Display name of the generator.
    pub name: String,
    /// Runs test quantities.
    pub runs: RunsSummary,
    /// Two-tailed p-value of the runs z-score.
    pub runs_p_value: f64,
    /// `|z|` does not exceed the critical value.
    pub runs_pass: bool,
    /// Ten-bin chi-squared statistic.
    pub chi_squared: f64,
    /// Upper-tail p-value of the chi-squared statistic.
    pub chi_squared_p_value: f64,
    /// Statistic does not exceed the critical value.
    pub chi_squared_pass: bool,
    /// Bin counts behind the chi-squared statistic.
    pub histogram: Vec<u64>,
}

/// Full comparison output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Configuration that produced the report.
    pub config: CompareConfig,
    /// Two-tailed critical `|z|` at `alpha`.
    pub z_critical: f64,
    /// Chi-squared critical value at `alpha`.
    pub chi_squared_critical: f64,
    /// Degrees of freedom of the chi-squared test.
    pub chi_squared_df: usize,
    /// Results for SineRand.
    pub sine: GeneratorReport,
    /// Results for the reference PRNG.
    pub reference: GeneratorReport,
    /// Integer draws from a fresh SineRand with the same seed.
    pub sample_ints: Vec<i64>,
}

impl ComparisonReport {
    /// Both generators pass both tests.
    pub fn all_pass(&self) -> bool {
        [&self.sine, &self.reference]
            .iter()
            .all(|r| r.runs_pass && r.chi_squared_pass)
    }
}

struct Thresholds {
    z: f64,
    chi: f64,
}

/// Runs the comparison described by `config`.
///
/// # Errors
/// - [`SineRandError::InvalidSignificance`](crate::error::SineRandError::InvalidSignificance)
///   for a bad `alpha`.
/// - [`SineRandError::InvalidSeed`](crate::error::SineRandError::InvalidSeed)
///   or [`SineRandError::InvalidCapacity`](crate::error::SineRandError::InvalidCapacity)
///   if the generator cannot be built.
/// - [`SineRandError::InvalidRange`](crate::error::SineRandError::InvalidRange)
///   if `int_max < int_min`.
/// - Any error of the statistical tests on the drawn samples.
pub fn compare(config: &CompareConfig) -> Result<ComparisonReport> {
    let thresholds = Thresholds {
        z: z_critical(config.alpha)?,
        chi: chi_squared_critical(CHI_SQUARED_DF as f64, config.alpha)?,
    };

    let mut sine = SineRand::with_capacity(config.seed, config.samples)?;
    let sine = evaluate("sine", &mut sine, config, &thresholds)?;

    let mut reference = StdSource::seeded(config.reference_seed);
    let reference = evaluate("std", &mut reference, config, &thresholds)?;

    let sample_ints = if config.int_draws == 0 {
        Vec::new()
    } else {
        let mut ints = SineRand::with_capacity(config.seed, config.int_draws)?;
        (0..config.int_draws)
            .map(|_| ints.draw_int(config.int_min, config.int_max))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(ComparisonReport {
        config: config.clone(),
        z_critical: thresholds.z,
        chi_squared_critical: thresholds.chi,
        chi_squared_df: CHI_SQUARED_DF,
        sine,
        reference,
        sample_ints,
    })
}

fn evaluate<S: UnitSource + ?Sized>(
    name: &str,
    source: &mut S,
    config: &CompareConfig,
    thresholds: &Thresholds,
) -> Result<GeneratorReport> {
    let samples = collect_samples(source, config.samples)?;

    let runs = runs_summary(&samples, config.boundary)?;
    let runs_p = runs_p_value(runs.z)?;

    let histogram = Histogram::from_samples(&samples, CHI_SQUARED_BINS)?;
    let chi = histogram.chi_squared()?;
    let chi_p = chi_squared_p_value(chi, CHI_SQUARED_DF as f64)?;

    debug!(generator = name, z = runs.z, chi, "generator evaluated");

    Ok(GeneratorReport {
        name: name.to_string(),
        runs_pass: runs.z_abs() <= thresholds.z,
        runs,
        runs_p_value: runs_p,
        chi_squared: chi,
        chi_squared_p_value: chi_p,
        chi_squared_pass: chi <= thresholds.chi,
        histogram: histogram.counts().to_vec(),
    })
}
