//! Error types for the SineRand library.

use std::fmt;

/// Errors produced by the SineRand library.
#[derive(Debug, Clone, PartialEq)]
pub enum SineRandError {
    /// Every precomputed value of the generator has been drawn.
    Exhausted {
        /// Number of values the generator was built with.
        capacity: usize,
    },
    /// `draw_int` was called with `max < min`.
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
    /// The runs test has no variation above and below the median.
    InsufficientVariation,
    /// Seed is zero (under [`ZeroSeedPolicy::Reject`]) or not finite.
    ///
    /// [`ZeroSeedPolicy::Reject`]: crate::random::sine_rand::ZeroSeedPolicy::Reject
    InvalidSeed(f64),
    /// A generator was requested with room for zero values.
    InvalidCapacity,
    /// A statistical test received an empty sample.
    EmptySample,
    /// A statistical test received NaN or an infinite value.
    NonFiniteSample,
    /// Significance level is outside the open interval (0, 1).
    InvalidSignificance(f64),
    /// A histogram was requested with zero bins.
    InvalidBinCount,
    /// A reference distribution rejected its parameters.
    Distribution(String),
}

impl fmt::Display for SineRandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SineRandError::Exhausted { capacity } => {
                write!(f, "No more numbers available: all {} values drawn", capacity)
            }
            SineRandError::InvalidRange { min, max } => {
                write!(f, "Invalid range: max ({}) is less than min ({})", max, min)
            }
            SineRandError::InsufficientVariation => {
                write!(
                    f,
                    "Insufficient variation above and below the median for a runs test"
                )
            }
            SineRandError::InvalidSeed(seed) => {
                write!(f, "Seed must be a finite, non-zero number, got {}", seed)
            }
            SineRandError::InvalidCapacity => {
                write!(f, "Generator capacity must be at least 1")
            }
            SineRandError::EmptySample => write!(f, "Sample is empty"),
            SineRandError::NonFiniteSample => {
                write!(f, "Sample contains NaN or infinite values")
            }
            SineRandError::InvalidSignificance(alpha) => {
                write!(f, "Significance level must be in (0, 1), got {}", alpha)
            }
            SineRandError::InvalidBinCount => write!(f, "Histogram needs at least 1 bin"),
            SineRandError::Distribution(msg) => {
                write!(f, "Invalid distribution parameters: {}", msg)
            }
        }
    }
}

impl std::error::Error for SineRandError {}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SineRandError>;
