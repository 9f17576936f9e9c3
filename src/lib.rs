//! SineRand: an experimental sine-based PRNG and two randomness tests.
//!
//! The generator samples `sin(seed / x)` at tiny, evenly spaced `x`, where
//! `sin(1/x)` oscillates wildly, and serves the results from a fixed table.
//! The Wald–Wolfowitz runs test and a ten-bin chi-squared test then judge how
//! random the output looks, next to a standard PRNG.
//!
//! No cryptographic property is claimed.
//!
//! # Architecture
//!
//! ```text
//! index_to_x   (index -> tiny positive x)
//!     ↓
//! sine_value   (sin(seed / x), negatives shifted by +1)
//!     ↓ 100,000 values precomputed
//! SineRand     (bounded table + cursor: draw / draw_int)
//!     ↓ samples
//! runs_test / chi_squared_test  (scalar statistics)
//! ```
//!
//! # Examples
//!
//! Draw values and test them:
//!
//! ```
//! use sinerand::{chi_squared_test, runs_test, SineRand};
//!
//! let mut rng = SineRand::with_capacity(1_700_000_000.5, 2_000).unwrap();
//! let samples: Vec<f64> = (0..2_000).map(|_| rng.draw().unwrap()).collect();
//!
//! let z = runs_test(&samples).unwrap();
//! let chi = chi_squared_test(&samples).unwrap();
//! assert!(z >= 0.0 && chi >= 0.0);
//! ```
//!
//! The table is finite:
//!
//! ```
//! use sinerand::{SineRand, SineRandError};
//!
//! let mut rng = SineRand::with_capacity(1.0, 1).unwrap();
//! rng.draw().unwrap();
//! assert_eq!(rng.draw(), Err(SineRandError::Exhausted { capacity: 1 }));
//! ```

#![deny(clippy::all)]

pub mod compare;
pub mod error;
pub mod random;
pub mod stats;

pub use compare::{compare, CompareConfig, ComparisonReport};
pub use error::{Result, SineRandError};
pub use random::sine::{index_to_x, sine_value};
pub use random::sine_rand::{SineRand, ZeroSeedPolicy};
pub use random::source::{collect_samples, StdSource, UnitSource};
pub use stats::chi_squared::{chi_squared_test, Histogram};
pub use stats::runs::{runs_test, runs_test_with, RunBoundary};
