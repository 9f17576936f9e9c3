//! SineRand: bounded PRNG over a precomputed table of sine samples.
//!
//! The whole sequence is computed once, at construction, from
//! [`sine_value`](super::sine::sine_value). Draws walk a cursor through the
//! table; once the cursor reaches the end the generator is exhausted for
//! good.

use std::fmt;

use tracing::{debug, warn};

use super::sine::sine_value;
use super::source::UnitSource;
use crate::error::{Result, SineRandError};

/// Number of values precomputed by [`SineRand::new`].
pub const DEFAULT_CAPACITY: usize = 100_000;

/// Seed used by [`ZeroSeedPolicy::Substitute`].
pub const DEFAULT_SEED: f64 = 1.0;

/// What to do with a seed of exactly zero.
///
/// A zero seed makes every sample `sin(0) = 0`, so it is never a useful
/// generator. The policy only decides how loudly that is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroSeedPolicy {
    /// Fail with [`SineRandError::InvalidSeed`].
    #[default]
    Reject,
    /// Replace the zero seed with [`DEFAULT_SEED`].
    Substitute,
    /// Keep the zero seed; the table is all zeros.
    Accept,
}

/// Bounded sine-based PRNG.
///
/// Owns an immutable table of `capacity` values in `[0, 1)` and a cursor
/// into it. Each [`draw`](Self::draw) returns the value under the cursor and
/// advances it by one; the cursor never moves backwards and never passes the
/// end of the table.
///
/// Draws take `&mut self`, so sharing one generator between threads needs
/// external locking. Independent consumers should each build their own.
///
/// # Examples
///
/// ```
/// use sinerand::SineRand;
///
/// let mut rng = SineRand::new(1.0).unwrap();
/// let x = rng.draw().unwrap();
/// assert!((0.0..1.0).contains(&x));
///
/// let die = rng.draw_int(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// ```
#[derive(Clone)]
pub struct SineRand {
    seed: f64,
    values: Box<[f64]>,
    cursor: usize,
}

impl SineRand {
    /// Creates a generator with [`DEFAULT_CAPACITY`] values.
    ///
    /// # Errors
    /// Returns [`SineRandError::InvalidSeed`] if `seed` is zero or not finite.
    pub fn new(seed: f64) -> Result<Self> {
        Self::with_policy(seed, DEFAULT_CAPACITY, ZeroSeedPolicy::Reject)
    }

    /// Creates a generator with a custom table size.
    ///
    /// # Errors
    /// Returns [`SineRandError::InvalidSeed`] if `seed` is zero or not finite,
    /// and [`SineRandError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(seed: f64, capacity: usize) -> Result<Self> {
        Self::with_policy(seed, capacity, ZeroSeedPolicy::Reject)
    }

    /// Creates a generator with an explicit zero-seed policy.
    ///
    /// # Parameters
    /// - `seed`: Any finite number; zero is handled according to `policy`.
    /// - `capacity`: Number of values to precompute (at least 1).
    /// - `policy`: Handling of a zero seed.
    ///
    /// # Errors
    /// Returns [`SineRandError::InvalidSeed`] for non-finite seeds, or for a
    /// zero seed under [`ZeroSeedPolicy::Reject`].
    pub fn with_policy(seed: f64, capacity: usize, policy: ZeroSeedPolicy) -> Result<Self> {
        if !seed.is_finite() {
            return Err(SineRandError::InvalidSeed(seed));
        }
        if capacity == 0 {
            return Err(SineRandError::InvalidCapacity);
        }

        let seed = if seed == 0.0 {
            match policy {
                ZeroSeedPolicy::Reject => return Err(SineRandError::InvalidSeed(seed)),
                ZeroSeedPolicy::Substitute => {
                    warn!(substitute = DEFAULT_SEED, "zero seed replaced");
                    DEFAULT_SEED
                }
                ZeroSeedPolicy::Accept => {
                    warn!("zero seed accepted, every value will be 0");
                    seed
                }
            }
        } else {
            seed
        };

        let values: Box<[f64]> = (0..capacity)
            .map(|idx| sine_value(seed, idx as i64))
            .collect();
        debug!(seed, capacity, "sine table precomputed");

        Ok(SineRand {
            seed,
            values,
            cursor: 0,
        })
    }

    /// Returns the next value in `[0, 1)` and advances the cursor.
    ///
    /// # Errors
    /// Returns [`SineRandError::Exhausted`] once all values have been drawn.
    /// The generator stays exhausted; every later call fails the same way.
    pub fn draw(&mut self) -> Result<f64> {
        let val = *self
            .values
            .get(self.cursor)
            .ok_or(SineRandError::Exhausted {
                capacity: self.values.len(),
            })?;
        self.cursor += 1;
        Ok(val)
    }

    /// Returns an integer in `[min, max]`, consuming one table value.
    ///
    /// The drawn value `v` is stretched from `[0, 1)` onto `[min, max + 1)`
    /// and floored.
    ///
    /// # Errors
    /// - [`SineRandError::InvalidRange`] if `max < min`; no value is consumed.
    /// - [`SineRandError::Exhausted`] if the table is used up.
    pub fn draw_int(&mut self, min: i64, max: i64) -> Result<i64> {
        if max < min {
            return Err(SineRandError::InvalidRange { min, max });
        }
        let val = self.draw()?;
        let span = (max as f64) - (min as f64) + 1.0;
        let scaled = (val * span + min as f64).floor();
        // f64 rounding on very wide ranges can land one past max
        Ok((scaled as i64).clamp(min, max))
    }

    /// Returns the seed the table was built from.
    ///
    /// Under [`ZeroSeedPolicy::Substitute`] this is the substituted seed.
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Returns the total number of precomputed values.
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Returns how many values have been drawn so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns how many values are left.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }
}

impl fmt::Debug for SineRand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SineRand")
            .field("seed", &self.seed)
            .field("capacity", &self.values.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl UnitSource for SineRand {
    fn next_unit(&mut self) -> Result<f64> {
        self.draw()
    }
}
