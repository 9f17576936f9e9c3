//! UnitSource trait for anything that yields values in `[0, 1)`.
//!
//! Lets the comparison code treat SineRand and a reference PRNG the same
//! way: draw `n` values, then hand them to the statistical tests.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::Result;

/// Source of uniformly distributed values in `[0, 1)`.
///
/// Bounded sources (such as [`SineRand`](crate::random::sine_rand::SineRand))
/// report exhaustion through the error; unbounded ones never fail.
pub trait UnitSource {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> Result<f64>;
}

/// Adapter exposing any [`rand::RngCore`] as a [`UnitSource`].
#[derive(Debug, Clone)]
pub struct StdSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> StdSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        StdSource { rng }
    }
}

impl StdSource<StdRng> {
    /// Creates a reference source backed by `StdRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        StdSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> UnitSource for StdSource<R> {
    fn next_unit(&mut self) -> Result<f64> {
        Ok(self.rng.gen::<f64>())
    }
}

/// Draws `n` values from `source`, in order.
///
/// # Errors
/// Propagates the first error reported by the source, e.g. exhaustion of a
/// bounded generator.
pub fn collect_samples<S: UnitSource + ?Sized>(source: &mut S, n: usize) -> Result<Vec<f64>> {
    let mut samples = Vec::with_capacity(n);
    for _ in 0..n {
        samples.push(source.next_unit()?);
    }
    Ok(samples)
}
