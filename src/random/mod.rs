//! Random number generation subsystem for SineRand.
//!
//! Provides the sine map, the bounded generator built on it, and the
//! [`UnitSource`](source::UnitSource) seam shared with reference PRNGs.

pub mod sine;
pub mod sine_rand;
pub mod source;
