//! The sine map behind SineRand.
//!
//! `sin(1 / x)` oscillates faster and faster as `x` approaches zero, so
//! sampling it at tiny, evenly spaced `x` values gives a sequence that looks
//! noisy even though each point is a closed-form evaluation.

/// Divisor that moves integer indices into the oscillating region near zero.
pub const X_SCALE: f64 = 10_000_000.0;

/// Maps an integer index to the domain point `x` used by [`sine_value`].
///
/// Takes `|index|`, replaces zero with one so that `x` is never zero, and
/// divides by [`X_SCALE`]. Defined for every `i64`, always strictly positive.
pub fn index_to_x(index: i64) -> f64 {
    let idx = index.unsigned_abs().max(1);
    idx as f64 / X_SCALE
}

/// Computes the generator output for `seed` at `index`.
///
/// Evaluates `sin(seed / x)` and shifts negative results up by one. The
/// shift keeps the negative lobes where they are instead of mirroring them
/// onto the positive ones, which is what `abs` would do.
///
/// For any finite `seed` the result lies in `[0, 1)`.
pub fn sine_value(seed: f64, index: i64) -> f64 {
    let res = (seed / index_to_x(index)).sin();
    if res < 0.0 {
        let shifted = 1.0 + res;
        // 1.0 + (tiny negative) rounds to 1.0
        if shifted >= 1.0 {
            0.0
        } else {
            shifted
        }
    } else {
        res
    }
}
