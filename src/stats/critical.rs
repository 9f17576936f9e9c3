//! Critical values and p-values for the randomness tests.
//!
//! At `alpha = 0.05` these give the usual reference numbers: `1.96` for the
//! two-tailed runs test and `16.919` for a 9-degree chi-squared test.

use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

use crate::error::{Result, SineRandError};

fn check_alpha(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(SineRandError::InvalidSignificance(alpha))
    }
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| SineRandError::Distribution(e.to_string()))
}

fn chi_squared(df: f64) -> Result<ChiSquared> {
    ChiSquared::new(df).map_err(|e| SineRandError::Distribution(e.to_string()))
}

/// Two-tailed critical `|z|` at significance `alpha`.
///
/// # Errors
/// [`SineRandError::InvalidSignificance`] if `alpha` is not in `(0, 1)`.
pub fn z_critical(alpha: f64) -> Result<f64> {
    check_alpha(alpha)?;
    Ok(standard_normal()?.inverse_cdf(1.0 - alpha / 2.0))
}

/// Upper-tail chi-squared critical value for `df` degrees of freedom.
///
/// # Errors
/// - [`SineRandError::InvalidSignificance`] if `alpha` is not in `(0, 1)`.
/// - [`SineRandError::Distribution`] if `df` is not positive.
pub fn chi_squared_critical(df: f64, alpha: f64) -> Result<f64> {
    check_alpha(alpha)?;
    Ok(chi_squared(df)?.inverse_cdf(1.0 - alpha))
}

/// Two-tailed p-value of a runs-test z-score.
pub fn runs_p_value(z: f64) -> Result<f64> {
    let normal = standard_normal()?;
    Ok((2.0 * (1.0 - normal.cdf(z.abs()))).clamp(0.0, 1.0))
}

/// Upper-tail p-value of a chi-squared statistic.
///
/// # Errors
/// [`SineRandError::Distribution`] if `df` is not positive.
pub fn chi_squared_p_value(stat: f64, df: f64) -> Result<f64> {
    Ok((1.0 - chi_squared(df)?.cdf(stat)).clamp(0.0, 1.0))
}
