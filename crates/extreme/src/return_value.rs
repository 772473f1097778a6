//! Return-period values.

use crate::distribution::ResponseDistribution;
use crate::error::ExtremeError;

/// Hours per year used to convert return periods to probabilities.
const HOURS_PER_YEAR: f64 = 365.25 * 24.0;

/// The response level corresponding to a given return period.
///
/// The exceedance probability per short-term period is
/// `p = 1 / (return_year * 365.25 * 24 / short_term_period_hr)` and the
/// returned value is the distribution's quantile at `1 - p`.
///
/// # Errors
///
/// Returns [`ExtremeError::InvalidReturnPeriod`] unless both
/// `return_year` and `short_term_period_hr` are finite and positive.
pub fn return_year_value(
    dist: &ResponseDistribution,
    return_year: f64,
    short_term_period_hr: f64,
) -> Result<f64, ExtremeError> {
    if !return_year.is_finite() || return_year <= 0.0 {
        return Err(ExtremeError::InvalidReturnPeriod {
            reason: format!("return_year must be finite and positive, got {return_year}"),
        });
    }
    if !short_term_period_hr.is_finite() || short_term_period_hr <= 0.0 {
        return Err(ExtremeError::InvalidReturnPeriod {
            reason: format!(
                "short_term_period_hr must be finite and positive, got {short_term_period_hr}"
            ),
        });
    }

    let p = 1.0 / (return_year * HOURS_PER_YEAR / short_term_period_hr);
    Ok(dist.ppf(1.0 - p))
}
