//! Extreme-value distribution families and fitting for Triton.
//!
//! This crate provides the distribution families used by the
//! extreme-response pipeline and their estimation routines:
//!
//! | Family | Parameters | Fit |
//! |--------|------------|-----|
//! | Weibull | shape, scale (loc 0) | MLE, [`fit_weibull`] |
//! | Generalized Pareto | shape, scale (loc 0) | MLE, [`fit_genpareto`] |
//! | GEV | shape, loc, scale | MLE, [`fit_gev`] |
//! | Gumbel (right) | loc, scale | MLE, [`fit_gumbel`] |
//!
//! All maximum-likelihood fits minimize a penalized negative log-likelihood
//! with Nelder-Mead over unconstrained (log-transformed where positive)
//! parameters. [`fit_weibull_cdf`] fits Weibull parameters to empirical CDF
//! points by least squares (the tail-fit primitive), and [`ppcc`] scores
//! goodness of fit as a probability-plot correlation coefficient.

mod error;
mod genpareto;
mod gev;
mod gumbel;
mod optimizer;
mod probplot;
mod weibull;

pub use error::EvdError;
pub use genpareto::{GenParetoParams, fit_genpareto};
pub use gev::{GevParams, fit_gev};
pub use gumbel::{GumbelParams, fit_gumbel};
pub use probplot::{filliben_medians, ppcc};
pub use weibull::{WeibullParams, fit_weibull, fit_weibull_cdf};

/// Validates a fitting sample: non-empty, all finite, nonzero spread.
pub(crate) fn validate_sample(sample: &[f64]) -> Result<(), EvdError> {
    if sample.is_empty() {
        return Err(EvdError::EmptySample);
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(EvdError::NonFiniteSample);
    }
    let min = sample.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = sample.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        return Err(EvdError::DegenerateSample {
            reason: "all values identical".to_string(),
        });
    }
    Ok(())
}
