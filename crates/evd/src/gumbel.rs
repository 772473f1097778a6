//! Right-skewed Gumbel distribution.

use crate::error::EvdError;
use crate::optimizer;

/// Euler-Mascheroni constant.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Validated parameters for a right-skewed Gumbel distribution:
/// `CDF(x) = exp(-exp(-(x-loc)/scale))`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GumbelParams {
    loc: f64,
    scale: f64,
}

impl GumbelParams {
    /// Create new Gumbel parameters after validating that `loc` is finite
    /// and `scale` is finite and strictly positive.
    pub fn new(loc: f64, scale: f64) -> Option<Self> {
        if loc.is_finite() && scale.is_finite() && scale > 0.0 {
            Some(Self { loc, scale })
        } else {
            None
        }
    }

    /// Location parameter (mu).
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Scale parameter (beta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        (-(-z).exp()).exp()
    }

    /// Quantile function, `loc - scale * ln(-ln q)`.
    pub fn ppf(&self, q: f64) -> f64 {
        self.loc - self.scale * (-q.ln()).ln()
    }

    /// Natural log of the probability density function.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        -self.scale.ln() - z - (-z).exp()
    }
}

/// Moment estimates `(loc, scale)` shared by the Gumbel and GEV seeds.
pub(crate) fn moment_seed(sample: &[f64]) -> (f64, f64) {
    let scale0 = (triton_stats::sd(sample) * 6.0_f64.sqrt() / std::f64::consts::PI).max(1e-8);
    let loc0 = triton_stats::mean(sample) - EULER_GAMMA * scale0;
    (loc0, scale0)
}

/// Fits a right-skewed Gumbel distribution by maximum likelihood, seeded
/// from moment estimates.
///
/// # Errors
///
/// Returns [`EvdError`] on empty, non-finite, or degenerate samples and on
/// optimizer failure.
pub fn fit_gumbel(sample: &[f64]) -> Result<GumbelParams, EvdError> {
    crate::validate_sample(sample)?;

    let (loc0, scale0) = moment_seed(sample);
    let cost = |theta: &[f64]| {
        let candidate = GumbelParams {
            loc: theta[0],
            scale: theta[1].exp(),
        };
        optimizer::penalized_nll(sample.iter().map(|&x| candidate.ln_pdf(x)))
    };

    let seed = [loc0, scale0.ln()];
    let best = optimizer::minimize(cost, &seed, 0.1, "gumbel")?;

    GumbelParams::new(best[0], best[1].exp()).ok_or(EvdError::InvalidParams {
        family: "gumbel",
        message: format!("loc={}, scale={}", best[0], best[1].exp()),
    })
}
