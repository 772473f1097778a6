//! Generalized Pareto distribution (location fixed at 0).

use crate::error::EvdError;
use crate::optimizer;

/// Shape magnitude below which the exponential limit form is used.
const SHAPE_EPS: f64 = 1e-9;

/// Validated parameters for a generalized Pareto distribution with location
/// fixed at 0.
///
/// `scale` (sigma) must be finite and positive; `shape` (xi) may take any
/// finite value. The support is `[0, inf)` for `shape >= 0` and
/// `[0, -scale/shape]` for `shape < 0`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GenParetoParams {
    shape: f64,
    scale: f64,
}

impl GenParetoParams {
    /// Create new generalized Pareto parameters after validating that
    /// `shape` is finite and `scale` is finite and strictly positive.
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && scale.is_finite() && scale > 0.0 {
            Some(Self { shape, scale })
        } else {
            None
        }
    }

    /// Shape parameter (xi).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter (sigma).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if self.shape.abs() < SHAPE_EPS {
            return 1.0 - (-x / self.scale).exp();
        }
        let t = 1.0 + self.shape * x / self.scale;
        if t <= 0.0 {
            // Beyond the upper endpoint (negative shape).
            return 1.0;
        }
        1.0 - t.powf(-1.0 / self.shape)
    }

    /// Quantile function.
    pub fn ppf(&self, q: f64) -> f64 {
        if self.shape.abs() < SHAPE_EPS {
            return -self.scale * (1.0 - q).ln();
        }
        self.scale * ((1.0 - q).powf(-self.shape) - 1.0) / self.shape
    }

    /// Natural log of the probability density function. Negative infinity
    /// outside the support.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        if self.shape.abs() < SHAPE_EPS {
            return -self.scale.ln() - x / self.scale;
        }
        let t = 1.0 + self.shape * x / self.scale;
        if t <= 0.0 {
            return f64::NEG_INFINITY;
        }
        -self.scale.ln() - (1.0 + 1.0 / self.shape) * t.ln()
    }
}

/// Fits a generalized Pareto distribution (location fixed at 0) by maximum
/// likelihood.
///
/// The search runs over `(shape, ln scale)`, seeded from method-of-moments
/// estimates; observations outside the candidate support are penalized
/// rather than rejected.
///
/// # Errors
///
/// Returns [`EvdError`] on empty, non-finite, or degenerate samples and on
/// optimizer failure.
pub fn fit_genpareto(sample: &[f64]) -> Result<GenParetoParams, EvdError> {
    crate::validate_sample(sample)?;

    // Method-of-moments seed: m^2/v = 1 - 2*shape, scale = m*(1 - shape).
    let m = triton_stats::mean(sample);
    let v = triton_stats::variance(sample);
    let (shape0, scale0) = if m > 0.0 && v > 0.0 {
        let shape0 = (0.5 * (1.0 - m * m / v)).clamp(-0.4, 0.4);
        (shape0, (m * (1.0 - shape0)).max(1e-8))
    } else {
        (0.1, triton_stats::sd(sample).max(1e-8))
    };

    let cost = |theta: &[f64]| {
        let candidate = GenParetoParams {
            shape: theta[0],
            scale: theta[1].exp(),
        };
        optimizer::penalized_nll(sample.iter().map(|&x| candidate.ln_pdf(x)))
    };

    let seed = [shape0, scale0.ln()];
    let best = optimizer::minimize(cost, &seed, 0.1, "genpareto")?;

    GenParetoParams::new(best[0], best[1].exp()).ok_or(EvdError::InvalidParams {
        family: "genpareto",
        message: format!("shape={}, scale={}", best[0], best[1].exp()),
    })
}
