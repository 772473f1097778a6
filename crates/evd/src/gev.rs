//! Generalized extreme value distribution.

use crate::error::EvdError;
use crate::optimizer;

const SHAPE_EPS: f64 = 1e-9;

/// Validated parameters for a generalized extreme value distribution in the
/// von Mises convention: `CDF(x) = exp(-(1 + shape*(x-loc)/scale)^(-1/shape))`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GevParams {
    shape: f64,
    loc: f64,
    scale: f64,
}

impl GevParams {
    /// Create new GEV parameters after validating that `shape` and `loc`
    /// are finite and `scale` is finite and strictly positive.
    pub fn new(shape: f64, loc: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && loc.is_finite() && scale.is_finite() && scale > 0.0 {
            Some(Self { shape, loc, scale })
        } else {
            None
        }
    }

    /// Shape parameter (xi).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Location parameter (mu).
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Scale parameter (sigma).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if self.shape.abs() < SHAPE_EPS {
            return (-(-z).exp()).exp();
        }
        let t = 1.0 + self.shape * z;
        if t <= 0.0 {
            return if self.shape > 0.0 { 0.0 } else { 1.0 };
        }
        (-t.powf(-1.0 / self.shape)).exp()
    }

    /// Quantile function.
    pub fn ppf(&self, q: f64) -> f64 {
        if self.shape.abs() < SHAPE_EPS {
            return self.loc - self.scale * (-q.ln()).ln();
        }
        self.loc + self.scale * ((-q.ln()).powf(-self.shape) - 1.0) / self.shape
    }

    /// Natural log of the probability density function. Negative infinity
    /// outside the support.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if self.shape.abs() < SHAPE_EPS {
            return -self.scale.ln() - z - (-z).exp();
        }
        let t = 1.0 + self.shape * z;
        if t <= 0.0 {
            return f64::NEG_INFINITY;
        }
        -self.scale.ln() + (-1.0 / self.shape - 1.0) * t.ln() - t.powf(-1.0 / self.shape)
    }
}

/// Fits a generalized extreme value distribution by maximum likelihood over
/// all three parameters, seeded from Gumbel moment estimates.
///
/// # Errors
///
/// Returns [`EvdError`] on empty, non-finite, or degenerate samples and on
/// optimizer failure.
pub fn fit_gev(sample: &[f64]) -> Result<GevParams, EvdError> {
    crate::validate_sample(sample)?;

    let (loc0, scale0) = crate::gumbel::moment_seed(sample);
    let cost = |theta: &[f64]| {
        let candidate = GevParams {
            shape: theta[0],
            loc: theta[1],
            scale: theta[2].exp(),
        };
        optimizer::penalized_nll(sample.iter().map(|&x| candidate.ln_pdf(x)))
    };

    let seed = [0.1, loc0, scale0.ln()];
    let best = optimizer::minimize(cost, &seed, 0.1, "gev")?;

    GevParams::new(best[0], best[1], best[2].exp()).ok_or(EvdError::InvalidParams {
        family: "gev",
        message: format!(
            "shape={}, loc={}, scale={}",
            best[0],
            best[1],
            best[2].exp()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use rand::SeedableRng;

    fn sample_gev(params: &GevParams, n: usize, seed: u64) -> Vec<f64> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        (0..n).map(|_| params.ppf(rng.random::<f64>())).collect()
    }

    #[test]
    fn new_invalid() {
        assert!(GevParams::new(0.1, 0.0, 0.0).is_none());
        assert!(GevParams::new(f64::INFINITY, 0.0, 1.0).is_none());
    }

    #[test]
    fn cdf_ppf_round_trip() {
        for &shape in &[-0.25, 0.0, 0.3] {
            let p = GevParams::new(shape, 1.0, 2.0).unwrap();
            for &q in &[0.05, 0.5, 0.9, 0.99] {
                assert_relative_eq!(p.cdf(p.ppf(q)), q, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn gumbel_limit_consistency() {
        let near_zero = GevParams::new(1e-12, 0.5, 2.0).unwrap();
        let exact = GevParams::new(0.0, 0.5, 2.0).unwrap();
        for &x in &[-2.0, 0.0, 1.0, 5.0] {
            assert_relative_eq!(near_zero.cdf(x), exact.cdf(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn support_endpoints() {
        // Positive shape: lower endpoint at loc - scale/shape.
        let p = GevParams::new(0.5, 0.0, 1.0).unwrap();
        assert_eq!(p.cdf(-3.0), 0.0);
        // Negative shape: upper endpoint at loc - scale/shape.
        let q = GevParams::new(-0.5, 0.0, 1.0).unwrap();
        assert_relative_eq!(q.cdf(3.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn fit_recovers_known_parameters() {
        let truth = GevParams::new(0.1, 2.0, 1.0).unwrap();
        let sample = sample_gev(&truth, 20000, 21);

        let fitted = fit_gev(&sample).unwrap();
        assert_relative_eq!(fitted.shape(), 0.1, epsilon = 0.05);
        assert_relative_eq!(fitted.loc(), 2.0, epsilon = 0.05);
        assert_relative_eq!(fitted.scale(), 1.0, epsilon = 0.05);
    }

    #[test]
    fn fit_rejects_constant() {
        assert!(matches!(
            fit_gev(&[1.0; 50]),
            Err(EvdError::DegenerateSample { .. })
        ));
    }
}
