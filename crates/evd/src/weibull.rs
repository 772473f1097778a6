//! Two-parameter Weibull distribution and statrs bridge.

use statrs::distribution::{Continuous, Weibull};
use statrs::function::gamma::gamma;

use crate::error::EvdError;
use crate::optimizer;

/// Validated parameters for a two-parameter Weibull distribution
/// (location fixed at 0).
///
/// Both `shape` (k) and `scale` (lambda) must be finite and positive. Use
/// [`WeibullParams::new`] for direct construction or [`fit_weibull`] for a
/// maximum-likelihood estimate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct WeibullParams {
    shape: f64,
    scale: f64,
}

impl WeibullParams {
    /// Create new Weibull parameters after validating that both `shape` and
    /// `scale` are finite and strictly positive.
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && shape > 0.0 && scale.is_finite() && scale > 0.0 {
            Some(Self { shape, scale })
        } else {
            None
        }
    }

    /// Shape parameter (k).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter (lambda).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Distribution mean, `scale * gamma(1 + 1/shape)`.
    pub fn mean(&self) -> f64 {
        self.scale * gamma(1.0 + 1.0 / self.shape)
    }

    /// Cumulative distribution function, `1 - exp(-(x/scale)^shape)`.
    /// Zero for `x <= 0`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        1.0 - (-(x / self.scale).powf(self.shape)).exp()
    }

    /// Quantile function, `scale * (-ln(1-q))^(1/shape)`.
    pub fn ppf(&self, q: f64) -> f64 {
        self.scale * (-(1.0 - q).ln()).powf(1.0 / self.shape)
    }
}

/// Build a [`statrs::distribution::Weibull`] from validated
/// [`WeibullParams`].
#[allow(dead_code)]
pub(crate) fn weibull_dist(params: &WeibullParams) -> Result<Weibull, EvdError> {
    Weibull::new(params.shape(), params.scale()).map_err(|e| EvdError::WeibullConstruction {
        shape: params.shape(),
        scale: params.scale(),
        message: e.to_string(),
    })
}

/// Fits a two-parameter Weibull distribution by maximum likelihood.
///
/// The shape exponent of the exponentiated-Weibull family is fixed at 1 and
/// the location at 0, so only `(shape, scale)` are estimated. The search
/// runs over `(ln shape, ln scale)`, seeded from log-moment estimates of
/// the positive part of the sample; observations outside the support are
/// penalized rather than rejected.
///
/// # Errors
///
/// Returns [`EvdError`] on empty, non-finite, or degenerate samples and on
/// optimizer failure.
pub fn fit_weibull(sample: &[f64]) -> Result<WeibullParams, EvdError> {
    crate::validate_sample(sample)?;

    let positive: Vec<f64> = sample.iter().copied().filter(|&x| x > 0.0).collect();
    if positive.len() < 2 {
        return Err(EvdError::DegenerateSample {
            reason: "fewer than 2 positive values".to_string(),
        });
    }

    // Log-moment seed: sd(ln X) = (pi/sqrt(6)) / shape for a Weibull.
    let log_values: Vec<f64> = positive.iter().map(|&x| x.ln()).collect();
    let log_sd = triton_stats::sd(&log_values);
    if log_sd <= 1e-12 {
        return Err(EvdError::DegenerateSample {
            reason: "no spread in positive values".to_string(),
        });
    }
    let shape0 = std::f64::consts::PI / 6.0_f64.sqrt() / log_sd;
    let mean_positive = triton_stats::mean(&positive);
    let gamma_term = gamma(1.0 + 1.0 / shape0);
    let scale0 = if gamma_term.is_finite() && gamma_term > 0.0 {
        mean_positive / gamma_term
    } else {
        mean_positive
    };

    let cost = |theta: &[f64]| {
        let shape = theta[0].exp();
        let scale = theta[1].exp();
        match Weibull::new(shape, scale) {
            Ok(dist) => optimizer::penalized_nll(sample.iter().map(|&x| dist.ln_pdf(x))),
            Err(_) => f64::MAX,
        }
    };

    let seed = [shape0.ln(), scale0.ln()];
    let best = optimizer::minimize(cost, &seed, 0.1, "weibull")?;

    WeibullParams::new(best[0].exp(), best[1].exp()).ok_or(EvdError::InvalidParams {
        family: "weibull",
        message: format!("shape={}, scale={}", best[0].exp(), best[1].exp()),
    })
}

/// Fits Weibull `(shape, scale)` to empirical CDF points by nonlinear least
/// squares.
///
/// Minimizes the sum of squared residuals between the Weibull CDF evaluated
/// at `x` and the empirical probabilities `f`, seeded from `seed`. This is
/// the tail-fit primitive: callers pass an upper-tail subset of the sorted
/// sample and its empirical CDF.
///
/// # Errors
///
/// Returns [`EvdError`] on empty input, length mismatch, non-finite values,
/// or optimizer failure.
pub fn fit_weibull_cdf(x: &[f64], f: &[f64], seed: &WeibullParams) -> Result<WeibullParams, EvdError> {
    if x.is_empty() {
        return Err(EvdError::EmptySample);
    }
    if x.len() != f.len() {
        return Err(EvdError::LengthMismatch {
            x_len: x.len(),
            y_len: f.len(),
        });
    }
    if x.iter().chain(f.iter()).any(|v| !v.is_finite()) {
        return Err(EvdError::NonFiniteSample);
    }

    let cost = |theta: &[f64]| {
        let params = WeibullParams {
            shape: theta[0].exp(),
            scale: theta[1].exp(),
        };
        x.iter()
            .zip(f.iter())
            .map(|(&xi, &fi)| {
                let r = params.cdf(xi) - fi;
                r * r
            })
            .sum()
    };

    let seed_theta = [seed.shape().ln(), seed.scale().ln()];
    let best = optimizer::minimize(cost, &seed_theta, 0.1, "weibull-cdf")?;

    WeibullParams::new(best[0].exp(), best[1].exp()).ok_or(EvdError::InvalidParams {
        family: "weibull-cdf",
        message: format!("shape={}, scale={}", best[0].exp(), best[1].exp()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_distr::Distribution;
    use statrs::distribution::ContinuousCDF;

    #[test]
    fn new_valid() {
        let p = WeibullParams::new(2.0, 3.0).unwrap();
        assert_relative_eq!(p.shape(), 2.0);
        assert_relative_eq!(p.scale(), 3.0);
    }

    #[test]
    fn new_invalid() {
        assert!(WeibullParams::new(0.0, 1.0).is_none());
        assert!(WeibullParams::new(1.0, -1.0).is_none());
        assert!(WeibullParams::new(f64::NAN, 1.0).is_none());
        assert!(WeibullParams::new(1.0, f64::INFINITY).is_none());
    }

    #[test]
    fn mean_known_value() {
        // shape=1 is exponential: mean = scale.
        let p = WeibullParams::new(1.0, 3.0).unwrap();
        assert_relative_eq!(p.mean(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn cdf_matches_statrs() {
        let p = WeibullParams::new(1.7, 2.4).unwrap();
        let dist = weibull_dist(&p).unwrap();
        for &x in &[0.1, 0.5, 1.0, 2.0, 4.0, 8.0] {
            assert_relative_eq!(p.cdf(x), dist.cdf(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn ppf_round_trip() {
        let p = WeibullParams::new(2.2, 1.5).unwrap();
        for &q in &[0.01, 0.1, 0.5, 0.9, 0.99, 0.999] {
            assert_relative_eq!(p.cdf(p.ppf(q)), q, epsilon = 1e-10);
        }
    }

    #[test]
    fn cdf_zero_below_support() {
        let p = WeibullParams::new(2.0, 1.0).unwrap();
        assert_eq!(p.cdf(0.0), 0.0);
        assert_eq!(p.cdf(-1.0), 0.0);
    }

    #[test]
    fn fit_recovers_known_parameters() {
        let shape = 2.0;
        let scale = 3.0;
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        // rand_distr parameterizes Weibull as (scale, shape).
        let dist = rand_distr::Weibull::new(scale, shape).unwrap();
        let sample: Vec<f64> = (0..20000).map(|_| dist.sample(&mut rng)).collect();

        let fitted = fit_weibull(&sample).unwrap();
        assert_relative_eq!(fitted.shape(), shape, epsilon = shape * 0.05);
        assert_relative_eq!(fitted.scale(), scale, epsilon = scale * 0.05);
    }

    #[test]
    fn fit_rejects_empty() {
        assert!(matches!(fit_weibull(&[]), Err(EvdError::EmptySample)));
    }

    #[test]
    fn fit_rejects_non_finite() {
        let sample = [1.0, f64::NAN, 2.0];
        assert!(matches!(
            fit_weibull(&sample),
            Err(EvdError::NonFiniteSample)
        ));
    }

    #[test]
    fn fit_rejects_constant() {
        assert!(matches!(
            fit_weibull(&[2.0; 10]),
            Err(EvdError::DegenerateSample { .. })
        ));
    }

    #[test]
    fn cdf_least_squares_recovers_exact_points() {
        let truth = WeibullParams::new(1.8, 2.5).unwrap();
        let x: Vec<f64> = (1..=40).map(|i| i as f64 * 0.2).collect();
        let f: Vec<f64> = x.iter().map(|&xi| truth.cdf(xi)).collect();
        let seed = WeibullParams::new(1.0, 1.0).unwrap();

        let fitted = fit_weibull_cdf(&x, &f, &seed).unwrap();
        assert_relative_eq!(fitted.shape(), 1.8, epsilon = 0.02);
        assert_relative_eq!(fitted.scale(), 2.5, epsilon = 0.02);
    }

    #[test]
    fn cdf_least_squares_length_mismatch() {
        let seed = WeibullParams::new(1.0, 1.0).unwrap();
        assert!(matches!(
            fit_weibull_cdf(&[1.0, 2.0], &[0.5], &seed),
            Err(EvdError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn params_are_copy_clone_send_sync() {
        fn assert_impl<T: Copy + Clone + Send + Sync>() {}
        assert_impl::<WeibullParams>();
    }
}
