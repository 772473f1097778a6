//! Peaks-distribution estimators.
//!
//! Three interchangeable strategies turn a global-peaks sample into a peaks
//! distribution: a full-sample Weibull fit, the Weibull tail-fit method
//! (averaging least-squares fits over seven upper-tail subsets), and the
//! peaks-over-threshold method (generalized Pareto over exceedances).

use triton_evd::{WeibullParams, fit_genpareto, fit_weibull, fit_weibull_cdf};

use crate::distribution::ResponseDistribution;
use crate::error::ExtremeError;

/// Number of overlapping upper-tail subsets in the tail-fit method.
const TAIL_SUBSETS: usize = 7;

/// Estimates the peaks distribution by fitting a Weibull distribution to
/// all global peaks by maximum likelihood.
///
/// # Errors
///
/// Returns [`ExtremeError`] when the underlying fit fails.
pub fn peaks_weibull(peaks: &[f64]) -> Result<ResponseDistribution, ExtremeError> {
    let params = fit_weibull(peaks)?;
    Ok(ResponseDistribution::Weibull(params))
}

/// Result of the Weibull tail-fit method: the averaged distribution plus
/// the per-subset parameter estimates retained for diagnostics.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TailFit {
    distribution: ResponseDistribution,
    subset_shape: [f64; TAIL_SUBSETS],
    subset_scale: [f64; TAIL_SUBSETS],
}

impl TailFit {
    /// The averaged peaks distribution.
    pub fn distribution(&self) -> &ResponseDistribution {
        &self.distribution
    }

    /// Consumes the record, returning the averaged peaks distribution.
    pub fn into_distribution(self) -> ResponseDistribution {
        self.distribution
    }

    /// Per-subset shape estimates.
    pub fn subset_shape(&self) -> &[f64; TAIL_SUBSETS] {
        &self.subset_shape
    }

    /// Per-subset scale estimates.
    pub fn subset_scale(&self) -> &[f64; TAIL_SUBSETS] {
        &self.subset_scale
    }
}

/// Estimates the peaks distribution with the Weibull tail-fit method.
///
/// A full-sample maximum-likelihood Weibull fit seeds seven nonlinear
/// least-squares fits of the Weibull CDF to the empirical CDF
/// (`F[i] = i/(n+1)` over the sorted sample, 0-indexed ranks), one per
/// upper-tail subset with lower cutoffs `0.60, 0.65, ..` in steps of 0.05.
/// The final shape and scale are the means of the seven subset estimates.
///
/// # Errors
///
/// Returns [`ExtremeError`] when the seed fit fails, a tail subset is
/// empty, a subset fit fails, or the averaged parameters are invalid.
pub fn peaks_weibull_tail_fit(peaks: &[f64]) -> Result<TailFit, ExtremeError> {
    let seed = fit_weibull(peaks)?;

    let mut sorted = peaks.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let empirical: Vec<f64> = (0..n).map(|i| i as f64 / (n as f64 + 1.0)).collect();

    let mut subset_shape = [0.0; TAIL_SUBSETS];
    let mut subset_scale = [0.0; TAIL_SUBSETS];
    for set in 0..TAIL_SUBSETS {
        let cutoff = 0.60 + 0.05 * set as f64;
        let (x_subset, f_subset): (Vec<f64>, Vec<f64>) = sorted
            .iter()
            .zip(empirical.iter())
            .filter(|&(_, &f)| f > cutoff)
            .map(|(&x, &f)| (x, f))
            .unzip();
        if x_subset.is_empty() {
            return Err(ExtremeError::EmptyTailSubset { cutoff });
        }
        let fitted = fit_weibull_cdf(&x_subset, &f_subset, &seed)?;
        subset_shape[set] = fitted.shape();
        subset_scale[set] = fitted.scale();
    }

    let shape = triton_stats::mean(&subset_shape);
    let scale = triton_stats::mean(&subset_scale);
    let params =
        WeibullParams::new(shape, scale).ok_or(ExtremeError::InvalidTailParams { shape, scale })?;

    Ok(TailFit {
        distribution: ResponseDistribution::Weibull(params),
        subset_shape,
        subset_scale,
    })
}

/// Estimates the peaks distribution with the peaks-over-threshold method.
///
/// Fits a generalized Pareto distribution (location 0) by maximum
/// likelihood to the exceedances above `threshold`, defaulting to
/// `mean + 1.4 * std` of the peaks. The resulting distribution is only
/// defined above the threshold: its CDF is NaN below, so it cannot provide
/// integral metrics such as the expected value.
///
/// # Errors
///
/// Returns [`ExtremeError`] on an empty sample, a non-finite threshold, no
/// exceedances, or a failed fit.
pub fn peaks_over_threshold(
    peaks: &[f64],
    threshold: Option<f64>,
) -> Result<ResponseDistribution, ExtremeError> {
    if peaks.is_empty() {
        return Err(ExtremeError::EmptyData);
    }
    let threshold = threshold.unwrap_or_else(|| {
        triton_stats::mean(peaks) + 1.4 * triton_stats::sd_population(peaks)
    });
    if !threshold.is_finite() {
        return Err(ExtremeError::InvalidThreshold { value: threshold });
    }

    let exceedances: Vec<f64> = peaks
        .iter()
        .filter(|&&x| x > threshold)
        .map(|&x| x - threshold)
        .collect();
    if exceedances.is_empty() {
        return Err(ExtremeError::NoExceedances { threshold });
    }

    let pot = fit_genpareto(&exceedances)?;
    Ok(ResponseDistribution::PeaksOverThreshold {
        pot,
        threshold,
        exceedance_fraction: exceedances.len() as f64 / peaks.len() as f64,
    })
}
