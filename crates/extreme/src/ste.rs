//! Short-term extreme distribution construction.

use triton_peaks::global_peaks;

use crate::block::{block_maxima, ste_gev, ste_gumbel};
use crate::distribution::ResponseDistribution;
use crate::error::ExtremeError;
use crate::estimators::{peaks_over_threshold, peaks_weibull, peaks_weibull_tail_fit};

/// Estimation method for [`short_term_extreme`].
///
/// The peak-based methods fit a peaks distribution and raise it to the
/// expected number of peaks in the short-term period; the block-maxima
/// methods fit the extreme distribution directly and need a record many
/// times longer than the short-term period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Method {
    /// Weibull fit to all peaks.
    PeaksWeibull,
    /// Weibull tail fit (seven upper-tail subsets averaged).
    PeaksWeibullTailFit,
    /// Generalized Pareto fit to exceedances over `mean + 1.4*std`.
    PeaksOverThreshold,
    /// Generalized extreme value fit to block maxima.
    BlockMaximaGev,
    /// Gumbel fit to block maxima.
    BlockMaximaGumbel,
}

/// Estimates the number of peaks in a short-term period by linear scaling:
/// `n * t_st / t` for `n` peaks observed over a record of length `t`.
pub fn number_of_short_term_peaks(n: usize, t: f64, t_st: f64) -> f64 {
    n as f64 * t_st / t
}

/// Derives the short-term extreme distribution from a peaks distribution as
/// the maximum of `n_peaks` independent draws:
/// `CDF(x) = peaks_distribution.cdf(x)^n_peaks`, with NaN parent values
/// (below a peaks-over-threshold's threshold) treated as 0.
///
/// # Errors
///
/// Returns [`ExtremeError::InvalidPeakCount`] unless `n_peaks` is finite
/// and positive.
pub fn ste_peaks(
    peaks_distribution: ResponseDistribution,
    n_peaks: f64,
) -> Result<ResponseDistribution, ExtremeError> {
    if !n_peaks.is_finite() || n_peaks <= 0.0 {
        return Err(ExtremeError::InvalidPeakCount { value: n_peaks });
    }
    Ok(ResponseDistribution::ShortTermExtreme {
        peaks: Box::new(peaks_distribution),
        n_peaks,
    })
}

/// Approximates the short-term extreme distribution of a response
/// time-series with the chosen method.
///
/// For peak-based methods the global peaks are extracted, the peaks
/// distribution fitted, and the peak count scaled to the short-term period
/// `t_st`. For block-maxima methods the record is divided into blocks of
/// length `t_st` and the block maxima fitted directly.
///
/// # Errors
///
/// Returns [`ExtremeError`] on invalid inputs or a failed fit.
pub fn short_term_extreme(
    t: &[f64],
    data: &[f64],
    t_st: f64,
    method: Method,
) -> Result<ResponseDistribution, ExtremeError> {
    if t.is_empty() || data.is_empty() {
        return Err(ExtremeError::EmptyData);
    }
    if t.len() != data.len() {
        return Err(ExtremeError::LengthMismatch {
            t_len: t.len(),
            data_len: data.len(),
        });
    }
    if !t_st.is_finite() || t_st <= 0.0 {
        return Err(ExtremeError::InvalidBlockLength { value: t_st });
    }

    match method {
        Method::PeaksWeibull | Method::PeaksWeibullTailFit | Method::PeaksOverThreshold => {
            let (_, peaks) = global_peaks(t, data)?;
            let duration = t[t.len() - 1] - t[0];
            if duration <= 0.0 {
                return Err(ExtremeError::InvalidDuration { value: duration });
            }
            let n_st = number_of_short_term_peaks(peaks.len(), duration, t_st);
            let peaks_dist = match method {
                Method::PeaksWeibull => peaks_weibull(&peaks)?,
                Method::PeaksWeibullTailFit => peaks_weibull_tail_fit(&peaks)?.into_distribution(),
                Method::PeaksOverThreshold => peaks_over_threshold(&peaks, None)?,
                _ => unreachable!(),
            };
            ste_peaks(peaks_dist, n_st)
        }
        Method::BlockMaximaGev => {
            let maxima = block_maxima(t, data, t_st)?;
            ste_gev(&maxima)
        }
        Method::BlockMaximaGumbel => {
            let maxima = block_maxima(t, data, t_st)?;
            ste_gumbel(&maxima)
        }
    }
}
