//! Block-maxima extraction and fits.

use tracing::debug;

use triton_evd::{fit_gev, fit_gumbel};

use crate::distribution::ResponseDistribution;
use crate::error::ExtremeError;

/// Finds the block maxima of a time-series.
///
/// The record `(t, x)` is divided into blocks `[i*t_st, (i+1)*t_st)` for
/// `i < floor(t_last / t_st)` and the maximum of each block is returned. A
/// trailing partial block shorter than `t_st` is truncated.
///
/// # Errors
///
/// Returns [`ExtremeError`] on empty or mismatched inputs, an invalid
/// block length, a record shorter than one block, or a block containing no
/// samples.
pub fn block_maxima(t: &[f64], x: &[f64], t_st: f64) -> Result<Vec<f64>, ExtremeError> {
    if t.is_empty() || x.is_empty() {
        return Err(ExtremeError::EmptyData);
    }
    if t.len() != x.len() {
        return Err(ExtremeError::LengthMismatch {
            t_len: t.len(),
            data_len: x.len(),
        });
    }
    if !t_st.is_finite() || t_st <= 0.0 {
        return Err(ExtremeError::InvalidBlockLength { value: t_st });
    }

    let t_last = t[t.len() - 1];
    let nblock = (t_last / t_st) as usize;
    if nblock == 0 {
        return Err(ExtremeError::RecordTooShort { t_last, t_st });
    }
    if t_last > nblock as f64 * t_st {
        debug!(t_last, t_st, nblock, "trailing partial block truncated");
    }

    let mut maxima = Vec::with_capacity(nblock);
    for iblock in 0..nblock {
        let lo = iblock as f64 * t_st;
        let hi = (iblock + 1) as f64 * t_st;
        let block_max = t
            .iter()
            .zip(x.iter())
            .filter(|&(&ti, _)| ti >= lo && ti < hi)
            .map(|(_, &xi)| xi)
            .fold(f64::NEG_INFINITY, f64::max);
        if block_max == f64::NEG_INFINITY {
            return Err(ExtremeError::EmptyBlock { index: iblock });
        }
        maxima.push(block_max);
    }
    Ok(maxima)
}

/// Approximates the short-term extreme distribution by fitting a
/// generalized extreme value distribution to block maxima.
///
/// # Errors
///
/// Returns [`ExtremeError`] when the fit fails.
pub fn ste_gev(block_maxima: &[f64]) -> Result<ResponseDistribution, ExtremeError> {
    let params = fit_gev(block_maxima)?;
    Ok(ResponseDistribution::Gev(params))
}

/// Approximates the short-term extreme distribution by fitting a
/// right-skewed Gumbel distribution to block maxima.
///
/// # Errors
///
/// Returns [`ExtremeError`] when the fit fails.
pub fn ste_gumbel(block_maxima: &[f64]) -> Result<ResponseDistribution, ExtremeError> {
    let params = fit_gumbel(block_maxima)?;
    Ok(ResponseDistribution::Gumbel(params))
}
