//! Storm-peak independence filtering.
//!
//! Exceedances over a percentile threshold are decorrelated by merging any
//! two storm peaks closer than an autocorrelation-derived window: within a
//! window only the larger peak survives.

use tracing::debug;

use crate::error::PeaksError;
use crate::extract::global_peaks;

/// Independent storm-peak exceedances over a percentile threshold.
///
/// * `peaks` — peak values of the response time-series, one observation per
///   `sampling_rate` hours.
/// * `threshold_fraction` — percentile fraction in `[0, 1]`; the unit
///   threshold is the Hazen percentile of `peaks` at `100 *
///   threshold_fraction`.
/// * `sampling_rate` — hours between peak observations.
///
/// Candidate storm peaks are the global peaks of the exceedance series
/// `peaks - threshold`. The decorrelation window is the smallest positive
/// lag at which the normalized autocorrelation of `peaks` first drops below
/// 0.5, looking at the first 14 days of lags. Candidates are then merged
/// greedily: a candidate farther than the window from the last kept peak
/// starts a new storm; a closer candidate replaces the last kept peak if it
/// is larger, and is dropped otherwise.
///
/// Returns the kept exceedance values (over the unit threshold, not raw).
///
/// # Errors
///
/// Returns [`PeaksError`] on empty input, an out-of-range fraction, an
/// invalid sampling rate, or when the autocorrelation never decays below
/// 0.5 within the lag window ([`PeaksError::WindowNotFound`] — the record
/// must span enough time for the response to decorrelate).
pub fn independent_storm_peaks(
    peaks: &[f64],
    threshold_fraction: f64,
    sampling_rate: f64,
) -> Result<Vec<f64>, PeaksError> {
    if peaks.is_empty() {
        return Err(PeaksError::EmptyData);
    }
    if !(0.0..=1.0).contains(&threshold_fraction) || !threshold_fraction.is_finite() {
        return Err(PeaksError::InvalidThresholdFraction {
            value: threshold_fraction,
        });
    }
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
        return Err(PeaksError::InvalidSamplingRate {
            value: sampling_rate,
        });
    }

    let threshold = triton_stats::percentile_hazen(peaks, 100.0 * threshold_fraction);

    // Candidate storm peaks: global peaks of the exceedance series at
    // integer positions.
    let positions: Vec<f64> = (0..peaks.len()).map(|i| i as f64).collect();
    let exceedance: Vec<f64> = peaks.iter().map(|&p| p - threshold).collect();
    let (storm_pos, storm_exc) = global_peaks(&positions, &exceedance)?;
    if storm_pos.is_empty() {
        return Err(PeaksError::NoStormPeaks);
    }

    let window = decorrelation_window(peaks, sampling_rate)?;

    // Greedy merge: two storms within the window are the same storm; the
    // larger exceedance represents it.
    let mut kept_pos = vec![storm_pos[0]];
    let mut kept_exc = vec![storm_exc[0]];
    for (&pos, &exc) in storm_pos.iter().zip(storm_exc.iter()).skip(1) {
        let last = kept_exc.len() - 1;
        if pos - kept_pos[last] > window {
            kept_pos.push(pos);
            kept_exc.push(exc);
        } else if exc > kept_exc[last] {
            kept_pos[last] = pos;
            kept_exc[last] = exc;
        }
    }

    Ok(kept_exc)
}

/// Decorrelation window in peak-index units: the smallest positive lag at
/// which the normalized autocorrelation of `peaks` first drops below 0.5,
/// scanning the first 14 days of lags.
fn decorrelation_window(peaks: &[f64], sampling_rate: f64) -> Result<f64, PeaksError> {
    let nlags = (14.0 * 24.0 / sampling_rate).floor() as usize;
    let acf = triton_stats::autocorrelation(peaks, nlags);

    let max_lag = nlags.min(peaks.len().saturating_sub(1));
    let window = (1..=max_lag)
        .find(|&lag| acf[lag] < 0.5)
        .ok_or(PeaksError::WindowNotFound { nlags })?;

    debug!(window, nlags, "selected storm decorrelation window");
    Ok(window as f64)
}
