//! Error types for the triton-peaks crate.

use triton_evd::EvdError;

/// Error type for all fallible operations in the triton-peaks crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PeaksError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the time and value slices differ in length.
    #[error("length mismatch: t has {t_len} elements, data has {data_len}")]
    LengthMismatch {
        /// Length of the time slice.
        t_len: usize,
        /// Length of the value slice.
        data_len: usize,
    },

    /// Returned when the sampling rate is not a finite positive number of
    /// hours between peak observations.
    #[error("invalid sampling rate: {value} (must be finite and positive)")]
    InvalidSamplingRate {
        /// The invalid sampling rate.
        value: f64,
    },

    /// Returned when a threshold fraction is outside `[0, 1]`.
    #[error("invalid threshold fraction: {value} (must be in [0, 1])")]
    InvalidThresholdFraction {
        /// The invalid fraction.
        value: f64,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the exceedance series yields no storm peaks.
    #[error("no storm peaks found above the threshold")]
    NoStormPeaks,

    /// Returned when the autocorrelation never decays below 0.5 within the
    /// lag window, so no decorrelation window exists. The record must span
    /// enough time for the response to decorrelate.
    #[error("autocorrelation never drops below 0.5 within {nlags} lags")]
    WindowNotFound {
        /// Number of lags examined (14 days of peak observations).
        nlags: usize,
    },

    /// Returned when a threshold-search pass finds fewer than 2 independent
    /// extremes per year at every scanned threshold.
    #[error(
        "fewer than 2 independent extremes per year at the lowest scanned threshold {threshold}"
    )]
    InsufficientExtremes {
        /// Lowest threshold fraction scanned in the failing pass.
        threshold: f64,
    },

    /// Returned when the goodness-of-fit score cannot be computed (fewer
    /// than 3 distinct peaks).
    #[error("goodness-of-fit score unavailable (fewer than 3 distinct peaks)")]
    ScoreUnavailable,

    /// A distribution fit inside the threshold search failed.
    #[error(transparent)]
    Fit(#[from] EvdError),
}
