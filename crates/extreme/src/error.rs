//! Error types for the triton-extreme crate.

use triton_evd::EvdError;
use triton_peaks::PeaksError;

/// Error type for all fallible operations in the triton-extreme crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtremeError {
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

    /// Returned when the record spans no positive duration.
    #[error("record duration must be positive, got {value}")]
    InvalidDuration {
        /// The offending duration.
        value: f64,
    },

    /// Returned when a short-term period is not finite and positive.
    #[error("invalid short-term period: {value} (must be finite and positive)")]
    InvalidBlockLength {
        /// The invalid short-term period.
        value: f64,
    },

    /// Returned when the record is shorter than a single block.
    #[error("record ends at t={t_last} but blocks are {t_st} long; no full block fits")]
    RecordTooShort {
        /// Final time stamp of the record.
        t_last: f64,
        /// Requested block length.
        t_st: f64,
    },

    /// Returned when a block contains no samples.
    #[error("block {index} contains no samples")]
    EmptyBlock {
        /// 0-indexed block number.
        index: usize,
    },

    /// Returned when an upper-tail subset of the empirical CDF is empty.
    #[error("tail subset above empirical probability {cutoff} is empty")]
    EmptyTailSubset {
        /// Lower empirical-probability cutoff of the empty subset.
        cutoff: f64,
    },

    /// Returned when the averaged tail-fit parameters are invalid.
    #[error("averaged tail-fit parameters invalid: shape={shape}, scale={scale}")]
    InvalidTailParams {
        /// Averaged shape estimate.
        shape: f64,
        /// Averaged scale estimate.
        scale: f64,
    },

    /// Returned when a peaks-over-threshold threshold is not finite.
    #[error("invalid threshold: {value} (must be finite)")]
    InvalidThreshold {
        /// The invalid threshold.
        value: f64,
    },

    /// Returned when no peaks exceed the threshold.
    #[error("no peaks exceed the threshold {threshold}")]
    NoExceedances {
        /// Threshold in response units.
        threshold: f64,
    },

    /// Returned when the short-term peak count is not finite and positive.
    #[error("invalid peak count: {value} (must be finite and positive)")]
    InvalidPeakCount {
        /// The invalid peak count.
        value: f64,
    },

    /// Returned when the member and weight counts differ.
    #[error("sea-state mismatch: {members} distributions but {weights} weights")]
    WeightsMismatch {
        /// Number of short-term extreme distributions.
        members: usize,
        /// Number of weights.
        weights: usize,
    },

    /// Returned when weights are negative, non-finite, or sum to zero.
    #[error("invalid weights: {reason}")]
    InvalidWeights {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a return period or short-term period is invalid.
    #[error("invalid return period: {reason}")]
    InvalidReturnPeriod {
        /// Description of the problem.
        reason: String,
    },

    /// A distribution fit failed.
    #[error(transparent)]
    Fit(#[from] EvdError),

    /// Peak extraction failed.
    #[error(transparent)]
    Peaks(#[from] PeaksError),
}
