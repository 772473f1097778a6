//! Error types for the triton-mler crate.

/// Error type for all fallible operations in the triton-mler crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MlerError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyInput,

    /// Returned when the RAO, frequency, and spectrum slices differ in
    /// length.
    #[error(
        "length mismatch: rao has {rao_len} elements, freq has {freq_len}, spectrum has {spectrum_len}"
    )]
    LengthMismatch {
        /// Length of the RAO slice.
        rao_len: usize,
        /// Length of the frequency slice.
        freq_len: usize,
        /// Length of the spectral-density slice.
        spectrum_len: usize,
    },

    /// Returned when the wavenumber slice does not match the coefficient
    /// frequencies.
    #[error("wavenumber mismatch: k has {k_len} elements, coefficients have {coeff_len}")]
    WavenumberMismatch {
        /// Length of the wavenumber slice.
        k_len: usize,
        /// Number of coefficient frequencies.
        coeff_len: usize,
    },

    /// Returned when fewer than 2 frequencies are supplied, so no frequency
    /// spacing exists.
    #[error("need at least 2 frequencies, got {len}")]
    TooFewFrequencies {
        /// Number of frequencies supplied.
        len: usize,
    },

    /// Returned when the target response or wave amplitude is not finite.
    #[error("invalid target amplitude: {value}")]
    InvalidAmplitude {
        /// The offending value.
        value: f64,
    },

    /// Returned when a simulation-grid parameter is invalid.
    #[error("invalid simulation grid: {reason}")]
    InvalidGrid {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the conditioned wave has zero amplitude everywhere and
    /// cannot be renormalized.
    #[error("conditioned wave has zero amplitude; cannot renormalize")]
    ZeroAmplitude,
}
