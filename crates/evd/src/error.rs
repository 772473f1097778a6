//! Error types for the triton-evd crate.

/// Error type for all fallible operations in the triton-evd crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EvdError {
    /// Returned when the sample is empty.
    #[error("sample is empty")]
    EmptySample,

    /// Returned when the sample contains NaN or infinite values.
    #[error("sample contains non-finite values")]
    NonFiniteSample,

    /// Returned when the sample has no usable spread or no usable values.
    #[error("degenerate sample: {reason}")]
    DegenerateSample {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the slices of a paired fit differ in length.
    #[error("length mismatch: x has {x_len} elements, y has {y_len}")]
    LengthMismatch {
        /// Length of the abscissa slice.
        x_len: usize,
        /// Length of the ordinate slice.
        y_len: usize,
    },

    /// Returned when the Nelder-Mead optimizer fails to produce parameters.
    #[error("optimization failed for the {family} fit")]
    OptimizationFailed {
        /// Distribution family being fitted.
        family: &'static str,
    },

    /// Returned when fitted or supplied parameters are outside the family's
    /// parameter space.
    #[error("invalid {family} parameters: {message}")]
    InvalidParams {
        /// Distribution family.
        family: &'static str,
        /// Description of the failure.
        message: String,
    },

    /// Returned when a statrs distribution cannot be constructed.
    ///
    /// The `message` field is a `String` because statrs errors do not
    /// implement `Clone`.
    #[error("weibull construction failed (shape={shape}, scale={scale}): {message}")]
    WeibullConstruction {
        /// Shape parameter that caused the failure.
        shape: f64,
        /// Scale parameter that caused the failure.
        scale: f64,
        /// Description of the failure.
        message: String,
    },
}
