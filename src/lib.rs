//! Extreme-response statistics for marine and hydrokinetic devices.
//!
//! Triton estimates extreme-value statistics for time-series responses of
//! wave-energy converters and similar devices under environmental loading:
//! mooring tensions, platform motions, structural loads.
//!
//! # Pipeline
//!
//! 1. **Peaks** — extract global peaks between zero up-crossings
//!    (`triton_peaks::global_peaks`), decorrelate storm peaks, and tune the
//!    peaks-over-threshold percentile (`triton_peaks::automatic_threshold`)
//! 2. **Fit** — estimate a peaks or block-maxima distribution with one of
//!    five methods (`triton_extreme::Method`)
//! 3. **Short-term extreme** — distribution of the largest response in a
//!    short-term period (`triton_extreme::short_term_extreme`)
//! 4. **Long-term extreme** — weighted mixture across sea states
//!    (`triton_extreme::full_seastate_long_term_extreme`)
//! 5. **Return values** — invert the quantile function at a
//!    return-period exceedance probability
//!    (`triton_extreme::return_year_value`)
//!
//! The `triton_mler` crate computes Most Likely Extreme Response wave
//! profiles conditioned on a target response amplitude.

pub use triton_evd::{
    EvdError, GenParetoParams, GevParams, GumbelParams, WeibullParams, fit_genpareto, fit_gev,
    fit_gumbel, fit_weibull, ppcc,
};
pub use triton_extreme::{
    ExtremeError, Method, ResponseDistribution, TailFit, block_maxima,
    full_seastate_long_term_extreme, number_of_short_term_peaks, peaks_over_threshold,
    peaks_weibull, peaks_weibull_tail_fit, return_year_value, short_term_extreme, ste_gev,
    ste_gumbel, ste_peaks,
};
pub use triton_mler::{
    MlerCoefficients, MlerError, MlerTimeSeries, SimulationGrid, mler_coefficients,
    mler_export_time_series, mler_wave_amp_normalize,
};
pub use triton_peaks::{
    PeaksError, ThresholdConfig, ThresholdSearch, automatic_threshold, global_peaks,
    independent_storm_peaks, upcrossing,
};

pub use triton_stats as stats;
