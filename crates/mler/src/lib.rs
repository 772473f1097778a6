//! Most Likely Extreme Response (MLER) wave conditioning.
//!
//! Given a response amplitude operator and a sea-state spectrum, this crate
//! constructs the deterministic wave profile most likely to accompany a
//! target extreme response:
//!
//! 1. [`mler_coefficients`] — conditioned wave spectral amplitudes and
//!    phases from the response spectrum's moments
//! 2. [`mler_wave_amp_normalize`] — rescale the conditioned spectrum to a
//!    target peak wave amplitude over a [`SimulationGrid`]
//! 3. [`mler_export_time_series`] — wave height and linear response at the
//!    maximum-event position
//!
//! Spectral moments come from `triton_stats::frequency_moment`; the
//! wavenumber array is supplied by the caller (e.g. from the deep-water
//! dispersion relation).

mod coefficients;
mod error;
mod export;
mod normalize;
mod simulation;

pub use coefficients::{MlerCoefficients, mler_coefficients};
pub use error::MlerError;
pub use export::{MlerTimeSeries, mler_export_time_series};
pub use normalize::mler_wave_amp_normalize;
pub use simulation::SimulationGrid;
