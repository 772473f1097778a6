//! Wave-amplitude renormalization of MLER coefficients.

use std::f64::consts::PI;

use crate::coefficients::MlerCoefficients;
use crate::error::MlerError;
use crate::simulation::SimulationGrid;

/// Renormalizes MLER coefficients so the conditioned wave reaches a target
/// peak amplitude (peak to mean sea level).
///
/// Evaluates the conditioned wave over the full time/space grid, finds its
/// maximum absolute amplitude, and rescales the spectral coefficients by
/// the squared amplitude ratio. Phases are unchanged.
///
/// # Errors
///
/// Returns [`MlerError`] on an invalid grid, a wavenumber slice that does
/// not match the coefficients, a non-finite target amplitude, or a
/// conditioned wave with zero amplitude everywhere.
pub fn mler_wave_amp_normalize(
    wave_amp: f64,
    mler: &MlerCoefficients,
    grid: &SimulationGrid,
    k: &[f64],
) -> Result<MlerCoefficients, MlerError> {
    grid.validate()?;
    if mler.is_empty() {
        return Err(MlerError::EmptyInput);
    }
    if k.len() != mler.len() {
        return Err(MlerError::WavenumberMismatch {
            k_len: k.len(),
            coeff_len: mler.len(),
        });
    }
    if !wave_amp.is_finite() {
        return Err(MlerError::InvalidAmplitude { value: wave_amp });
    }

    let (freq, dw) = angular_frequencies(mler)?;
    let amplitudes: Vec<f64> = mler
        .spectrum()
        .iter()
        .map(|&s| (2.0 * s * dw).sqrt())
        .collect();

    let mut max_amp = 0.0_f64;
    for &x in &grid.space_axis() {
        for &t in &grid.time_axis() {
            let mut wave = 0.0;
            for i in 0..mler.len() {
                wave += amplitudes[i]
                    * (freq[i] * (t - grid.t0()) - k[i] * (x - grid.x0()) + mler.phase()[i])
                        .cos();
            }
            max_amp = max_amp.max(wave.abs());
        }
    }
    if max_amp == 0.0 {
        return Err(MlerError::ZeroAmplitude);
    }

    let rescale = wave_amp.abs() / max_amp;
    let spectrum: Vec<f64> = mler
        .spectrum()
        .iter()
        .map(|&s| s * rescale * rescale)
        .collect();

    Ok(MlerCoefficients::new(
        mler.freq_hz().to_vec(),
        spectrum,
        mler.phase().to_vec(),
    ))
}

/// Angular frequencies of the coefficient set and their even spacing
/// `(max - min)/(n - 1)`.
pub(crate) fn angular_frequencies(mler: &MlerCoefficients) -> Result<(Vec<f64>, f64), MlerError> {
    let n = mler.len();
    if n < 2 {
        return Err(MlerError::TooFewFrequencies { len: n });
    }
    let freq: Vec<f64> = mler.freq_hz().iter().map(|&f| f * 2.0 * PI).collect();
    let min = freq.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = freq.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let dw = (max - min) / (n - 1) as f64;
    Ok((freq, dw))
}
