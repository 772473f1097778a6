//! Conditioned-wave spectral coefficients.
//!
//! Computes the Most Likely Extreme Response spectrum: the wave spectrum
//! conditioned on the response reaching a target amplitude, following the
//! formulation of Quon et al. (2016).

use std::f64::consts::PI;

use crate::error::MlerError;

/// Conditioned wave spectral amplitude and phase per frequency.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MlerCoefficients {
    freq_hz: Vec<f64>,
    spectrum: Vec<f64>,
    phase: Vec<f64>,
}

impl MlerCoefficients {
    pub(crate) fn new(freq_hz: Vec<f64>, spectrum: Vec<f64>, phase: Vec<f64>) -> Self {
        Self {
            freq_hz,
            spectrum,
            phase,
        }
    }

    /// Frequencies in Hz.
    pub fn freq_hz(&self) -> &[f64] {
        &self.freq_hz
    }

    /// Conditioned wave spectral amplitude coefficients.
    pub fn spectrum(&self) -> &[f64] {
        &self.spectrum
    }

    /// Phase per frequency in radians.
    pub fn phase(&self) -> &[f64] {
        &self.phase
    }

    /// Number of frequencies.
    pub fn len(&self) -> usize {
        self.freq_hz.len()
    }

    /// True when no frequencies are present.
    pub fn is_empty(&self) -> bool {
        self.freq_hz.is_empty()
    }
}

/// Calculates MLER coefficients from a sea-state spectrum and a response
/// RAO.
///
/// * `rao` — response amplitude operator per frequency (signed real
///   amplitude).
/// * `freq_hz` — frequencies in Hz, strictly increasing.
/// * `spectrum` — wave spectral density per frequency in m^2/Hz.
/// * `response_desired` — target response amplitude; its units correspond
///   to the RAO's (motion or force).
///
/// The response spectrum `|RAO|^2 * 2S` supplies the spectral moments that
/// condition the wave; negative coefficient amplitudes are folded into a
/// pi phase shift, and a negative target response shifts every phase by
/// pi. Entries whose coefficients are not finite (degenerate moment
/// denominators) are zeroed.
///
/// # Errors
///
/// Returns [`MlerError`] on empty or mismatched inputs, fewer than 2
/// frequencies, or a non-finite target response.
pub fn mler_coefficients(
    rao: &[f64],
    freq_hz: &[f64],
    spectrum: &[f64],
    response_desired: f64,
) -> Result<MlerCoefficients, MlerError> {
    if rao.is_empty() || freq_hz.is_empty() || spectrum.is_empty() {
        return Err(MlerError::EmptyInput);
    }
    if rao.len() != freq_hz.len() || rao.len() != spectrum.len() {
        return Err(MlerError::LengthMismatch {
            rao_len: rao.len(),
            freq_len: freq_hz.len(),
            spectrum_len: spectrum.len(),
        });
    }
    if freq_hz.len() < 2 {
        return Err(MlerError::TooFewFrequencies { len: freq_hz.len() });
    }
    if !response_desired.is_finite() {
        return Err(MlerError::InvalidAmplitude {
            value: response_desired,
        });
    }

    let n = freq_hz.len();
    let freq: Vec<f64> = freq_hz.iter().map(|&f| f * 2.0 * PI).collect();
    let spectrum_rad: Vec<f64> = spectrum.iter().map(|&s| s / (2.0 * PI)).collect();
    let dw = 2.0 * PI / (n - 1) as f64;

    // Response spectrum |RAO|^2 * 2S and its moments.
    let spectrum_r: Vec<f64> = rao
        .iter()
        .zip(spectrum_rad.iter())
        .map(|(&r, &s)| r * r * 2.0 * s)
        .collect();
    let m0 = triton_stats::frequency_moment(&freq, &spectrum_r, 0);
    let m1 = triton_stats::frequency_moment(&freq, &spectrum_r, 1);
    let m2 = triton_stats::frequency_moment(&freq, &spectrum_r, 2);
    let wbar = m1 / m0;
    let denom = m0 * m2 - m1 * m1;

    // Conditioning coefficient per frequency.
    let mut coeff: Vec<f64> = (0..n)
        .map(|i| {
            rao[i].abs()
                * (2.0 * spectrum_rad[i] * dw).sqrt()
                * ((m2 - freq[i] * m1) + wbar * (freq[i] * m0 - m1))
                / denom
        })
        .collect();

    // Phase delay is positive in this convention.
    let angles: Vec<f64> = rao
        .iter()
        .map(|&r| if r < 0.0 { PI } else { 0.0 })
        .collect();
    let mut phase: Vec<f64> = unwrap_phase(&angles).iter().map(|&a| -a).collect();

    // Fold negative amplitudes into a pi phase shift.
    for i in 0..n {
        if coeff[i] < 0.0 {
            phase[i] -= PI;
            coeff[i] = -coeff[i];
        }
    }

    let mut conditioned: Vec<f64> = (0..n)
        .map(|i| spectrum_rad[i] * coeff[i] * coeff[i] * response_desired * response_desired)
        .collect();

    // Degenerate moment denominators produce non-finite entries; zero them.
    for i in 0..n {
        if !conditioned[i].is_finite() {
            conditioned[i] = 0.0;
        }
        if !phase[i].is_finite() {
            phase[i] = 0.0;
        }
    }

    // The sign of the target response is lost when squared above; restore
    // it as a phase shift.
    if response_desired < 0.0 {
        for p in phase.iter_mut() {
            *p += PI;
        }
    }

    Ok(MlerCoefficients::new(freq_hz.to_vec(), conditioned, phase))
}

/// Unwraps a phase sequence by correcting jumps strictly larger than pi.
fn unwrap_phase(angles: &[f64]) -> Vec<f64> {
    let mut out = angles.to_vec();
    let mut correction = 0.0;
    for i in 1..angles.len() {
        let diff = angles[i] - angles[i - 1];
        if diff > PI {
            correction -= 2.0 * PI;
        } else if diff < -PI {
            correction += 2.0 * PI;
        }
        out[i] = angles[i] + correction;
    }
    out
}
