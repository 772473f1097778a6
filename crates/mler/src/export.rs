//! Conditioned-wave time-series export.

use crate::coefficients::MlerCoefficients;
use crate::error::MlerError;
use crate::normalize::angular_frequencies;
use crate::simulation::SimulationGrid;

/// Wave height and linear response at the maximum-event position, indexed
/// by time.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MlerTimeSeries {
    time: Vec<f64>,
    wave_height: Vec<f64>,
    linear_response: Vec<f64>,
}

impl MlerTimeSeries {
    /// Time axis in seconds.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Wave surface elevation at the maximum-event position.
    pub fn wave_height(&self) -> &[f64] {
        &self.wave_height
    }

    /// Linear response reconstructed through the RAO.
    pub fn linear_response(&self) -> &[f64] {
        &self.linear_response
    }
}

/// Generates the wave-amplitude and linear-response time series at the
/// maximum-event position from MLER coefficients.
///
/// # Errors
///
/// Returns [`MlerError`] on an invalid grid or mismatched input lengths.
pub fn mler_export_time_series(
    rao: &[f64],
    mler: &MlerCoefficients,
    grid: &SimulationGrid,
    k: &[f64],
) -> Result<MlerTimeSeries, MlerError> {
    grid.validate()?;
    if mler.is_empty() {
        return Err(MlerError::EmptyInput);
    }
    if k.len() != mler.len() || rao.len() != mler.len() {
        return Err(MlerError::WavenumberMismatch {
            k_len: k.len(),
            coeff_len: mler.len(),
        });
    }

    let (freq, dw) = angular_frequencies(mler)?;
    let amplitudes: Vec<f64> = mler
        .spectrum()
        .iter()
        .map(|&s| (2.0 * s * dw).sqrt())
        .collect();

    let time = grid.time_axis();
    let mut wave_height = Vec::with_capacity(time.len());
    let mut linear_response = Vec::with_capacity(time.len());
    // At x = x0 the wavenumber term vanishes.
    for &t in &time {
        let mut wave = 0.0;
        let mut response = 0.0;
        for i in 0..mler.len() {
            let travel = freq[i] * (t - grid.t0());
            wave += amplitudes[i] * (travel + mler.phase()[i]).cos();
            response += amplitudes[i] * rao[i].abs() * travel.cos();
        }
        wave_height.push(wave);
        linear_response.push(response);
    }

    Ok(MlerTimeSeries {
        time,
        wave_height,
        linear_response,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::mler_coefficients;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn sample() -> (Vec<f64>, MlerCoefficients, Vec<f64>) {
        let freq_hz: Vec<f64> = (0..30).map(|i| 0.05 + i as f64 * 0.01).collect();
        let spectrum: Vec<f64> = freq_hz
            .iter()
            .map(|&f| (-((f - 0.2) / 0.05).powi(2)).exp())
            .collect();
        let rao = vec![1.0; 30];
        let mler = mler_coefficients(&rao, &freq_hz, &spectrum, 2.0).unwrap();
        let k: Vec<f64> = freq_hz
            .iter()
            .map(|&f| (2.0 * PI * f).powi(2) / 9.81)
            .collect();
        (rao, mler, k)
    }

    #[test]
    fn series_lengths_match_time_axis() {
        let (rao, mler, k) = sample();
        let grid = SimulationGrid::new().with_time(-30.0, 30.0, 0.5);
        let ts = mler_export_time_series(&rao, &mler, &grid, &k).unwrap();

        assert_eq!(ts.time().len(), 121);
        assert_eq!(ts.wave_height().len(), 121);
        assert_eq!(ts.linear_response().len(), 121);
    }

    #[test]
    fn response_peaks_at_maximum_event_time() {
        // With a positive RAO all response components cos(0) = 1 at t0, so
        // the linear response is maximal there.
        let (rao, mler, k) = sample();
        let grid = SimulationGrid::new().with_time(-30.0, 30.0, 0.5);
        let ts = mler_export_time_series(&rao, &mler, &grid, &k).unwrap();

        let t0_idx = ts
            .time()
            .iter()
            .position(|&t| (t - grid.t0()).abs() < 1e-9)
            .unwrap();
        let max = ts
            .linear_response()
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(ts.linear_response()[t0_idx], max, epsilon = 1e-12);
    }

    #[test]
    fn rejects_mismatched_rao() {
        let (_, mler, k) = sample();
        let grid = SimulationGrid::new();
        assert!(matches!(
            mler_export_time_series(&[1.0, 2.0], &mler, &grid, &k),
            Err(MlerError::WavenumberMismatch { .. })
        ));
    }
}
