//! Automatic threshold selection for the peaks-over-threshold method.
//!
//! Scans candidate percentile thresholds, scores each by the
//! probability-plot correlation of a generalized Pareto fit to the
//! independent storm exceedances, and refines the search range around the
//! best candidate until the step is exhausted.

use tracing::debug;

use triton_evd::{fit_genpareto, ppcc};

use crate::error::PeaksError;
use crate::independence::independent_storm_peaks;

/// Hours per year used to convert record length to years.
const HOURS_PER_YEAR: f64 = 365.25 * 24.0;

/// Configuration for [`automatic_threshold`].
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use triton_peaks::ThresholdConfig;
///
/// let config = ThresholdConfig::new()
///     .with_range(0.95, 0.99, 0.005)
///     .with_max_refinement(3);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdConfig {
    /// Initial threshold-fraction range as `(min, max, step)`; `max` is
    /// exclusive.
    range: (f64, f64, f64),
    /// Maximum number of refinement passes.
    max_refinement: usize,
}

impl ThresholdConfig {
    /// Creates the default configuration: range `(0.990, 0.995, 0.001)`,
    /// 5 refinement passes.
    pub fn new() -> Self {
        Self {
            range: (0.990, 0.995, 0.001),
            max_refinement: 5,
        }
    }

    /// Sets the initial threshold-fraction range (`max` exclusive).
    pub fn with_range(mut self, min: f64, max: f64, step: f64) -> Self {
        self.range = (min, max, step);
        self
    }

    /// Sets the maximum number of refinement passes.
    pub fn with_max_refinement(mut self, max_refinement: usize) -> Self {
        self.max_refinement = max_refinement;
        self
    }

    /// Returns the `(min, max, step)` range.
    pub fn range(&self) -> (f64, f64, f64) {
        self.range
    }

    /// Returns the maximum number of refinement passes.
    pub fn max_refinement(&self) -> usize {
        self.max_refinement
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), PeaksError> {
        let (min, max, step) = self.range;
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(PeaksError::InvalidConfig {
                reason: "threshold range must be finite".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) {
            return Err(PeaksError::InvalidConfig {
                reason: "threshold fractions must be in [0, 1]".to_string(),
            });
        }
        if min >= max {
            return Err(PeaksError::InvalidConfig {
                reason: "threshold range min must be below max".to_string(),
            });
        }
        if step <= 0.0 {
            return Err(PeaksError::InvalidConfig {
                reason: "threshold range step must be positive".to_string(),
            });
        }
        if self.max_refinement == 0 {
            return Err(PeaksError::InvalidConfig {
                reason: "max_refinement must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an automatic threshold search.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ThresholdSearch {
    /// Best threshold fraction in `[0, 1]`.
    pub fraction: f64,
    /// Threshold in response units: the Hazen percentile of the peak sample
    /// at `100 * fraction`.
    pub threshold: f64,
    /// Number of refinement passes actually run.
    pub refinements: usize,
}

/// Finds the threshold fraction that maximizes the goodness of fit of a
/// generalized Pareto distribution to the independent storm exceedances.
///
/// Each pass enumerates fractions across the current range, filters the
/// peaks to independent exceedances per fraction, and stops scanning higher
/// fractions once fewer than 2 independent extremes per year remain. A
/// generalized Pareto (location 0) is fitted to each exceedance set and
/// scored by the probability-plot correlation of the full peak sample
/// against it. The range is then recentred around the best candidate with a
/// 10x smaller step; the search stops early when the best fraction moves by
/// less than 0.0005.
///
/// # Errors
///
/// Returns [`PeaksError`] on invalid inputs or configuration, on fit
/// failures, and when a pass has no scoreable candidate
/// ([`PeaksError::InsufficientExtremes`] — the record is too short for the
/// requested thresholds).
pub fn automatic_threshold(
    peaks: &[f64],
    sampling_rate: f64,
    config: &ThresholdConfig,
) -> Result<ThresholdSearch, PeaksError> {
    config.validate()?;
    if peaks.is_empty() {
        return Err(PeaksError::EmptyData);
    }
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
        return Err(PeaksError::InvalidSamplingRate {
            value: sampling_rate,
        });
    }

    let (mut range_min, mut range_max, mut range_step) = config.range();
    let years = peaks.len() as f64 / (HOURS_PER_YEAR / sampling_rate);

    let mut best_fraction = -1.0;
    let mut refinements = 0;

    for pass in 0..config.max_refinement() {
        let fractions = arange(range_min, range_max, range_step);
        let mut correlations = Vec::with_capacity(fractions.len());

        for &fraction in &fractions {
            let exceedances = independent_storm_peaks(peaks, fraction, sampling_rate)?;
            let rate_per_year = exceedances.len() as f64 / years;
            if rate_per_year < 2.0 {
                // Too few independent extremes to fit reliably; higher
                // fractions only get sparser.
                break;
            }
            let pot = fit_genpareto(&exceedances)?;
            let correlation =
                ppcc(peaks, |q| pot.ppf(q)).ok_or(PeaksError::ScoreUnavailable)?;
            correlations.push(correlation);
        }

        if correlations.is_empty() {
            return Err(PeaksError::InsufficientExtremes {
                threshold: fractions[0],
            });
        }

        let best = argmax(&correlations);
        let minimal_change = (best_fraction - fractions[best]).abs() < 0.0005;
        best_fraction = fractions[best];
        refinements = pass + 1;
        debug!(
            pass,
            best_fraction,
            step = range_step,
            candidates = correlations.len(),
            "threshold refinement pass"
        );

        if minimal_change && pass < config.max_refinement() - 1 {
            break;
        }

        range_step /= 10.0;
        if best == fractions.len() - 1 {
            range_min = fractions[best.saturating_sub(1)];
            range_max = fractions[best] + 5.0 * range_step;
        } else if best == 0 {
            range_min = fractions[0] - 9.0 * range_step;
            range_max = fractions[1];
        } else {
            range_min = fractions[best - 1];
            range_max = fractions[best + 1];
        }
    }

    Ok(ThresholdSearch {
        fraction: best_fraction,
        threshold: triton_stats::percentile_hazen(peaks, 100.0 * best_fraction),
        refinements,
    })
}

/// Evenly spaced values `start + k*step` for `k < ceil((stop-start)/step)`;
/// `stop` is exclusive.
fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..n).map(|k| start + k as f64 * step).collect()
}

/// Index of the first maximum of a non-empty slice.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}
