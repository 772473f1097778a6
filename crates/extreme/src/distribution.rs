//! The closed set of response-distribution kinds and their evaluators.

use triton_evd::{GenParetoParams, GevParams, GumbelParams, WeibullParams};

/// A fitted distribution over a scalar response, as a closed tagged set.
///
/// The parametric variants carry their fitted parameters directly; the
/// derived variants reference their parent distribution(s) plus auxiliary
/// scalars. Values are immutable once constructed and are consumed by
/// evaluating [`cdf`](ResponseDistribution::cdf) and
/// [`ppf`](ResponseDistribution::ppf).
#[derive(Debug, Clone, serde::Serialize)]
pub enum ResponseDistribution {
    /// Two-parameter Weibull peaks distribution.
    Weibull(WeibullParams),
    /// Generalized extreme value block-maxima distribution.
    Gev(GevParams),
    /// Right-skewed Gumbel block-maxima distribution.
    Gumbel(GumbelParams),
    /// Peaks-over-threshold distribution: a generalized Pareto over the
    /// exceedances, spliced into the peak distribution above `threshold`.
    ///
    /// The CDF is undefined (NaN) below the threshold and
    /// `1 - exceedance_fraction * (1 - pot.cdf(x - threshold))` above it.
    PeaksOverThreshold {
        /// Generalized Pareto over exceedances (location 0).
        pot: GenParetoParams,
        /// Threshold in response units.
        threshold: f64,
        /// Fraction of peaks above the threshold (`n_exceed / n_total`).
        exceedance_fraction: f64,
    },
    /// Distribution of the largest of `n_peaks` independent peaks:
    /// `CDF(x) = peaks.cdf(x)^n_peaks`, with NaN parent values treated
    /// as 0 before exponentiation.
    ShortTermExtreme {
        /// Parent peaks distribution.
        peaks: Box<ResponseDistribution>,
        /// Number of peaks in the short-term period (need not be integer).
        n_peaks: f64,
    },
    /// Weighted mixture across sea states: `CDF(x) = sum_i w_i * F_i(x)`.
    /// Weights are normalized to sum to 1 at construction.
    LongTermMixture {
        /// Short-term extreme distribution per sea state.
        members: Vec<ResponseDistribution>,
        /// Normalized sea-state weights.
        weights: Vec<f64>,
    },
}

impl ResponseDistribution {
    /// Cumulative distribution function at `x`.
    ///
    /// NaN only for the region below a peaks-over-threshold's threshold,
    /// where that variant's CDF is undefined.
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            Self::Weibull(params) => params.cdf(x),
            Self::Gev(params) => params.cdf(x),
            Self::Gumbel(params) => params.cdf(x),
            Self::PeaksOverThreshold {
                pot,
                threshold,
                exceedance_fraction,
            } => {
                if x < *threshold {
                    f64::NAN
                } else {
                    1.0 - exceedance_fraction * (1.0 - pot.cdf(x - threshold))
                }
            }
            Self::ShortTermExtreme { peaks, n_peaks } => {
                let parent = peaks.cdf(x);
                let parent = if parent.is_nan() { 0.0 } else { parent };
                parent.powf(*n_peaks)
            }
            Self::LongTermMixture { members, weights } => members
                .iter()
                .zip(weights.iter())
                .map(|(member, w)| w * member.cdf(x))
                .sum(),
        }
    }

    /// Quantile function (inverse CDF) at non-exceedance probability `q`.
    ///
    /// Closed form for every variant except the long-term mixture, which is
    /// inverted by bisection bracketed by its members' quantiles. For a
    /// peaks-over-threshold distribution, quantiles below the exceedance
    /// region (`q < 1 - exceedance_fraction`) are NaN; a short-term extreme
    /// over such a parent floors those quantiles at the threshold instead,
    /// where its CDF jumps from 0.
    pub fn ppf(&self, q: f64) -> f64 {
        match self {
            Self::Weibull(params) => params.ppf(q),
            Self::Gev(params) => params.ppf(q),
            Self::Gumbel(params) => params.ppf(q),
            Self::PeaksOverThreshold {
                pot,
                threshold,
                exceedance_fraction,
            } => {
                if q < 1.0 - exceedance_fraction {
                    f64::NAN
                } else {
                    threshold + pot.ppf(1.0 - (1.0 - q) / exceedance_fraction)
                }
            }
            Self::ShortTermExtreme { peaks, n_peaks } => {
                let parent_q = q.powf(1.0 / n_peaks);
                match peaks.as_ref() {
                    Self::PeaksOverThreshold {
                        threshold,
                        exceedance_fraction,
                        ..
                    } if parent_q < 1.0 - exceedance_fraction => *threshold,
                    parent => parent.ppf(parent_q),
                }
            }
            Self::LongTermMixture { members, .. } => self.ppf_bisect(members, q),
        }
    }

    /// Bisection inverse of the mixture CDF.
    ///
    /// The mixture quantile at `q` always lies between the smallest and
    /// largest member quantile at `q`, which gives the initial bracket.
    fn ppf_bisect(&self, members: &[ResponseDistribution], q: f64) -> f64 {
        let member_quantiles: Vec<f64> = members
            .iter()
            .map(|m| m.ppf(q))
            .filter(|v| v.is_finite())
            .collect();
        if member_quantiles.is_empty() {
            return f64::NAN;
        }

        let mut lo = member_quantiles.iter().cloned().fold(f64::INFINITY, f64::min);
        let mut hi = member_quantiles
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            return lo;
        }

        for _ in 0..200 {
            let mid = 0.5 * (lo + hi);
            if self.cdf(mid) < q {
                lo = mid;
            } else {
                hi = mid;
            }
            if (hi - lo).abs() <= 1e-12 * hi.abs().max(1.0) {
                break;
            }
        }
        0.5 * (lo + hi)
    }
}
