//! Long-term extreme distribution over a full set of sea states.

use crate::distribution::ResponseDistribution;
use crate::error::ExtremeError;

/// Builds the long-term extreme distribution of a response using the full
/// sea state approach: a weighted mixture of the short-term extreme
/// distributions, with weights normalized to sum to 1.
///
/// # Errors
///
/// Returns [`ExtremeError`] when the inputs are empty, the counts differ,
/// or the weights are negative, non-finite, or sum to zero.
pub fn full_seastate_long_term_extreme(
    ste: Vec<ResponseDistribution>,
    weights: &[f64],
) -> Result<ResponseDistribution, ExtremeError> {
    if ste.is_empty() {
        return Err(ExtremeError::EmptyData);
    }
    if ste.len() != weights.len() {
        return Err(ExtremeError::WeightsMismatch {
            members: ste.len(),
            weights: weights.len(),
        });
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ExtremeError::InvalidWeights {
            reason: "weights must be finite and non-negative".to_string(),
        });
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(ExtremeError::InvalidWeights {
            reason: "weights must not sum to zero".to_string(),
        });
    }

    Ok(ResponseDistribution::LongTermMixture {
        members: ste,
        weights: weights.iter().map(|w| w / total).collect(),
    })
}
