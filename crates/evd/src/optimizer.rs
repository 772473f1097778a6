//! Nelder-Mead minimization for maximum-likelihood and least-squares fits.
//!
//! Wraps the `argmin` crate to minimize a scalar cost over a small number of
//! unconstrained parameters. Positive parameters are log-transformed by the
//! callers so the search space stays unconstrained.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;

use crate::error::EvdError;

/// Per-sample penalty applied when a likelihood term is non-finite
/// (observation outside the candidate support). Keeps the cost finite so
/// the simplex can move away from infeasible parameters instead of
/// stalling on an all-infinite cost surface.
pub(crate) const OUT_OF_SUPPORT_PENALTY: f64 = 1e10;

struct ScalarCost<F: Fn(&[f64]) -> f64> {
    f: F,
}

impl<F: Fn(&[f64]) -> f64> CostFunction for ScalarCost<F> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let value = (self.f)(params);
        if value.is_finite() {
            Ok(value)
        } else {
            Ok(f64::MAX)
        }
    }
}

/// Minimizes `cost` starting from `seed`.
///
/// The initial simplex is the seed plus one vertex per dimension offset by
/// `step` along that axis. Returns the best parameter vector found.
pub(crate) fn minimize(
    cost: impl Fn(&[f64]) -> f64,
    seed: &[f64],
    step: f64,
    family: &'static str,
) -> Result<Vec<f64>, EvdError> {
    let dim = seed.len();
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
    simplex.push(seed.to_vec());
    for i in 0..dim {
        let mut vertex = seed.to_vec();
        vertex[i] += step;
        simplex.push(vertex);
    }

    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(1e-8)
        .map_err(|_| EvdError::OptimizationFailed { family })?;
    let result = Executor::new(ScalarCost { f: cost }, solver)
        .configure(|state| state.max_iters(1000))
        .run()
        .map_err(|_| EvdError::OptimizationFailed { family })?;

    result
        .state()
        .best_param
        .clone()
        .ok_or(EvdError::OptimizationFailed { family })
}

/// Sums negative log-likelihood terms, mapping each non-finite term to
/// [`OUT_OF_SUPPORT_PENALTY`].
pub(crate) fn penalized_nll(terms: impl Iterator<Item = f64>) -> f64 {
    terms
        .map(|ln_pdf| {
            if ln_pdf.is_finite() {
                -ln_pdf
            } else {
                OUT_OF_SUPPORT_PENALTY
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn minimize_quadratic() {
        // (a - 2)^2 + (b + 1)^2, minimum at (2, -1)
        let cost = |p: &[f64]| (p[0] - 2.0).powi(2) + (p[1] + 1.0).powi(2);
        let best = minimize(cost, &[0.0, 0.0], 0.1, "test").unwrap();
        assert_relative_eq!(best[0], 2.0, epsilon = 1e-4);
        assert_relative_eq!(best[1], -1.0, epsilon = 1e-4);
    }

    #[test]
    fn minimize_with_infinite_region() {
        // Cost is infinite left of the origin; minimum at 1.
        let cost = |p: &[f64]| {
            if p[0] <= 0.0 {
                f64::INFINITY
            } else {
                (p[0] - 1.0).powi(2)
            }
        };
        let best = minimize(cost, &[0.5], 0.1, "test").unwrap();
        assert_relative_eq!(best[0], 1.0, epsilon = 1e-4);
    }

    #[test]
    fn penalized_nll_maps_non_finite() {
        let nll = penalized_nll([-1.0, f64::NEG_INFINITY, -2.0].into_iter());
        assert_relative_eq!(
            nll,
            3.0 + OUT_OF_SUPPORT_PENALTY,
            epsilon = 1e-6
        );
    }
}
