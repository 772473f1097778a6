//! Short- and long-term extreme response distributions.
//!
//! This crate turns a response time-series into extreme-value statistics:
//!
//! 1. **Peaks distribution** — one of three estimators over the global
//!    peaks ([`peaks_weibull`], [`peaks_weibull_tail_fit`],
//!    [`peaks_over_threshold`]), or a block-maxima fit ([`ste_gev`],
//!    [`ste_gumbel`])
//! 2. **Short-term extreme** — the distribution of the largest of `n`
//!    peaks ([`ste_peaks`]), or the block-maxima distribution directly;
//!    [`short_term_extreme`] dispatches on [`Method`]
//! 3. **Long-term extreme** — a weighted mixture across sea states
//!    ([`full_seastate_long_term_extreme`])
//! 4. **Return values** — quantiles at return-period exceedance
//!    probabilities ([`return_year_value`])
//!
//! Every distribution is a [`ResponseDistribution`] value: a closed tagged
//! set evaluated by case dispatch, with quantiles in closed form where one
//! exists and by bisection for the mixture.

mod block;
mod distribution;
mod error;
mod estimators;
mod long_term;
mod return_value;
mod ste;

pub use block::{block_maxima, ste_gev, ste_gumbel};
pub use distribution::ResponseDistribution;
pub use error::ExtremeError;
pub use estimators::{TailFit, peaks_over_threshold, peaks_weibull, peaks_weibull_tail_fit};
pub use long_term::full_seastate_long_term_extreme;
pub use return_value::return_year_value;
pub use ste::{Method, number_of_short_term_peaks, short_term_extreme, ste_peaks};
