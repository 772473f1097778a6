//! Peak extraction, storm independence, and threshold selection for the
//! Triton extreme-response pipeline.
//!
//! # Architecture
//!
//! ```text
//! automatic_threshold()
//!   ├─ independent_storm_peaks()   (independence.rs, per candidate fraction)
//!   │    ├─ percentile_hazen()     (triton-stats, unit threshold)
//!   │    ├─ global_peaks()         (extract.rs, exceedance storm peaks)
//!   │    └─ autocorrelation()      (triton-stats, decorrelation window)
//!   ├─ fit_genpareto()             (triton-evd, per exceedance set)
//!   └─ ppcc()                      (triton-evd, goodness-of-fit score)
//! ```
//!
//! [`global_peaks`] is also consumed directly by the short-term extreme
//! estimators: every peak-based method starts from the maxima between zero
//! up-crossings of the response.

mod error;
mod extract;
mod independence;
mod threshold;

pub use error::PeaksError;
pub use extract::{global_peaks, upcrossing};
pub use independence::independent_storm_peaks;
pub use threshold::{ThresholdConfig, ThresholdSearch, automatic_threshold};
