//! Zero up-crossing detection and global-peak extraction.

use crate::error::PeaksError;

/// Indices where the series crosses zero upward.
///
/// An up-crossing occurs where the sign changes from non-positive to
/// positive; the returned index is the sample at or after the crossing.
pub fn upcrossing(data: &[f64]) -> Vec<usize> {
    let mut inds = Vec::new();
    for i in 1..data.len() {
        if data[i - 1] <= 0.0 && data[i] > 0.0 {
            inds.push(i);
        }
    }
    inds
}

/// Finds the global peaks of a zero-centered response time-series.
///
/// The global peaks are the maxima between consecutive zero up-crossings.
/// Index 0 starts the first interval and the final sample index closes the
/// last, so the tail segment is included even without a further
/// up-crossing. Each interval `[start, end)` contributes the first index of
/// its maximum value; intervals emptied by an up-crossing at the final
/// sample are skipped.
///
/// Returns the peak times and peak values.
///
/// # Errors
///
/// Returns [`PeaksError`] if the slices are empty or differ in length.
pub fn global_peaks(t: &[f64], data: &[f64]) -> Result<(Vec<f64>, Vec<f64>), PeaksError> {
    if t.is_empty() || data.is_empty() {
        return Err(PeaksError::EmptyData);
    }
    if t.len() != data.len() {
        return Err(PeaksError::LengthMismatch {
            t_len: t.len(),
            data_len: data.len(),
        });
    }

    let mut bounds = upcrossing(data);
    bounds.push(data.len() - 1);

    let mut peak_times = Vec::with_capacity(bounds.len());
    let mut peak_values = Vec::with_capacity(bounds.len());

    let mut start = 0usize;
    for &end in &bounds {
        if end > start {
            let peak = argmax(&data[start..end]) + start;
            peak_times.push(t[peak]);
            peak_values.push(data[peak]);
        }
        start = end;
    }

    Ok((peak_times, peak_values))
}

/// Index of the first maximum of a non-empty slice.
fn argmax(data: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in data.iter().enumerate().skip(1) {
        if v > data[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn upcrossing_simple() {
        // Crossings into positive territory at indices 2 and 6.
        let data = [-1.0, -0.5, 0.5, 1.0, -0.5, -1.0, 0.3, 0.8];
        assert_eq!(upcrossing(&data), vec![2, 6]);
    }

    #[test]
    fn upcrossing_zero_counts_as_non_positive() {
        let data = [0.0, 1.0, 0.0, 2.0];
        assert_eq!(upcrossing(&data), vec![1, 3]);
    }

    #[test]
    fn upcrossing_none() {
        assert_eq!(upcrossing(&[1.0, 2.0, 3.0]), Vec::<usize>::new());
        assert_eq!(upcrossing(&[-1.0, -2.0, -3.0]), Vec::<usize>::new());
    }

    #[test]
    fn global_peaks_sine_wave() {
        // 5 full periods sampled finely: 5 (or 6, boundary-dependent) peaks,
        // each equal to the amplitude within tolerance.
        let amplitude = 2.5;
        let periods = 5;
        let n = 10_000;
        let t: Vec<f64> = (0..n).map(|i| i as f64 / n as f64).collect();
        let data: Vec<f64> = t
            .iter()
            .map(|&ti| amplitude * (2.0 * std::f64::consts::PI * periods as f64 * ti).sin())
            .collect();

        let (peak_times, peak_values) = global_peaks(&t, &data).unwrap();
        assert!(
            peak_values.len() == periods || peak_values.len() == periods + 1,
            "expected {periods} or {} peaks, got {}",
            periods + 1,
            peak_values.len()
        );
        // Exactly one crest per period at the amplitude; a boundary segment
        // may contribute one extra sub-amplitude peak.
        let crests = peak_values
            .iter()
            .filter(|&&v| (v - amplitude).abs() < amplitude * 1e-4)
            .count();
        assert_eq!(crests, periods);
        assert_eq!(peak_times.len(), peak_values.len());
        assert_relative_eq!(
            peak_values.iter().cloned().fold(f64::MIN, f64::max),
            amplitude,
            epsilon = amplitude * 1e-4
        );
    }

    #[test]
    fn global_peaks_counts_boundary_segment() {
        // One up-crossing at index 2; intervals [0,2) and [2,4).
        let t = [0.0, 1.0, 2.0, 3.0, 4.0];
        let data = [-1.0, -3.0, 2.0, 5.0, 1.0];
        let (peak_times, peak_values) = global_peaks(&t, &data).unwrap();
        assert_eq!(peak_values, vec![-1.0, 5.0]);
        assert_eq!(peak_times, vec![0.0, 3.0]);
    }

    #[test]
    fn global_peaks_no_upcrossing_returns_single_peak() {
        let t = [0.0, 1.0, 2.0, 3.0];
        let data = [1.0, 4.0, 3.0, 2.0];
        let (_, peak_values) = global_peaks(&t, &data).unwrap();
        assert_eq!(peak_values, vec![4.0]);
    }

    #[test]
    fn global_peaks_first_max_on_ties() {
        let t = [0.0, 1.0, 2.0, 3.0];
        let data = [-1.0, 3.0, 3.0, 0.5];
        let (peak_times, peak_values) = global_peaks(&t, &data).unwrap();
        // Tie at indices 1 and 2; the first wins.
        assert_eq!(peak_values, vec![-1.0, 3.0]);
        assert_eq!(peak_times[1], 1.0);
    }

    #[test]
    fn global_peaks_empty_errors() {
        assert!(matches!(
            global_peaks(&[], &[]),
            Err(PeaksError::EmptyData)
        ));
    }

    #[test]
    fn global_peaks_length_mismatch_errors() {
        assert!(matches!(
            global_peaks(&[0.0, 1.0], &[1.0]),
            Err(PeaksError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn global_peaks_upcrossing_at_final_sample() {
        // Up-crossing lands on the last index; the empty tail interval is
        // skipped rather than extracted.
        let t = [0.0, 1.0, 2.0];
        let data = [2.0, -1.0, 1.0];
        let (_, peak_values) = global_peaks(&t, &data).unwrap();
        assert_eq!(peak_values, vec![2.0]);
    }
}
