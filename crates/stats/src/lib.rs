//! Statistical helper functions for the Triton extreme-response toolkit.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Population standard deviation with N denominator.
/// Returns 0.0 if empty.
pub fn sd_population(data: &[f64]) -> f64 {
    let n = data.len();
    if n == 0 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    (data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / nf).sqrt()
}

/// Percentile with the Hazen (midpoint) interpolation convention.
///
/// For a sorted sample of size `n`, percentile `p` maps to 0-indexed
/// position `(p/100)*n - 0.5`, linearly interpolated between adjacent order
/// statistics and clamped to the extreme order statistics. The input does
/// not need to be sorted.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn percentile_hazen(data: &[f64], p: f64) -> f64 {
    assert!(
        !data.is_empty(),
        "percentile_hazen: input must not be empty"
    );
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let h = (p / 100.0) * n as f64 - 0.5;
    if h <= 0.0 {
        return sorted[0];
    }
    if h >= (n - 1) as f64 {
        return sorted[n - 1];
    }
    let lo = h.floor() as usize;
    let hi = lo + 1;
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Pearson correlation coefficient.
///
/// Filters to indices where both `x[i]` and `y[i]` are finite.
/// Returns `None` if fewer than 3 finite pairs or if the denominator is zero
/// (constant input).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 3 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denom = (sum_xx * sum_yy).sqrt();
    if denom == 0.0 {
        return None;
    }

    Some(sum_xy / denom)
}

/// Mean-removed autocorrelation, normalized by the lag-0 value.
///
/// Returns one coefficient per lag `0..=max_lag`. The lag-0 entry is 1.0
/// for any series with nonzero spread. Lags at or beyond the series length,
/// and all lags of a zero-spread series, are 0.0.
pub fn autocorrelation(data: &[f64], max_lag: usize) -> Vec<f64> {
    let n = data.len();
    let mut acf = vec![0.0; max_lag + 1];
    if n == 0 {
        return acf;
    }

    let mean: f64 = data.iter().sum::<f64>() / n as f64;
    let c0: f64 = data.iter().map(|&x| (x - mean) * (x - mean)).sum();
    if c0 == 0.0 {
        return acf;
    }

    for (lag, r) in acf.iter_mut().enumerate() {
        if lag >= n {
            break;
        }
        let mut c = 0.0;
        for t in 0..(n - lag) {
            c += (data[t] - mean) * (data[t + lag] - mean);
        }
        *r = c / c0;
    }
    acf
}

/// Trapezoidal spectral moment `∫ f^n S(f) df`.
///
/// `freq` must be strictly increasing and the slices equal length.
///
/// # Panics
///
/// Panics if the slices differ in length or have fewer than 2 elements.
pub fn frequency_moment(freq: &[f64], spectrum: &[f64], n: i32) -> f64 {
    assert_eq!(
        freq.len(),
        spectrum.len(),
        "frequency_moment: freq and spectrum must be equal length"
    );
    assert!(
        freq.len() >= 2,
        "frequency_moment: need at least 2 samples"
    );

    let integrand: Vec<f64> = freq
        .iter()
        .zip(spectrum.iter())
        .map(|(&f, &s)| f.powi(n) * s)
        .collect();

    let mut moment = 0.0;
    for i in 1..freq.len() {
        moment += 0.5 * (integrand[i] + integrand[i - 1]) * (freq[i] - freq[i - 1]);
    }
    moment
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_sd_population() {
        // N denominator: [2, 4]: mean=3, var=1, sd=1
        assert_relative_eq!(sd_population(&[2.0, 4.0]), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_variance_basic() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance(&data), 4.571429, epsilon = 1e-4);
    }

    #[test]
    fn test_variance_short() {
        assert_eq!(variance(&[]), 0.0);
        assert_eq!(variance(&[5.0]), 0.0);
    }

    #[test]
    fn test_percentile_hazen_median() {
        // n=4, p=50: h = 2 - 0.5 = 1.5 -> midpoint of 2nd and 3rd order stats
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(percentile_hazen(&data, 50.0), 2.5, epsilon = 1e-10);
    }

    #[test]
    fn test_percentile_hazen_interior() {
        // n=10, p=90: h = 9 - 0.5 = 8.5 -> (9 + 10)/2
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert_relative_eq!(percentile_hazen(&data, 90.0), 9.5, epsilon = 1e-10);
    }

    #[test]
    fn test_percentile_hazen_clamps() {
        let data = [3.0, 1.0, 2.0];
        assert_relative_eq!(percentile_hazen(&data, 0.0), 1.0, epsilon = 1e-10);
        assert_relative_eq!(percentile_hazen(&data, 100.0), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_percentile_hazen_unsorted_input() {
        let data = [9.0, 1.0, 5.0, 3.0, 7.0];
        // n=5, p=50: h = 2.5 - 0.5 = 2 -> 3rd order stat = 5
        assert_relative_eq!(percentile_hazen(&data, 50.0), 5.0, epsilon = 1e-10);
    }

    #[test]
    #[should_panic(expected = "percentile_hazen: input must not be empty")]
    fn test_percentile_hazen_empty_panics() {
        percentile_hazen(&[], 50.0);
    }

    #[test]
    fn test_pearson_correlation_perfect() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        let r = pearson_correlation(&x, &y);
        assert_relative_eq!(r.unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pearson_correlation_insufficient() {
        let x = [1.0, 2.0];
        let y = [3.0, 4.0];
        assert!(pearson_correlation(&x, &y).is_none());
    }

    #[test]
    fn test_pearson_correlation_with_nan() {
        let x = [1.0, f64::NAN, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, f64::NAN, 8.0, 10.0];
        // Finite pairs: (1,2), (4,8), (5,10) -- 3 pairs, perfect linear
        let r = pearson_correlation(&x, &y);
        assert_relative_eq!(r.unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_autocorrelation_lag0() {
        let data = [1.0, 3.0, 2.0, 5.0, 4.0];
        let acf = autocorrelation(&data, 2);
        assert_eq!(acf.len(), 3);
        assert_relative_eq!(acf[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_autocorrelation_alternating() {
        let data: Vec<f64> = (0..100)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        let acf = autocorrelation(&data, 1);
        assert!(
            acf[1] < -0.9,
            "expected strong negative lag-1 ACF, got {}",
            acf[1]
        );
    }

    #[test]
    fn test_autocorrelation_smooth_series() {
        // Slowly varying series stays above 0.5 at lag 1.
        let data: Vec<f64> = (0..200).map(|i| (i as f64 * 0.05).sin()).collect();
        let acf = autocorrelation(&data, 10);
        assert!(acf[1] > 0.9, "lag-1 ACF = {}", acf[1]);
    }

    #[test]
    fn test_autocorrelation_constant() {
        let acf = autocorrelation(&[5.0; 20], 3);
        assert_eq!(acf, vec![0.0; 4]);
    }

    #[test]
    fn test_autocorrelation_lag_beyond_length() {
        let acf = autocorrelation(&[1.0, 2.0, 3.0], 5);
        assert_eq!(acf.len(), 6);
        assert_eq!(acf[4], 0.0);
        assert_eq!(acf[5], 0.0);
    }

    #[test]
    fn test_frequency_moment_zeroth() {
        // Flat spectrum S=2 over f in [0, 1]: m0 = 2
        let freq: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
        let spectrum = vec![2.0; 11];
        assert_relative_eq!(frequency_moment(&freq, &spectrum, 0), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_frequency_moment_first() {
        // S=1 over [0, 2]: m1 = ∫ f df = 2
        let freq: Vec<f64> = (0..=20).map(|i| i as f64 / 10.0).collect();
        let spectrum = vec![1.0; 21];
        assert_relative_eq!(frequency_moment(&freq, &spectrum, 1), 2.0, epsilon = 1e-10);
    }

    #[test]
    #[should_panic(expected = "frequency_moment: freq and spectrum must be equal length")]
    fn test_frequency_moment_length_mismatch_panics() {
        frequency_moment(&[0.0, 1.0], &[1.0], 0);
    }
}
