//! Probability-plot correlation coefficient.

/// Filliben order-statistic medians for a sample of size `n`.
///
/// `m_n = 0.5^(1/n)`, `m_1 = 1 - m_n`, and
/// `m_i = (i - 0.3175) / (n + 0.365)` for the interior ranks (1-indexed).
pub fn filliben_medians(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0.5];
    }
    let last = 0.5_f64.powf(1.0 / n as f64);
    let mut medians = Vec::with_capacity(n);
    medians.push(1.0 - last);
    for i in 2..n {
        medians.push((i as f64 - 0.3175) / (n as f64 + 0.365));
    }
    medians.push(last);
    medians
}

/// Probability-plot correlation coefficient.
///
/// Pearson correlation between the sorted sample and the candidate
/// distribution's quantiles at the Filliben order-statistic medians. Values
/// near 1 indicate a good fit. Returns `None` for samples with fewer than 3
/// points, constant samples, or quantile functions that produce fewer than
/// 3 finite values.
pub fn ppcc(sample: &[f64], ppf: impl Fn(f64) -> f64) -> Option<f64> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let theoretical: Vec<f64> = filliben_medians(sorted.len())
        .into_iter()
        .map(ppf)
        .collect();

    triton_stats::pearson_correlation(&theoretical, &sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use rand::SeedableRng;

    use crate::genpareto::GenParetoParams;

    #[test]
    fn filliben_medians_small_n() {
        let m = filliben_medians(3);
        assert_eq!(m.len(), 3);
        let last = 0.5_f64.powf(1.0 / 3.0);
        assert_relative_eq!(m[2], last, epsilon = 1e-12);
        assert_relative_eq!(m[0], 1.0 - last, epsilon = 1e-12);
        assert_relative_eq!(m[1], (2.0 - 0.3175) / 3.365, epsilon = 1e-12);
    }

    #[test]
    fn filliben_medians_monotone() {
        let m = filliben_medians(100);
        for w in m.windows(2) {
            assert!(w[0] < w[1]);
        }
        assert!(m[0] > 0.0 && m[99] < 1.0);
    }

    #[test]
    fn filliben_medians_degenerate_sizes() {
        assert!(filliben_medians(0).is_empty());
        assert_eq!(filliben_medians(1), vec![0.5]);
    }

    #[test]
    fn ppcc_high_for_matching_distribution() {
        let truth = GenParetoParams::new(0.1, 2.0).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let sample: Vec<f64> = (0..500)
            .map(|_| truth.ppf(rng.random::<f64>()))
            .collect();

        let r = ppcc(&sample, |q| truth.ppf(q)).unwrap();
        assert!(r > 0.99, "expected near-perfect correlation, got {r}");
    }

    #[test]
    fn ppcc_lower_for_mismatched_distribution() {
        let truth = GenParetoParams::new(0.4, 2.0).unwrap();
        let wrong = GenParetoParams::new(-0.4, 0.5).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(4);
        let sample: Vec<f64> = (0..500)
            .map(|_| truth.ppf(rng.random::<f64>()))
            .collect();

        let r_true = ppcc(&sample, |q| truth.ppf(q)).unwrap();
        let r_wrong = ppcc(&sample, |q| wrong.ppf(q)).unwrap();
        assert!(
            r_true > r_wrong,
            "matching fit should score higher: {r_true} vs {r_wrong}"
        );
    }

    #[test]
    fn ppcc_insufficient_sample() {
        assert!(ppcc(&[1.0, 2.0], |q| q).is_none());
    }
}
