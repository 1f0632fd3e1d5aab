use super::distribution::t_two_sided_p;

/// A correlation coefficient with its two-sided p-value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub r: f64,
    pub p_value: f64,
    pub n: usize,
}

/// 1-based ranks; tied values share the average of their ranks
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() && values[order[j]] == values[order[i]] {
            j += 1;
        }

        // positions i..j (0-based) share ranks i+1..=j
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = avg_rank;
        }
        i = j;
    }

    ranks
}

/// Pearson product-moment correlation. `None` for mismatched or empty
/// input, or when either side has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (mut num, mut denom_x, mut denom_y) = (0.0, 0.0, 0.0);
    for (&xx, &yy) in x.iter().zip(y.iter()) {
        let dx = xx - mean_x;
        let dy = yy - mean_y;
        num += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    let denom = denom_x.sqrt() * denom_y.sqrt();
    if denom == 0.0 {
        return None;
    }

    Some((num / denom).clamp(-1.0, 1.0))
}

/// Spearman rank correlation with a t-distribution p-value (n - 2 df).
///
/// r is NaN when either input is constant; the p-value is NaN when r is
/// undefined or fewer than three pairs are given.
pub fn spearman(x: &[f64], y: &[f64]) -> Correlation {
    let n = x.len().min(y.len());
    let r = pearson(&average_ranks(&x[..n]), &average_ranks(&y[..n])).unwrap_or(f64::NAN);

    let p_value = if r.is_nan() || n < 3 {
        f64::NAN
    } else {
        let df = (n - 2) as f64;
        let denom = (1.0 - r) * (1.0 + r);
        if denom <= 0.0 {
            0.0
        } else {
            t_two_sided_p(r * (df / denom).sqrt(), df)
        }
    };

    Correlation { r, p_value, n }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_ranks_with_ties() {
        assert_eq!(average_ranks(&[3.0, 1.0, 4.0, 1.0, 5.0]), vec![3.0, 1.5, 4.0, 1.5, 5.0]);
        assert_eq!(average_ranks(&[2.0, 2.0, 2.0]), vec![2.0, 2.0, 2.0]);
        assert!(average_ranks(&[]).is_empty());
    }

    #[test]
    fn test_pearson() {
        let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&[1.0, 1.0], &[1.0, 2.0]), None);
        assert_eq!(pearson(&[], &[]), None);
    }

    #[test]
    fn test_spearman_monotonic() {
        let c = spearman(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((c.r - 1.0).abs() < 1e-12);
        assert!(c.p_value < 1e-6);
        assert_eq!(c.n, 5);
    }

    #[test]
    fn test_spearman_nonlinear_monotonic() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y: Vec<f64> = x.iter().map(|v: &f64| v.powi(3)).collect();
        let c = spearman(&x, &y);
        assert!((c.r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_spearman_known_values() {
        let c = spearman(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0, 6.0, 7.0, 8.0, 7.0]);
        assert!((c.r - 0.820_782_681_668_123_3).abs() < 1e-12);
        assert!((c.p_value - 0.088_587_005_313_543_87).abs() < 1e-9);

        let c = spearman(
            &[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0],
            &[2.0, 7.0, 1.0, 8.0, 2.0, 8.0, 1.0, 8.0],
        );
        assert!((c.r - 0.198_853_681_209_924_64).abs() < 1e-12);
        assert!((c.p_value - 0.636_861_783_325_328_8).abs() < 1e-9);
    }

    #[test]
    fn test_spearman_constant_input() {
        let c = spearman(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]);
        assert!(c.r.is_nan());
        assert!(c.p_value.is_nan());
    }

    #[test]
    fn test_spearman_two_points() {
        let c = spearman(&[1.0, 2.0], &[1.0, 2.0]);
        assert!((c.r - 1.0).abs() < 1e-12);
        assert!(c.p_value.is_nan());
    }
}
