pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator)
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Rescale to zero mean and unit sample variance. A constant column
/// yields NaN, as there is no spread to divide by.
pub fn standardize(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    let sd = sample_std(values);
    values
        .iter()
        .map(|v| if sd > 0.0 { (v - m) / sd } else { f64::NAN })
        .collect()
}

/// Quantile of already sorted data with linear interpolation between
/// closest ranks, q in [0, 1]
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
