use crate::error::{Result, SurveyError};
use nalgebra::{DMatrix, DVector, SVD};

/// Singular values below this fraction of the largest are treated as zero
const RANK_TOLERANCE: f64 = 1e-10;

/// Ordinary least squares fit with an intercept term
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    pub r_squared: f64,
    /// Numerical rank of the design matrix, intercept column included
    pub rank: usize,
}

/// Fit `y ~ 1 + x` where each entry of `rows` holds one observation's
/// predictor values.
///
/// The solution goes through the pseudo-inverse of the design matrix, so
/// collinear predictors or fewer observations than parameters still give
/// the minimum-norm coefficients.
pub fn ols(rows: &[Vec<f64>], y: &[f64]) -> Result<OlsFit> {
    if rows.len() != y.len() {
        return Err(SurveyError::Regression(format!(
            "{} predictor rows but {} outcomes",
            rows.len(),
            y.len()
        )));
    }
    if rows.is_empty() {
        return Err(SurveyError::Regression("no observations to fit".to_string()));
    }

    let k = rows[0].len();
    if rows.iter().any(|r| r.len() != k || r.iter().any(|v| !v.is_finite()))
        || y.iter().any(|v| !v.is_finite())
    {
        return Err(SurveyError::Regression(
            "inputs contain non-finite values".to_string(),
        ));
    }

    let n = rows.len();
    let design = DMatrix::from_fn(n, k + 1, |i, j| if j == 0 { 1.0 } else { rows[i][j - 1] });
    let target = DVector::from_column_slice(y);

    let svd = SVD::new(design.clone(), true, true);
    let eps = svd.singular_values.max() * RANK_TOLERANCE;
    let rank = svd.rank(eps);
    let beta = svd
        .solve(&target, eps)
        .map_err(|e| SurveyError::Regression(e.to_string()))?;

    let residuals = &target - &design * &beta;
    let ss_res = residuals.norm_squared();
    let y_mean = target.mean();
    let ss_tot = target.iter().map(|v| (v - y_mean).powi(2)).sum::<f64>();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { f64::NAN };

    Ok(OlsFit {
        intercept: beta[0],
        coefficients: beta.iter().skip(1).copied().collect(),
        r_squared,
        rank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_line() {
        let rows: Vec<Vec<f64>> = (0..5).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = (0..5).map(|i| 3.0 + 2.0 * i as f64).collect();
        let fit = ols(&rows, &y).unwrap();
        assert!((fit.intercept - 3.0).abs() < 1e-10);
        assert!((fit.coefficients[0] - 2.0).abs() < 1e-10);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert_eq!(fit.rank, 2);
    }

    #[test]
    fn test_two_predictors() {
        // y = 1 + 2a - b, exactly
        let rows = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![2.0, 3.0],
        ];
        let y: Vec<f64> = rows.iter().map(|r| 1.0 + 2.0 * r[0] - r[1]).collect();
        let fit = ols(&rows, &y).unwrap();
        assert!((fit.intercept - 1.0).abs() < 1e-10);
        assert!((fit.coefficients[0] - 2.0).abs() < 1e-10);
        assert!((fit.coefficients[1] + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_least_squares_residuals() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let y = vec![1.0, 3.0, 2.0, 4.0];
        let fit = ols(&rows, &y).unwrap();
        assert!((fit.coefficients[0] - 0.8).abs() < 1e-10);
        assert!((fit.intercept - 1.3).abs() < 1e-10);
        assert!(fit.r_squared > 0.0 && fit.r_squared < 1.0);
    }

    #[test]
    fn test_collinear_predictors_get_minimum_norm() {
        // y = x with the second predictor twice the first: any b1 + 2 b2 = 1
        // fits, the smallest is (0.2, 0.4)
        let rows: Vec<Vec<f64>> = (0..6).map(|i| vec![i as f64, 2.0 * i as f64]).collect();
        let y: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let fit = ols(&rows, &y).unwrap();
        assert_eq!(fit.rank, 2);
        assert!(fit.intercept.abs() < 1e-8);
        assert!((fit.coefficients[0] - 0.2).abs() < 1e-8);
        assert!((fit.coefficients[1] - 0.4).abs() < 1e-8);
        assert!((fit.r_squared - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_fewer_rows_than_parameters() {
        // one equation b0 + b1 + 2 b2 = 1, smallest solution (1, 1, 2) / 6
        let rows = vec![vec![1.0, 2.0]];
        let fit = ols(&rows, &[1.0]).unwrap();
        assert_eq!(fit.rank, 1);
        assert!((fit.intercept - 1.0 / 6.0).abs() < 1e-10);
        assert!((fit.coefficients[0] - 1.0 / 6.0).abs() < 1e-10);
        assert!((fit.coefficients[1] - 2.0 / 6.0).abs() < 1e-10);
        assert!(fit.r_squared.is_nan());
    }

    #[test]
    fn test_invalid_input() {
        let rows = vec![vec![1.0], vec![f64::NAN], vec![3.0]];
        assert!(ols(&rows, &[1.0, 2.0, 3.0]).is_err());
        assert!(ols(&[], &[]).is_err());
        assert!(ols(&[vec![1.0]], &[1.0, 2.0]).is_err());
    }
}
