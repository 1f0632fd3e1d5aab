//! Standardized multiple regression of the dislike score on all factors.

use crate::error::{Result, SurveyError};
use crate::model::{EncodedRecord, Factor};
use crate::stats::{ols, sample_std, standardize};

/// Standardized coefficients of one regression fit
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionSummary {
    /// Rows left after listwise deletion
    pub n: usize,
    pub intercept: f64,
    pub coefficients: Vec<(Factor, f64)>,
    pub r_squared: f64,
}

impl RegressionSummary {
    /// A summary with every value undefined, used when the fit fails
    pub fn undefined(n: usize) -> Self {
        RegressionSummary {
            n,
            intercept: f64::NAN,
            coefficients: Factor::ALL.iter().map(|&f| (f, f64::NAN)).collect(),
            r_squared: f64::NAN,
        }
    }

    pub fn coefficient(&self, factor: Factor) -> Option<f64> {
        self.coefficients
            .iter()
            .find(|(f, _)| *f == factor)
            .map(|(_, c)| *c)
    }
}

/// Score and factor values of rows where nothing is missing
pub fn complete_cases(records: &[EncodedRecord]) -> (Vec<f64>, Vec<[f64; 5]>) {
    records
        .iter()
        .filter_map(|r| {
            let score = r.dislike_score?;
            let mut values = [0.0; 5];
            for (slot, factor) in values.iter_mut().zip(Factor::ALL) {
                *slot = r.factor_value(factor)?;
            }
            Some((score, values))
        })
        .unzip()
}

fn has_spread(values: &[f64]) -> bool {
    let sd = sample_std(values);
    sd.is_finite() && sd > 0.0
}

/// Fit `z(score) ~ 1 + z(factors)` on the complete cases, where `z` rescales
/// to zero mean and unit sample variance.
///
/// Only a variable without spread is an error. Collinear factors or a
/// sample smaller than the number of parameters give minimum-norm
/// coefficients.
pub fn fit_standardized(records: &[EncodedRecord]) -> Result<RegressionSummary> {
    let (scores, rows) = complete_cases(records);
    let n = scores.len();
    log::debug!("Regression on {} complete cases", n);

    if !has_spread(&scores) {
        return Err(SurveyError::Regression(
            "Insect_Dislike_Score has no variance".to_string(),
        ));
    }
    let y = standardize(&scores);

    let mut columns = Vec::with_capacity(Factor::ALL.len());
    for (idx, factor) in Factor::ALL.iter().enumerate() {
        let column: Vec<f64> = rows.iter().map(|r| r[idx]).collect();
        if !has_spread(&column) {
            return Err(SurveyError::Regression(format!("{} has no variance", factor)));
        }
        columns.push(standardize(&column));
    }

    let design: Vec<Vec<f64>> = (0..n)
        .map(|i| columns.iter().map(|c| c[i]).collect())
        .collect();
    let fit = ols(&design, &y)?;
    if fit.rank < Factor::ALL.len() + 1 {
        log::warn!(
            "Design matrix has rank {} of {}, coefficients are minimum-norm",
            fit.rank,
            Factor::ALL.len() + 1
        );
    }

    Ok(RegressionSummary {
        n,
        intercept: fit.intercept,
        coefficients: Factor::ALL.iter().copied().zip(fit.coefficients).collect(),
        r_squared: fit.r_squared,
    })
}
