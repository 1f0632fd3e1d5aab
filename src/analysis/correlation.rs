//! Spearman correlation between the dislike score and each factor.

use crate::model::{EncodedRecord, Factor};
use crate::stats::{spearman, Correlation};

/// Significance band of a p-value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    /// p < 0.001
    VeryHigh,
    /// p < 0.01
    High,
    /// p < 0.05
    Marginal,
    NotSignificant,
}

impl Significance {
    pub fn from_p(p: f64) -> Self {
        if p < 0.001 {
            Significance::VeryHigh
        } else if p < 0.01 {
            Significance::High
        } else if p < 0.05 {
            Significance::Marginal
        } else {
            Significance::NotSignificant
        }
    }

    pub fn stars(&self) -> &'static str {
        match self {
            Significance::VeryHigh => "***",
            Significance::High => "**",
            Significance::Marginal => "*",
            Significance::NotSignificant => "n.s.",
        }
    }
}

/// Conventional magnitude band of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
    Negligible,
}

impl CorrelationStrength {
    /// `None` when r is undefined
    pub fn from_r(r: f64) -> Option<Self> {
        if r.is_nan() {
            return None;
        }
        let r = r.abs();
        Some(if r > 0.5 {
            CorrelationStrength::Strong
        } else if r > 0.3 {
            CorrelationStrength::Moderate
        } else if r > 0.1 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::Negligible
        })
    }

    pub fn japanese(&self) -> &'static str {
        match self {
            CorrelationStrength::Strong => "強い相関",
            CorrelationStrength::Moderate => "中程度の相関",
            CorrelationStrength::Weak => "弱い相関",
            CorrelationStrength::Negligible => "ほぼ相関なし",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorCorrelation {
    pub factor: Factor,
    pub correlation: Correlation,
    pub significance: Significance,
}

/// Respondents that have a dislike score
pub fn scored_sample_size(records: &[EncodedRecord]) -> usize {
    records.iter().filter(|r| r.dislike_score.is_some()).count()
}

/// Score and factor values for rows where both are present
pub fn score_pairs(records: &[EncodedRecord], factor: Factor) -> (Vec<f64>, Vec<f64>) {
    records
        .iter()
        .filter_map(|r| Some((r.dislike_score?, r.factor_value(factor)?)))
        .unzip()
}

/// Correlate the score with every factor. Factors with no complete pair
/// are left out.
pub fn correlate_factors(records: &[EncodedRecord]) -> Vec<FactorCorrelation> {
    Factor::ALL
        .iter()
        .filter_map(|&factor| {
            let (scores, values) = score_pairs(records, factor);
            if scores.is_empty() {
                log::debug!("No complete pairs for {}, skipping", factor);
                return None;
            }

            let correlation = spearman(&scores, &values);
            Some(FactorCorrelation {
                factor,
                correlation,
                significance: Significance::from_p(correlation.p_value),
            })
        })
        .collect()
}

/// Variables of the correlation matrix: the score followed by every factor
pub const MATRIX_SIZE: usize = 1 + Factor::ALL.len();

fn matrix_value(record: &EncodedRecord, idx: usize) -> Option<f64> {
    match idx {
        0 => record.dislike_score,
        i => record.factor_value(Factor::ALL[i - 1]),
    }
}

/// Pairwise Spearman matrix over the score and the five factors. Each cell
/// uses the rows where both of its variables are present.
pub fn correlation_matrix(records: &[EncodedRecord]) -> [[f64; MATRIX_SIZE]; MATRIX_SIZE] {
    let mut matrix = [[f64::NAN; MATRIX_SIZE]; MATRIX_SIZE];

    for i in 0..MATRIX_SIZE {
        for j in i..MATRIX_SIZE {
            let (x, y): (Vec<f64>, Vec<f64>) = records
                .iter()
                .filter_map(|r| Some((matrix_value(r, i)?, matrix_value(r, j)?)))
                .unzip();

            let r = if x.len() < 2 { f64::NAN } else { spearman(&x, &y).r };
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    matrix
}
