pub mod correlation;
pub mod regression;
pub mod report;

pub use correlation::{
    correlate_factors, correlation_matrix, score_pairs, scored_sample_size, CorrelationStrength,
    FactorCorrelation, Significance, MATRIX_SIZE,
};
pub use regression::{complete_cases, fit_standardized, RegressionSummary};
pub use report::{format_correlation_report, write_correlation_report, REPORT_FILE_NAME};
