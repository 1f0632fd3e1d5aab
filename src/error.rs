use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("no columns to parse from the input")]
    EmptyInput,

    #[error("row {row}: expected at most {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("required column not found: {0}")]
    MissingColumn(String),

    #[error("column appears more than once after renaming: {0}")]
    DuplicateColumn(String),

    #[error("regression error: {0}")]
    Regression(String),

    #[error("plot error: {0}")]
    Plot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SurveyError>;
