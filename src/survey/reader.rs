use crate::error::{Result, SurveyError};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Survey responses exactly as they appear in the CSV file
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text at the given row and column, `None` when the row is short
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

/// Read a survey CSV file (UTF-8, optional BOM)
pub fn read_survey_file(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(SurveyError::InputNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes)?;
    read_survey(&content)
}

/// Read survey responses from CSV content
pub fn read_survey(content: &str) -> Result<RawTable> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(SurveyError::EmptyInput);
    }
    let width = headers.len();

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;

        if record.len() > width {
            return Err(SurveyError::MalformedRow {
                row: idx + 1,
                expected: width,
                found: record.len(),
            });
        }

        // Short rows are padded so every row spans the header
        let mut padded = record;
        while padded.len() < width {
            padded.push_field("");
        }
        rows.push(padded);
    }

    log::debug!("Read {} rows with {} columns", rows.len(), width);

    Ok(RawTable { headers, rows })
}
