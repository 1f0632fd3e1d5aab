//! PNG charts of the survey analysis.
//!
//! Every renderer writes one file with a fixed name into the output
//! directory, replacing any earlier run's file.

pub mod boxplot;
pub mod coefficients;
pub mod font;
pub mod heatmap;
pub mod labels;
pub mod palette;

pub use font::{resolve_font, FontStrategy, Locale, ResolvedFont};

use crate::analysis::{RegressionSummary, MATRIX_SIZE};
use crate::error::{Result, SurveyError};
use crate::model::{EncodedRecord, Factor};
use std::path::{Path, PathBuf};

pub const HEATMAP_FILE: &str = "2_heatmap_correlation.png";
pub const COEFFICIENTS_FILE: &str = "3_regression_coefficients.png";

const HEATMAP_SIZE: (u32, u32) = (1100, 900);
const COEFFICIENTS_SIZE: (u32, u32) = (1000, 600);

/// One of the per-factor box plots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxplotSpec {
    /// Figure number used in progress messages
    pub figure: &'static str,
    pub file_name: &'static str,
    pub factor: Factor,
    pub size: (u32, u32),
}

pub const BOXPLOTS: [BoxplotSpec; 5] = [
    BoxplotSpec {
        figure: "1-1",
        file_name: "1-1_boxplot_nature_vs_score.png",
        factor: Factor::NatureContact,
        size: (1000, 600),
    },
    BoxplotSpec {
        figure: "1-2",
        file_name: "1-2_boxplot_reading_vs_score.png",
        factor: Factor::ReadingHabit,
        size: (1000, 600),
    },
    BoxplotSpec {
        figure: "1-3",
        file_name: "1-3_boxplot_insect_book_vs_score.png",
        factor: Factor::InsectBookReading,
        size: (1000, 600),
    },
    BoxplotSpec {
        figure: "1-4",
        file_name: "1-4_boxplot_gender_vs_score.png",
        factor: Factor::Gender,
        size: (1000, 600),
    },
    BoxplotSpec {
        figure: "1-5",
        file_name: "1-5_boxplot_residence_vs_score.png",
        factor: Factor::ResidenceArea,
        size: (1200, 600),
    },
];

/// Names of every image the renderers produce
pub fn output_file_names() -> Vec<&'static str> {
    BOXPLOTS
        .iter()
        .map(|spec| spec.file_name)
        .chain([HEATMAP_FILE, COEFFICIENTS_FILE])
        .collect()
}

fn plot_err(file_name: &str, e: Box<dyn std::error::Error>) -> SurveyError {
    SurveyError::Plot(format!("{}: {}", file_name, e))
}

pub fn render_boxplot(
    output_dir: &Path,
    spec: &BoxplotSpec,
    records: &[EncodedRecord],
    font: &ResolvedFont,
) -> Result<PathBuf> {
    let path = output_dir.join(spec.file_name);
    boxplot::render_boxplot(&path, spec.size, spec.factor, records, font)
        .map_err(|e| plot_err(spec.file_name, e))?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

pub fn render_heatmap(
    output_dir: &Path,
    matrix: &[[f64; MATRIX_SIZE]; MATRIX_SIZE],
    font: &ResolvedFont,
) -> Result<PathBuf> {
    let path = output_dir.join(HEATMAP_FILE);
    heatmap::render_heatmap(&path, HEATMAP_SIZE, matrix, font)
        .map_err(|e| plot_err(HEATMAP_FILE, e))?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

pub fn render_coefficients(
    output_dir: &Path,
    summary: &RegressionSummary,
    font: &ResolvedFont,
) -> Result<PathBuf> {
    let path = output_dir.join(COEFFICIENTS_FILE);
    coefficients::render_coefficients(&path, COEFFICIENTS_SIZE, summary, font)
        .map_err(|e| plot_err(COEFFICIENTS_FILE, e))?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}
