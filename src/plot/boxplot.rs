//! Box plots of the dislike score grouped by a factor's categories.

use super::font::ResolvedFont;
use super::labels;
use super::palette::viridis_palette;
use crate::model::{EncodedRecord, Factor, Frequency, Gender, ResidenceArea};
use crate::stats::quantile_sorted;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;

const BOX_HALF_WIDTH: f64 = 0.4;
const CAP_HALF_WIDTH: f64 = 0.2;

/// Five-number summary with Tukey whiskers
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value at or above q1 - 1.5 IQR
    pub lower_whisker: f64,
    /// Largest value at or below q3 + 1.5 IQR
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside: Vec<f64> = sorted
            .iter()
            .copied()
            .filter(|v| *v >= low_fence && *v <= high_fence)
            .collect();
        let lower_whisker = inside.first().copied().unwrap_or(q1);
        let upper_whisker = inside.last().copied().unwrap_or(q3);
        let outliers = sorted
            .into_iter()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(BoxStats {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

/// Position of a record's answer among the factor's categories
fn category_index(record: &EncodedRecord, factor: Factor) -> Option<usize> {
    let frequency = |f: Option<Frequency>| f.and_then(|f| Frequency::ALL.iter().position(|&x| x == f));
    match factor {
        Factor::NatureContact => frequency(record.nature_contact),
        Factor::ReadingHabit => frequency(record.reading_habit),
        Factor::InsectBookReading => frequency(record.insect_book_reading),
        Factor::Gender => record
            .gender
            .and_then(|g| Gender::ALL.iter().position(|&x| x == g)),
        Factor::ResidenceArea => record
            .residence_area
            .and_then(|a| ResidenceArea::ALL.iter().position(|&x| x == a)),
    }
}

/// Scores split by category, in plot order
pub fn group_scores(records: &[EncodedRecord], factor: Factor, categories: usize) -> Vec<Vec<f64>> {
    let mut groups = vec![Vec::new(); categories];
    for record in records {
        if let (Some(score), Some(idx)) = (record.dislike_score, category_index(record, factor)) {
            groups[idx].push(score);
        }
    }
    groups
}

/// y range covering every score with a little headroom
fn score_range(groups: &[Vec<f64>]) -> (f64, f64) {
    let (lo, hi) = groups
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(1.0);
    (lo - pad, hi + pad)
}

pub fn render_boxplot(
    path: &Path,
    size: (u32, u32),
    factor: Factor,
    records: &[EncodedRecord],
    font: &ResolvedFont,
) -> Result<(), Box<dyn Error>> {
    let categories = labels::category_labels(factor, font.locale);
    let groups = group_scores(records, factor, categories.len());
    let colors = viridis_palette(categories.len());
    let (y_min, y_max) = score_range(&groups);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(categories.len() as f64 - 0.5), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(categories.len())
        .x_label_formatter(&|_| String::new())
        .y_desc(labels::score_label(font.locale))
        .x_desc(labels::factor_axis_label(factor, font.locale))
        .label_style((font.family, 16))
        .axis_desc_style((font.family, 18))
        .draw()?;

    for (idx, (scores, color)) in groups.iter().zip(colors.iter()).enumerate() {
        let Some(stats) = BoxStats::from_values(scores) else {
            continue;
        };
        let x = idx as f64;
        let (left, right) = (x - BOX_HALF_WIDTH, x + BOX_HALF_WIDTH);

        chart.draw_series(std::iter::once(Rectangle::new(
            [(left, stats.q1), (right, stats.q3)],
            color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(left, stats.q1), (right, stats.q3)],
            BLACK.stroke_width(1),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(left, stats.median), (right, stats.median)],
            BLACK.stroke_width(2),
        )))?;

        for (end, cap) in [(stats.q1, stats.lower_whisker), (stats.q3, stats.upper_whisker)] {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x, end), (x, cap)],
                BLACK.stroke_width(1),
            )))?;
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x - CAP_HALF_WIDTH, cap), (x + CAP_HALF_WIDTH, cap)],
                BLACK.stroke_width(1),
            )))?;
        }

        chart.draw_series(
            stats
                .outliers
                .iter()
                .map(|&v| Circle::new((x, v), 4, BLACK.stroke_width(1))),
        )?;
    }

    // Category names under each box
    let label_style = (font.family, 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (idx, name) in categories.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(idx as f64, y_min));
        root.draw(&Text::new(name.to_string(), (px, py + 8), label_style.clone()))?;
    }

    root.present()?;
    Ok(())
}
