use super::font::ResolvedFont;
use super::labels;
use crate::analysis::RegressionSummary;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;

const BAR_HALF_HEIGHT: f64 = 0.35;

/// Blue for negative coefficients, red otherwise
pub fn bar_color(coefficient: f64) -> RGBColor {
    if coefficient < 0.0 {
        BLUE
    } else {
        RED
    }
}

/// Symmetric x extent large enough for every defined coefficient
fn coefficient_extent(summary: &RegressionSummary) -> f64 {
    let max_abs = summary
        .coefficients
        .iter()
        .map(|(_, c)| c.abs())
        .filter(|c| c.is_finite())
        .fold(0.0f64, f64::max);
    if max_abs > 0.0 {
        max_abs * 1.15
    } else {
        1.0
    }
}

/// Horizontal bars of the standardized coefficients; the first factor sits
/// at the bottom
pub fn render_coefficients(
    path: &Path,
    size: (u32, u32),
    summary: &RegressionSummary,
    font: &ResolvedFont,
) -> Result<(), Box<dyn Error>> {
    let extent = coefficient_extent(summary);
    let rows = summary.coefficients.len();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(170)
        .build_cartesian_2d(-extent..extent, -0.5f64..(rows as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(rows)
        .y_label_formatter(&|_| String::new())
        .x_desc(labels::coefficient_axis_label(font.locale))
        .label_style((font.family, 16))
        .axis_desc_style((font.family, 18))
        .draw()?;

    for (idx, &(_, coefficient)) in summary.coefficients.iter().enumerate() {
        if !coefficient.is_finite() {
            log::debug!("Coefficient {} is undefined, no bar drawn", idx);
            continue;
        }
        let y = idx as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(0.0, y - BAR_HALF_HEIGHT), (coefficient, y + BAR_HALF_HEIGHT)],
            bar_color(coefficient).filled(),
        )))?;
    }

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, -0.5), (0.0, rows as f64 - 0.5)],
        BLACK.stroke_width(1),
    )))?;

    let name_style = (font.family, 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (idx, &(factor, _)) in summary.coefficients.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(-extent, idx as f64));
        root.draw(&Text::new(
            labels::factor_short_label(factor, font.locale).to_string(),
            (px - 8, py),
            name_style.clone(),
        ))?;
    }

    root.present()?;
    Ok(())
}
