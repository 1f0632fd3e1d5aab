//! Annotated heatmap of the pairwise Spearman matrix, drawn directly in
//! pixel space.

use super::font::ResolvedFont;
use super::labels;
use super::palette::{coolwarm, text_color_on};
use crate::analysis::MATRIX_SIZE;
use crate::model::Factor;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::error::Error;
use std::path::Path;

const GRID_LEFT: i32 = 180;
const GRID_TOP: i32 = 40;
const CELL: i32 = 112;
const BAR_GAP: i32 = 50;
const BAR_WIDTH: i32 = 30;
const BAR_STEPS: i32 = 200;
const UNDEFINED_CELL: RGBColor = RGBColor(255, 255, 255);

/// Row and column names: the score, then each factor
pub fn matrix_labels(font: &ResolvedFont) -> Vec<&'static str> {
    std::iter::once(labels::score_short_label(font.locale))
        .chain(Factor::ALL.iter().map(|&f| labels::factor_short_label(f, font.locale)))
        .collect()
}

pub fn render_heatmap(
    path: &Path,
    size: (u32, u32),
    matrix: &[[f64; MATRIX_SIZE]; MATRIX_SIZE],
    font: &ResolvedFont,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let names = matrix_labels(font);
    let grid = CELL * MATRIX_SIZE as i32;
    let text = |size: i32| (font.family, size).into_font().color(&BLACK);

    for (row, values) in matrix.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            let x0 = GRID_LEFT + col as i32 * CELL;
            let y0 = GRID_TOP + row as i32 * CELL;
            let fill = if value.is_nan() { UNDEFINED_CELL } else { coolwarm(value) };

            root.draw(&Rectangle::new([(x0, y0), (x0 + CELL, y0 + CELL)], fill.filled()))?;
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + CELL, y0 + CELL)],
                WHITE.stroke_width(1),
            ))?;

            if !value.is_nan() {
                let style = (font.family, 18)
                    .into_font()
                    .color(&text_color_on(&fill))
                    .pos(Pos::new(HPos::Center, VPos::Center));
                root.draw(&Text::new(
                    format!("{:.2}", value),
                    (x0 + CELL / 2, y0 + CELL / 2),
                    style,
                ))?;
            }
        }
    }

    // Row names to the left, column names underneath
    let row_style = text(16).pos(Pos::new(HPos::Right, VPos::Center));
    let col_style = text(16).pos(Pos::new(HPos::Center, VPos::Top));
    for (idx, name) in names.iter().enumerate() {
        let mid = idx as i32 * CELL + CELL / 2;
        root.draw(&Text::new(name.to_string(), (GRID_LEFT - 10, GRID_TOP + mid), row_style.clone()))?;
        root.draw(&Text::new(name.to_string(), (GRID_LEFT + mid, GRID_TOP + grid + 10), col_style.clone()))?;
    }

    // Colour bar from +1 at the top to -1 at the bottom
    let bar_left = GRID_LEFT + grid + BAR_GAP;
    for step in 0..BAR_STEPS {
        let y0 = GRID_TOP + step * grid / BAR_STEPS;
        let y1 = GRID_TOP + (step + 1) * grid / BAR_STEPS;
        let value = 1.0 - 2.0 * (step as f64 + 0.5) / BAR_STEPS as f64;
        root.draw(&Rectangle::new(
            [(bar_left, y0), (bar_left + BAR_WIDTH, y1)],
            coolwarm(value).filled(),
        ))?;
    }
    root.draw(&Rectangle::new(
        [(bar_left, GRID_TOP), (bar_left + BAR_WIDTH, GRID_TOP + grid)],
        BLACK.stroke_width(1),
    ))?;

    let tick_style = text(14).pos(Pos::new(HPos::Left, VPos::Center));
    for tick in [-1.0f64, -0.5, 0.0, 0.5, 1.0] {
        let y = GRID_TOP + ((1.0 - tick) / 2.0 * grid as f64).round() as i32;
        root.draw(&PathElement::new(
            vec![(bar_left + BAR_WIDTH, y), (bar_left + BAR_WIDTH + 5, y)],
            BLACK.stroke_width(1),
        ))?;
        root.draw(&Text::new(
            format!("{:.1}", tick),
            (bar_left + BAR_WIDTH + 8, y),
            tick_style.clone(),
        ))?;
    }

    let bar_title = text(16)
        .transform(FontTransform::Rotate90)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(
        labels::colorbar_label(font.locale).to_string(),
        (bar_left + BAR_WIDTH + 70, GRID_TOP + grid / 2),
        bar_title,
    ))?;

    root.present()?;
    Ok(())
}
