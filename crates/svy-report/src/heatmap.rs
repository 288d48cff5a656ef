//! Correlation heatmap rendering.
//!
//! One row of annotated cells, one per correlation pair, colored on a
//! diverging scale fixed to [-1, 1] so hue is comparable across runs.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::{BitMapBackend, IntoDrawingArea, IntoFont, Rectangle, Text};
use plotters::style::{Color, RGBColor, ShapeStyle, WHITE};
use tracing::debug;

use svy_model::CorrelationSet;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 360;
const CELL_TOP: i32 = 80;
const CELL_BOTTOM: i32 = 230;
const MARGIN_X: i32 = 40;

// Diverging endpoints, deep blue through near-white to deep red.
const COOL: RGBColor = RGBColor(59, 76, 192);
const NEUTRAL: RGBColor = RGBColor(221, 221, 221);
const WARM: RGBColor = RGBColor(180, 4, 38);

/// Map a coefficient in [-1, 1] onto the diverging scale.
pub fn diverging_color(value: f64) -> RGBColor {
    let t = ((value.clamp(-1.0, 1.0)) + 1.0) / 2.0;
    let lerp = |from: u8, to: u8, amount: f64| -> u8 {
        (f64::from(from) + (f64::from(to) - f64::from(from)) * amount).round() as u8
    };
    if t < 0.5 {
        let amount = t * 2.0;
        RGBColor(
            lerp(COOL.0, NEUTRAL.0, amount),
            lerp(COOL.1, NEUTRAL.1, amount),
            lerp(COOL.2, NEUTRAL.2, amount),
        )
    } else {
        let amount = (t - 0.5) * 2.0;
        RGBColor(
            lerp(NEUTRAL.0, WARM.0, amount),
            lerp(NEUTRAL.1, WARM.1, amount),
            lerp(NEUTRAL.2, WARM.2, amount),
        )
    }
}

/// Render the correlation heatmap as a PNG at `path`.
pub fn render_correlation_heatmap(set: &CorrelationSet, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("fill heatmap canvas: {}", path.display()))?;

    root.draw(&Text::new(
        "Correlation Heatmap: Discrimination, Mental Health, Life Satisfaction, and Ethnic Identity",
        (MARGIN_X, 30),
        ("sans-serif", 20).into_font(),
    ))
    .context("draw heatmap title")?;

    let cells = set.entries.len().max(1) as i32;
    let cell_width = (WIDTH as i32 - 2 * MARGIN_X) / cells;
    for (idx, entry) in set.entries.iter().enumerate() {
        let idx = idx as i32;
        let left = MARGIN_X + idx * cell_width;
        let right = left + cell_width;
        let fill = diverging_color(entry.coefficient);
        root.draw(&Rectangle::new(
            [(left, CELL_TOP), (right, CELL_BOTTOM)],
            ShapeStyle::from(fill).filled(),
        ))
        .with_context(|| format!("draw heatmap cell for {}", entry.label))?;
        root.draw(&Rectangle::new(
            [(left, CELL_TOP), (right, CELL_BOTTOM)],
            ShapeStyle::from(RGBColor(90, 90, 90)),
        ))
        .context("draw heatmap cell border")?;

        // Annotation stays readable on saturated cells.
        let annotation_color = if entry.coefficient.abs() > 0.6 {
            WHITE.to_rgba()
        } else {
            RGBColor(20, 20, 20).to_rgba()
        };
        root.draw(&Text::new(
            format!("{:.2}", entry.coefficient),
            (left + cell_width / 2 - 18, (CELL_TOP + CELL_BOTTOM) / 2 - 10),
            ("sans-serif", 24).into_font().color(&annotation_color),
        ))
        .context("draw heatmap annotation")?;

        root.draw(&Text::new(
            entry.label.clone(),
            (left + 8, CELL_BOTTOM + 24),
            ("sans-serif", 15).into_font(),
        ))
        .context("draw heatmap label")?;
    }

    root.present()
        .with_context(|| format!("write heatmap: {}", path.display()))?;
    debug!(path = %path.display(), cells = set.entries.len(), "heatmap rendered");
    Ok(())
}
