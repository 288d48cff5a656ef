//! Regression coefficient bar chart.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::{BitMapBackend, ChartBuilder, IntoDrawingArea, Rectangle};
use plotters::style::{BLUE, Color, WHITE};
use tracing::debug;

use svy_model::OlsSummary;

/// Y-axis range covering zero and every coefficient, with headroom so no
/// bar touches the frame.
fn value_range(values: &[f64]) -> (f64, f64) {
    let mut min = 0.0f64;
    let mut max = 0.0f64;
    for &value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.1;
    (min - pad, max + pad)
}

/// Render one labeled bar per fitted term (intercept included) as a PNG.
pub fn render_coefficient_chart(summary: &OlsSummary, path: &Path) -> Result<()> {
    let coefficients = summary.coefficients();
    let names: Vec<String> = coefficients.iter().map(|(name, _)| name.clone()).collect();
    let values: Vec<f64> = coefficients.iter().map(|(_, value)| *value).collect();
    let (y_min, y_max) = value_range(&values);

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("fill chart canvas: {}", path.display()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Regression Coefficients for Predicting {}",
                summary.dependent.replace('_', " ")
            ),
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..values.len() as f64, y_min..y_max)
        .context("build coefficient chart")?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(values.len() + 1)
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            names
                .get(idx as usize)
                .cloned()
                .unwrap_or_default()
        })
        .x_desc("Variable")
        .y_desc("Coefficient")
        .draw()
        .context("draw coefficient mesh")?;

    for (idx, &value) in values.iter().enumerate() {
        let left = idx as f64 + 0.15;
        let right = idx as f64 + 0.85;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(left, 0.0), (right, value)],
                BLUE.filled(),
            )))
            .with_context(|| format!("draw bar for {}", names[idx]))?;
    }

    root.present()
        .with_context(|| format!("write chart: {}", path.display()))?;
    debug!(path = %path.display(), bars = values.len(), "coefficient chart rendered");
    Ok(())
}
