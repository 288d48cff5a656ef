#![deny(unsafe_code)]

pub mod coefficients;
pub mod heatmap;
pub mod json;

pub use coefficients::render_coefficient_chart;
pub use heatmap::{diverging_color, render_correlation_heatmap};
pub use json::{AnalysisExport, write_analysis_json};
