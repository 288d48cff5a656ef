use std::path::PathBuf;

use svy_model::{CorrelationSet, OlsSummary};

use crate::pipeline::RecodeReport;

#[derive(Debug)]
pub struct AnalysisRunResult {
    pub dataset: PathBuf,
    pub output_dir: PathBuf,
    pub rows_read: usize,
    pub rows_analyzed: usize,
    pub rows_dropped: usize,
    pub recode_reports: Vec<RecodeReport>,
    pub correlations: CorrelationSet,
    pub regression: OlsSummary,
    pub heatmap: Option<PathBuf>,
    pub coefficients_chart: Option<PathBuf>,
    pub json_export: Option<PathBuf>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
