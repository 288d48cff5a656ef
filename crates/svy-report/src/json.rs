//! Machine-readable export of a completed analysis run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use svy_model::{CorrelationSet, OlsSummary};

/// Everything a downstream consumer needs from one run: the numeric
/// results plus the row accounting that explains what was silently a
/// missing value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisExport {
    pub dataset: String,
    pub rows_read: usize,
    pub rows_analyzed: usize,
    pub rows_dropped: usize,
    pub correlations: CorrelationSet,
    pub regression: OlsSummary,
}

/// Write `analysis.json` under `output_dir`, creating the directory if
/// needed. Returns the written path.
pub fn write_analysis_json(output_dir: &Path, export: &AnalysisExport) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let path = output_dir.join("analysis.json");
    let json = serde_json::to_string_pretty(export).context("serialize analysis export")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), "analysis export written");
    Ok(path)
}
