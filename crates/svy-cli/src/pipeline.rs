//! Survey analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the survey CSV into an in-memory table
//! 2. **Recode**: Map Likert text answers to integer ordinal scales
//! 3. **Clean**: Keep complete rows across the four analysis variables
//! 4. **Analyze**: Pairwise Pearson correlations and the OLS model
//! 5. **Report**: Charts and the optional JSON export
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Stages 1-4 are fatal on error; stage 5 collects failures
//! without discarding the numeric results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};

use svy_ingest::{SurveyTable, build_column_profiles, read_survey_table};
use svy_model::{AnalysisVar, CorrelationSet, OlsSummary};
use svy_report::{
    AnalysisExport, render_coefficient_chart, render_correlation_heatmap, write_analysis_json,
};
use svy_stats::{correlation_pairs, fit_ols};
use svy_transform::{
    AnalysisColumn, CleanResult, build_analysis_frame, numeric_column, recode_column,
};

/// The fixed regression model: Mental_Health on Discrimination and
/// Ethnic_Identity (plus intercept).
pub const MODEL_RESPONSE: AnalysisVar = AnalysisVar::MentalHealth;
pub const MODEL_PREDICTORS: [AnalysisVar; 2] =
    [AnalysisVar::Discrimination, AnalysisVar::EthnicIdentity];

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestStage {
    pub table: SurveyTable,
    pub rows_read: usize,
}

/// Read the survey CSV and log a per-column profile.
pub fn ingest(dataset: &Path) -> Result<IngestStage> {
    let ingest_span = info_span!("ingest", dataset = %dataset.display());
    let _guard = ingest_span.enter();
    let start = Instant::now();

    let table = read_survey_table(dataset)
        .with_context(|| format!("load dataset {}", dataset.display()))?;
    let rows_read = table.height();

    for (column, profile) in build_column_profiles(&table) {
        debug!(
            column = %column,
            non_null_ratio = profile.non_null_ratio,
            numeric_ratio = profile.numeric_ratio,
            unique_ratio = profile.unique_ratio,
            "column profile"
        );
    }
    info!(
        rows = rows_read,
        columns = table.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestStage { table, rows_read })
}

// ============================================================================
// Stage 2: Recode
// ============================================================================

/// Per-variable accounting of one recode pass.
#[derive(Debug, Clone)]
pub struct RecodeReport {
    pub variable: String,
    pub scale: String,
    pub matched: usize,
    pub unmatched: usize,
    pub blank: usize,
}

/// Result of the recode stage: the four derived analysis columns in
/// canonical order, plus per-scale accounting.
#[derive(Debug)]
pub struct RecodeStage {
    pub columns: Vec<AnalysisColumn>,
    pub reports: Vec<RecodeReport>,
}

/// Derive the four analysis columns from the raw table.
///
/// The three Likert variables go through their fixed ordinal scales; the
/// discrimination score is parsed numerically. A missing source column is
/// fatal.
pub fn recode(table: &SurveyTable) -> Result<RecodeStage> {
    let recode_span = info_span!("recode");
    let _guard = recode_span.enter();
    let start = Instant::now();

    let mut columns = Vec::with_capacity(AnalysisVar::ALL.len());
    let mut reports = Vec::new();
    for var in AnalysisVar::ALL {
        match var.scale() {
            Some(scale) => {
                let recoded =
                    recode_column(table, var.source_column(), var.canonical_name(), &scale)
                        .with_context(|| format!("recode {}", var.canonical_name()))?;
                reports.push(RecodeReport {
                    variable: recoded.name.clone(),
                    scale: scale.name.clone(),
                    matched: recoded.matched,
                    unmatched: recoded.unmatched,
                    blank: recoded.blank,
                });
                columns.push(AnalysisColumn::new(recoded.name.clone(), recoded.f64_values()));
            }
            None => {
                let parsed = numeric_column(table, var.source_column(), var.canonical_name())
                    .with_context(|| format!("parse {}", var.canonical_name()))?;
                if parsed.non_numeric > 0 {
                    warn!(
                        variable = %parsed.name,
                        non_numeric = parsed.non_numeric,
                        "non-numeric cells treated as missing"
                    );
                }
                columns.push(AnalysisColumn::new(parsed.name.clone(), parsed.values));
            }
        }
    }
    info!(
        variables = columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "recode complete"
    );
    Ok(RecodeStage { columns, reports })
}

// ============================================================================
// Stage 3: Clean
// ============================================================================

/// Keep complete rows and assemble the analysis frame.
pub fn clean(columns: &[AnalysisColumn]) -> Result<CleanResult> {
    let clean_span = info_span!("clean");
    let _guard = clean_span.enter();
    let start = Instant::now();

    let result = build_analysis_frame(columns).context("build analysis frame")?;
    info!(
        rows_in = result.rows_in,
        rows_kept = result.rows_kept,
        rows_dropped = result.rows_dropped,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(result)
}

// ============================================================================
// Stage 4: Analyze
// ============================================================================

/// Result of the analysis stage: plain data, no rendering.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub correlations: CorrelationSet,
    pub regression: OlsSummary,
}

/// Compute the four correlation pairs and fit the fixed OLS model.
pub fn analyze(df: &DataFrame) -> Result<AnalysisResult> {
    let analyze_span = info_span!("analyze", rows = df.height());
    let _guard = analyze_span.enter();
    let start = Instant::now();

    let correlations = correlation_pairs(df).context("compute correlations")?;
    let predictors: Vec<&str> = MODEL_PREDICTORS
        .iter()
        .map(|var| var.canonical_name())
        .collect();
    let regression = fit_ols(df, MODEL_RESPONSE.canonical_name(), &predictors)
        .context("fit regression model")?;

    info!(
        pairs = correlations.len(),
        r_squared = regression.r_squared,
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(AnalysisResult {
        correlations,
        regression,
    })
}

// ============================================================================
// Stage 5: Report
// ============================================================================

/// Configuration for the report stage.
pub struct ReportConfig<'a> {
    pub output_dir: &'a Path,
    pub dataset: &'a Path,
    pub render_charts: bool,
    pub write_json: bool,
    pub rows_read: usize,
    pub rows_analyzed: usize,
    pub rows_dropped: usize,
    pub analysis: &'a AnalysisResult,
}

/// Result of the report stage.
#[derive(Debug, Default)]
pub struct ReportStage {
    pub heatmap: Option<PathBuf>,
    pub coefficients_chart: Option<PathBuf>,
    pub json_export: Option<PathBuf>,
    /// Non-fatal failures; numeric results are unaffected.
    pub errors: Vec<String>,
}

/// Render charts and write the JSON export.
///
/// Failures here are collected, not propagated: by the time this stage
/// runs, the numeric results already exist and will be printed.
pub fn report(config: &ReportConfig<'_>) -> ReportStage {
    let report_span = info_span!("report", output_dir = %config.output_dir.display());
    let _guard = report_span.enter();
    let start = Instant::now();

    let mut stage = ReportStage::default();

    if config.render_charts {
        if let Err(error) = std::fs::create_dir_all(config.output_dir) {
            warn!(error = %error, "could not create output directory");
            stage
                .errors
                .push(format!("output dir {}: {error}", config.output_dir.display()));
        } else {
            let heatmap_path = config.output_dir.join("correlation_heatmap.png");
            match render_correlation_heatmap(&config.analysis.correlations, &heatmap_path) {
                Ok(()) => stage.heatmap = Some(heatmap_path),
                Err(error) => {
                    warn!(error = %error, "heatmap rendering failed");
                    stage.errors.push(format!("heatmap: {error}"));
                }
            }

            let chart_path = config.output_dir.join("regression_coefficients.png");
            match render_coefficient_chart(&config.analysis.regression, &chart_path) {
                Ok(()) => stage.coefficients_chart = Some(chart_path),
                Err(error) => {
                    warn!(error = %error, "coefficient chart rendering failed");
                    stage.errors.push(format!("coefficient chart: {error}"));
                }
            }
        }
    }

    if config.write_json {
        let export = AnalysisExport {
            dataset: config.dataset.display().to_string(),
            rows_read: config.rows_read,
            rows_analyzed: config.rows_analyzed,
            rows_dropped: config.rows_dropped,
            correlations: config.analysis.correlations.clone(),
            regression: config.analysis.regression.clone(),
        };
        match write_analysis_json(config.output_dir, &export) {
            Ok(path) => stage.json_export = Some(path),
            Err(error) => {
                warn!(error = %error, "json export failed");
                stage.errors.push(format!("json export: {error}"));
            }
        }
    }

    info!(
        charts = stage.heatmap.is_some() as usize + stage.coefficients_chart.is_some() as usize,
        json = stage.json_export.is_some(),
        error_count = stage.errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "report complete"
    );
    stage
}
