use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::info_span;

use svy_model::{AnalysisVar, ethnic_identity_scale, life_satisfaction_scale, mental_health_scale};

use crate::cli::AnalyzeArgs;
use crate::pipeline::{
    IngestStage, ReportConfig, analyze, clean, ingest, recode, report,
};
use crate::summary::apply_table_style;
use crate::types::AnalysisRunResult;

pub fn run_scales() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Variable", "Scale", "Label", "Value"]);
    apply_table_style(&mut table);
    for (var, scale) in [
        (
            AnalysisVar::LifeSatisfaction,
            life_satisfaction_scale(),
        ),
        (AnalysisVar::MentalHealth, mental_health_scale()),
        (AnalysisVar::EthnicIdentity, ethnic_identity_scale()),
    ] {
        for (label, value) in scale.levels() {
            table.add_row(vec![
                Cell::new(var.canonical_name()),
                Cell::new(&scale.name),
                Cell::new(label),
                Cell::new(value),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisRunResult> {
    let dataset = &args.dataset;
    let analysis_span = info_span!("analysis", dataset = %dataset.display());
    let _guard = analysis_span.enter();

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        dataset
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("analysis")
    });

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let IngestStage { table, rows_read } = ingest(dataset)?;

    // =========================================================================
    // Stage 2: Recode
    // =========================================================================
    let recode_stage = recode(&table)?;

    // =========================================================================
    // Stage 3: Clean
    // =========================================================================
    let clean_result = clean(&recode_stage.columns)?;

    // =========================================================================
    // Stage 4: Analyze
    // =========================================================================
    let analysis = analyze(&clean_result.data)?;

    // =========================================================================
    // Stage 5: Report (non-fatal)
    // =========================================================================
    let report_stage = report(&ReportConfig {
        output_dir: &output_dir,
        dataset,
        render_charts: !args.no_charts,
        write_json: args.json,
        rows_read,
        rows_analyzed: clean_result.rows_kept,
        rows_dropped: clean_result.rows_dropped,
        analysis: &analysis,
    });

    let errors = report_stage.errors;
    let has_errors = !errors.is_empty();
    Ok(AnalysisRunResult {
        dataset: dataset.clone(),
        output_dir,
        rows_read,
        rows_analyzed: clean_result.rows_kept,
        rows_dropped: clean_result.rows_dropped,
        recode_reports: recode_stage.reports,
        correlations: analysis.correlations,
        regression: analysis.regression,
        heatmap: report_stage.heatmap,
        coefficients_chart: report_stage.coefficients_chart,
        json_export: report_stage.json_export,
        errors,
        has_errors,
    })
}
