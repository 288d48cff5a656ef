use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::AnalysisRunResult;

pub fn print_summary(result: &AnalysisRunResult) {
    println!("Dataset: {}", result.dataset.display());
    println!("Output: {}", result.output_dir.display());
    println!();
    print_correlations(result);
    println!();
    print_regression(result);
    println!();
    print_run_accounting(result);

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_correlations(result: &AnalysisRunResult) {
    println!("Correlations:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Pair"), header_cell("Pearson r")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &result.correlations.entries {
        table.add_row(vec![
            Cell::new(&entry.label),
            signed_cell(entry.coefficient, 4),
        ]);
    }
    println!("{table}");
}

fn print_regression(result: &AnalysisRunResult) {
    let summary = &result.regression;
    println!("OLS Regression Results:");

    let mut model = Table::new();
    model.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut model);
    align_column(&mut model, 1, CellAlignment::Right);
    model.add_row(vec![
        Cell::new("Dep. Variable"),
        Cell::new(&summary.dependent),
    ]);
    model.add_row(vec![
        Cell::new("No. Observations"),
        Cell::new(summary.nobs),
    ]);
    model.add_row(vec![Cell::new("Df Residuals"), Cell::new(summary.df_resid)]);
    model.add_row(vec![
        Cell::new("R-squared"),
        Cell::new(format!("{:.4}", summary.r_squared)),
    ]);
    model.add_row(vec![
        Cell::new("Adj. R-squared"),
        Cell::new(format!("{:.4}", summary.adj_r_squared)),
    ]);
    model.add_row(vec![
        Cell::new("F-statistic"),
        Cell::new(format!("{:.4}", summary.f_statistic)),
    ]);
    model.add_row(vec![
        Cell::new("Prob (F-statistic)"),
        p_value_cell(summary.f_pvalue),
    ]);
    model.add_row(vec![Cell::new("Fitted"), Cell::new(&summary.fitted_at)]);
    println!("{model}");

    let mut terms = Table::new();
    terms.set_header(vec![
        header_cell("Term"),
        header_cell("coef"),
        header_cell("std err"),
        header_cell("t"),
        header_cell("P>|t|"),
    ]);
    apply_wide_table_style(&mut terms);
    for idx in 1..=4 {
        align_column(&mut terms, idx, CellAlignment::Right);
    }
    for term in &summary.terms {
        terms.add_row(vec![
            Cell::new(&term.name).add_attribute(Attribute::Bold),
            signed_cell(term.estimate, 4),
            Cell::new(format!("{:.4}", term.std_error)),
            signed_cell(term.t_value, 3),
            p_value_cell(term.p_value),
        ]);
    }
    println!("{terms}");
}

fn print_run_accounting(result: &AnalysisRunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows read"),
        header_cell("Analyzed"),
        header_cell("Dropped"),
        header_cell("Heatmap"),
        header_cell("Coefficients"),
        header_cell("JSON"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let dropped_cell = if result.rows_dropped > 0 {
        Cell::new(result.rows_dropped).fg(Color::Yellow)
    } else {
        dim_cell(0)
    };
    table.add_row(vec![
        Cell::new(result.rows_read),
        Cell::new(result.rows_analyzed),
        dropped_cell,
        artifact_cell(result.heatmap.as_deref()),
        artifact_cell(result.coefficients_chart.as_deref()),
        artifact_cell(result.json_export.as_deref()),
    ]);
    println!("{table}");

    for report in &result.recode_reports {
        if report.unmatched > 0 {
            println!(
                "note: {} had {} response(s) outside the {} label set",
                report.variable, report.unmatched, report.scale
            );
        }
    }
}

fn artifact_cell(path: Option<&std::path::Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn signed_cell(value: f64, decimals: usize) -> Cell {
    let cell = Cell::new(format!("{value:.decimals$}"));
    if value < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn p_value_cell(p: f64) -> Cell {
    let cell = Cell::new(format!("{p:.4}"));
    if p < 0.05 {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
