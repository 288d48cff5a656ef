//! Analysis-frame assembly: select, filter complete rows, rename.
//!
//! The filter is explicit and stable: a row survives iff every selected
//! column has a present value, and surviving rows keep their input order.
//! The dropped-row count is part of the result rather than a silent side
//! effect.

use anyhow::{Context, Result, ensure};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

/// One column destined for the analysis frame: canonical name plus values
/// with missing slots.
#[derive(Debug, Clone)]
pub struct AnalysisColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl AnalysisColumn {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// The cleaned analysis frame plus row accounting.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Complete-case frame; no column contains a null.
    pub data: DataFrame,
    pub rows_in: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
}

/// Build the cleaned analysis frame from derived columns.
///
/// Columns must be equally long (they all derive from the same source
/// table). Rows with any missing value are dropped; the remainder are
/// emitted in input order under the columns' canonical names.
pub fn build_analysis_frame(columns: &[AnalysisColumn]) -> Result<CleanResult> {
    ensure!(!columns.is_empty(), "no analysis columns selected");
    let rows_in = columns[0].values.len();
    for column in columns {
        ensure!(
            column.values.len() == rows_in,
            "column '{}' has {} rows, expected {}",
            column.name,
            column.values.len(),
            rows_in
        );
    }

    let keep: Vec<usize> = (0..rows_in)
        .filter(|&idx| columns.iter().all(|column| column.values[idx].is_some()))
        .collect();
    let rows_kept = keep.len();
    let rows_dropped = rows_in - rows_kept;

    let mut frame_columns: Vec<Column> = Vec::with_capacity(columns.len());
    for column in columns {
        let values: Vec<f64> = keep
            .iter()
            .filter_map(|&idx| column.values[idx])
            .collect();
        frame_columns.push(Series::new(column.name.as_str().into(), values).into());
    }
    let data = DataFrame::new(frame_columns).context("build analysis frame")?;

    debug!(rows_in, rows_kept, rows_dropped, "analysis frame cleaned");
    Ok(CleanResult {
        data,
        rows_in,
        rows_kept,
        rows_dropped,
    })
}
