//! Per-column dataset profiling.
//!
//! Used to log an overview of the ingested table before recoding, so a run
//! against an unexpected export is diagnosable from the debug log alone.

use std::collections::{BTreeMap, BTreeSet};

use crate::csv_table::SurveyTable;
use crate::numeric::parse_f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnProfile {
    /// Fraction of rows with a non-empty cell.
    pub non_null_ratio: f64,
    /// Fraction of non-empty cells that parse as numbers.
    pub numeric_ratio: f64,
    /// Distinct non-empty values divided by non-empty count.
    pub unique_ratio: f64,
}

impl ColumnProfile {
    /// True when every non-empty cell parses as a number.
    pub fn is_numeric(&self) -> bool {
        self.non_null_ratio > 0.0 && (self.numeric_ratio - 1.0).abs() < f64::EPSILON
    }
}

/// Profile every column of the table.
pub fn build_column_profiles(table: &SurveyTable) -> BTreeMap<String, ColumnProfile> {
    let mut profiles = BTreeMap::new();
    let row_count = table.height();
    for (col_idx, header) in table.headers.iter().enumerate() {
        let mut non_null = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for row in &table.rows {
            let value = row.get(col_idx).map(String::as_str).unwrap_or("");
            if value.is_empty() {
                continue;
            }
            non_null += 1;
            uniques.insert(value);
            if parse_f64(value).is_some() {
                numeric += 1;
            }
        }
        let non_null_ratio = if row_count == 0 {
            0.0
        } else {
            non_null as f64 / row_count as f64
        };
        let numeric_ratio = if non_null == 0 {
            0.0
        } else {
            numeric as f64 / non_null as f64
        };
        let unique_ratio = if non_null == 0 {
            0.0
        } else {
            uniques.len() as f64 / non_null as f64
        };
        profiles.insert(
            header.clone(),
            ColumnProfile {
                non_null_ratio,
                numeric_ratio,
                unique_ratio,
            },
        );
    }
    profiles
}
