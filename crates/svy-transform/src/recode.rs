//! Ordinal recoding of text-valued survey columns.
//!
//! Recoding never mutates the source table; each call derives a fresh
//! column. Unknown labels become missing values and are counted, so the
//! later row loss in the Cleaner is attributable.

use tracing::debug;

use svy_ingest::{SurveyTable, parse_f64};
use svy_model::{OrdinalScale, Result, SurveyError};

/// A derived integer column produced by applying an [`OrdinalScale`].
#[derive(Debug, Clone)]
pub struct RecodedColumn {
    /// Canonical name the column will carry in the analysis frame.
    pub name: String,
    pub values: Vec<Option<i64>>,
    /// Rows whose raw text matched a scale label exactly.
    pub matched: usize,
    /// Rows with non-empty text outside the label set.
    pub unmatched: usize,
    /// Rows with an empty cell.
    pub blank: usize,
}

impl RecodedColumn {
    /// The recoded values widened to f64 for the analysis frame.
    pub fn f64_values(&self) -> Vec<Option<f64>> {
        self.values
            .iter()
            .map(|value| value.map(|v| v as f64))
            .collect()
    }
}

/// Apply `scale` to `source_column`, producing a new column named
/// `canonical_name`.
///
/// A missing source column is fatal: the analysis cannot proceed without it.
pub fn recode_column(
    table: &SurveyTable,
    source_column: &str,
    canonical_name: &str,
    scale: &OrdinalScale,
) -> Result<RecodedColumn> {
    let raw_values = table
        .column_values(source_column)
        .ok_or_else(|| SurveyError::MissingColumn {
            column: source_column.to_string(),
        })?;

    let mut values = Vec::with_capacity(raw_values.len());
    let mut matched = 0usize;
    let mut unmatched = 0usize;
    let mut blank = 0usize;
    for raw in raw_values {
        if raw.is_empty() {
            blank += 1;
            values.push(None);
            continue;
        }
        match scale.recode(raw) {
            Some(value) => {
                matched += 1;
                values.push(Some(value));
            }
            None => {
                unmatched += 1;
                values.push(None);
            }
        }
    }
    debug!(
        source_column,
        canonical_name,
        scale = %scale.name,
        matched,
        unmatched,
        blank,
        "column recoded"
    );
    Ok(RecodedColumn {
        name: canonical_name.to_string(),
        values,
        matched,
        unmatched,
        blank,
    })
}

/// A derived numeric column parsed from an already-numeric source column.
#[derive(Debug, Clone)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
    /// Rows with non-empty text that did not parse as a number.
    pub non_numeric: usize,
    pub blank: usize,
}

/// Parse `source_column` as f64 values under `canonical_name`.
///
/// Non-numeric cells become missing, mirroring the recoder's contract.
pub fn numeric_column(
    table: &SurveyTable,
    source_column: &str,
    canonical_name: &str,
) -> Result<NumericColumn> {
    let raw_values = table
        .column_values(source_column)
        .ok_or_else(|| SurveyError::MissingColumn {
            column: source_column.to_string(),
        })?;

    let mut values = Vec::with_capacity(raw_values.len());
    let mut non_numeric = 0usize;
    let mut blank = 0usize;
    for raw in raw_values {
        if raw.is_empty() {
            blank += 1;
            values.push(None);
            continue;
        }
        match parse_f64(raw) {
            Some(value) => values.push(Some(value)),
            None => {
                non_numeric += 1;
                values.push(None);
            }
        }
    }
    debug!(
        source_column,
        canonical_name, non_numeric, blank, "numeric column parsed"
    );
    Ok(NumericColumn {
        name: canonical_name.to_string(),
        values,
        non_numeric,
        blank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use svy_model::mental_health_scale;

    fn table(headers: &[&str], rows: &[&[&str]]) -> SurveyTable {
        SurveyTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| (*v).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn recode_maps_known_labels_and_counts_the_rest() {
        let table = table(
            &["Present Mental Health"],
            &[&["Good"], &["excellent"], &[""], &["Poor"]],
        );
        let column = recode_column(
            &table,
            "Present Mental Health",
            "Mental_Health",
            &mental_health_scale(),
        )
        .expect("recode");
        assert_eq!(column.values, vec![Some(3), None, None, Some(1)]);
        assert_eq!(column.matched, 2);
        assert_eq!(column.unmatched, 1);
        assert_eq!(column.blank, 1);
    }

    #[test]
    fn recode_missing_column_is_fatal() {
        let table = table(&["Other"], &[&["x"]]);
        let error = recode_column(
            &table,
            "Present Mental Health",
            "Mental_Health",
            &mental_health_scale(),
        )
        .expect_err("missing column");
        assert!(matches!(
            error,
            svy_model::SurveyError::MissingColumn { .. }
        ));
    }

    #[test]
    fn recode_does_not_touch_the_source_table() {
        let table = table(&["Present Mental Health"], &[&["Good"]]);
        let before = table.clone();
        recode_column(
            &table,
            "Present Mental Health",
            "Mental_Health",
            &mental_health_scale(),
        )
        .expect("recode");
        assert_eq!(table.headers, before.headers);
        assert_eq!(table.rows, before.rows);
    }

    #[test]
    fn numeric_column_parses_and_counts_failures() {
        let table = table(
            &["Discrimination"],
            &[&["2"], &["3.5"], &["n/a"], &[""]],
        );
        let column =
            numeric_column(&table, "Discrimination", "Discrimination").expect("parse");
        assert_eq!(column.values, vec![Some(2.0), Some(3.5), None, None]);
        assert_eq!(column.non_numeric, 1);
        assert_eq!(column.blank, 1);
    }
}
