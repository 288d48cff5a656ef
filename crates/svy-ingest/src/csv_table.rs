use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

/// An in-memory survey table: one header row plus string-valued records.
///
/// Cells are normalized on read (trimmed, BOM stripped); empty cells stay
/// empty and represent missing values until a later stage interprets them.
#[derive(Debug, Clone)]
pub struct SurveyTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SurveyTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by its normalized header, exact match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// All values of a column, in row order. `None` if the column is absent.
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a delimited survey file into a [`SurveyTable`].
///
/// The first record is the header row. Headers are whitespace-normalized so
/// that raw exports with stray padding (e.g. a `"Discrimination "` column)
/// resolve to canonical names. Fully blank records are skipped; short
/// records are padded with empty cells.
///
/// An unreadable or unparseable file, or a file without a header row, is a
/// fatal error.
pub fn read_survey_table(path: &Path) -> Result<SurveyTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut records = reader.records();
    let header_record = match records.next() {
        Some(record) => record.with_context(|| format!("read header: {}", path.display()))?,
        None => bail!("empty file: {}", path.display()),
    };
    let headers: Vec<String> = header_record.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in records {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(SurveyTable { headers, rows })
}
