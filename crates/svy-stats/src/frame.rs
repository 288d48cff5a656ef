//! Column extraction from the cleaned analysis frame.

use polars::prelude::DataFrame;

use crate::error::{Result, StatsError};

/// Extract a column as dense f64 values.
///
/// The cleaned frame guarantees no nulls; a null here means the caller
/// skipped the Cleaner, which is a usage error surfaced as missing data.
pub fn column_f64s(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)
        .map_err(|_| StatsError::MissingColumn {
            column: name.to_string(),
        })?;
    let values = column.f64().map_err(|_| StatsError::Message(format!(
        "column '{name}' is not numeric"
    )))?;
    let mut out = Vec::with_capacity(df.height());
    for value in values {
        match value {
            Some(v) => out.push(v),
            None => {
                return Err(StatsError::Message(format!(
                    "column '{name}' contains missing values; clean the frame first"
                )));
            }
        }
    }
    Ok(out)
}
