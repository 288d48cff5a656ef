//! Pearson product-moment correlation.

use polars::prelude::DataFrame;
use tracing::debug;

use svy_model::{CORRELATION_PAIRS, CorrelationEntry, CorrelationSet, pair_label};

use crate::error::{Result, StatsError};
use crate::frame::column_f64s;

/// Pearson correlation coefficient between two equally long series.
///
/// Errors are distinguishable rather than silent NaN: mismatched lengths,
/// fewer than two observations, or a zero-variance series all refuse to
/// produce a coefficient.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    pearson_named(x, y, "x", "y")
}

fn pearson_named(x: &[f64], y: &[f64], x_name: &str, y_name: &str) -> Result<f64> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(StatsError::InsufficientData {
            needed: 2,
            actual: n,
        });
    }

    let n_f = n as f64;
    let x_mean = x.iter().sum::<f64>() / n_f;
    let y_mean = y.iter().sum::<f64>() / n_f;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 {
        return Err(StatsError::ZeroVariance {
            variable: x_name.to_string(),
        });
    }
    if syy == 0.0 {
        return Err(StatsError::ZeroVariance {
            variable: y_name.to_string(),
        });
    }

    // Clamp away the last-ulp excursions outside [-1, 1].
    Ok((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Compute the four fixed correlation pairs over the cleaned frame, in
/// reporting order.
pub fn correlation_pairs(df: &DataFrame) -> Result<CorrelationSet> {
    let mut entries = Vec::with_capacity(CORRELATION_PAIRS.len());
    for (left, right) in CORRELATION_PAIRS {
        let x = column_f64s(df, left.canonical_name())?;
        let y = column_f64s(df, right.canonical_name())?;
        let coefficient = pearson_named(&x, &y, left.canonical_name(), right.canonical_name())?;
        let label = pair_label(left, right);
        debug!(pair = %label, coefficient, "correlation computed");
        entries.push(CorrelationEntry { label, coefficient });
    }
    Ok(CorrelationSet { entries })
}
