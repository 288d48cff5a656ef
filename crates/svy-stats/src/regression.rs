//! Ordinary least squares with standard diagnostics.
//!
//! The model always includes an explicit intercept column of ones. The
//! normal equations are solved by Gauss-Jordan elimination with partial
//! pivoting, which is stable at this scale (a handful of predictors over
//! small-to-moderate row counts); the inverse of XᵀX doubles as the
//! coefficient covariance basis for the standard errors.

use polars::prelude::DataFrame;
use tracing::debug;

use svy_model::{OlsSummary, OlsTerm};

use crate::distribution::{f_survival, student_t_two_sided_p};
use crate::error::{Result, StatsError};
use crate::frame::column_f64s;

/// Name under which the intercept term is reported.
pub const INTERCEPT: &str = "const";

/// Fit `response ≈ β₀ + Σ βᵢ·predictorᵢ` over the cleaned frame.
///
/// No regularization, no weighting. Collinear predictors (including a
/// constant predictor, which duplicates the intercept) yield
/// [`StatsError::Singular`]; fewer rows than fitted parameters plus one
/// yields [`StatsError::InsufficientData`].
pub fn fit_ols(df: &DataFrame, response: &str, predictors: &[&str]) -> Result<OlsSummary> {
    if predictors.is_empty() {
        return Err(StatsError::Message(
            "at least one predictor is required".to_string(),
        ));
    }
    let y = column_f64s(df, response)?;
    let mut x_columns = Vec::with_capacity(predictors.len());
    for predictor in predictors {
        x_columns.push(column_f64s(df, predictor)?);
    }

    let n = y.len();
    let p = predictors.len() + 1;
    if n <= p {
        return Err(StatsError::InsufficientData {
            needed: p + 1,
            actual: n,
        });
    }

    // Design matrix rows: [1, x₁, x₂, ...]
    let design: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            let mut row = Vec::with_capacity(p);
            row.push(1.0);
            for column in &x_columns {
                row.push(column[i]);
            }
            row
        })
        .collect();

    let mut xtx = vec![vec![0.0; p]; p];
    let mut xty = vec![0.0; p];
    for (row, &yi) in design.iter().zip(y.iter()) {
        for j in 0..p {
            xty[j] += row[j] * yi;
            for k in 0..p {
                xtx[j][k] += row[j] * row[k];
            }
        }
    }

    let xtx_inv = invert(&xtx).ok_or(StatsError::Singular)?;
    let beta: Vec<f64> = (0..p)
        .map(|j| (0..p).map(|k| xtx_inv[j][k] * xty[k]).sum())
        .collect();

    let fitted: Vec<f64> = design
        .iter()
        .map(|row| row.iter().zip(beta.iter()).map(|(x, b)| x * b).sum())
        .collect();
    let residuals: Vec<f64> = y.iter().zip(fitted.iter()).map(|(yi, fi)| yi - fi).collect();
    let residual_sum: f64 = residuals.iter().sum();
    let sse: f64 = residuals.iter().map(|e| e * e).sum();

    let y_mean = y.iter().sum::<f64>() / n as f64;
    let sst: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();
    if sst == 0.0 {
        return Err(StatsError::ZeroVariance {
            variable: response.to_string(),
        });
    }

    let df_resid = n - p;
    let df_model = p - 1;
    let r_squared = 1.0 - sse / sst;
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n as f64 - 1.0) / (df_resid as f64);
    let sigma2 = sse / df_resid as f64;

    let mut terms = Vec::with_capacity(p);
    let names = std::iter::once(INTERCEPT).chain(predictors.iter().copied());
    for (j, name) in names.enumerate() {
        // Rounding can push a diagonal entry a hair below zero on exact fits.
        let variance = (sigma2 * xtx_inv[j][j]).max(0.0);
        let std_error = variance.sqrt();
        let t_value = if std_error == 0.0 {
            if beta[j] == 0.0 { 0.0 } else { f64::INFINITY * beta[j].signum() }
        } else {
            beta[j] / std_error
        };
        let p_value = student_t_two_sided_p(t_value, df_resid as f64);
        terms.push(OlsTerm {
            name: name.to_string(),
            estimate: beta[j],
            std_error,
            t_value,
            p_value,
        });
    }

    let ssr = (sst - sse).max(0.0);
    let mse = sse / df_resid as f64;
    let f_statistic = if mse == 0.0 {
        f64::INFINITY
    } else {
        (ssr / df_model as f64) / mse
    };
    let f_pvalue = f_survival(f_statistic, df_model as f64, df_resid as f64);

    debug!(
        response,
        nobs = n,
        df_resid,
        r_squared,
        f_statistic,
        "ols model fitted"
    );

    Ok(OlsSummary {
        dependent: response.to_string(),
        nobs: n,
        df_resid,
        r_squared,
        adj_r_squared,
        f_statistic,
        f_pvalue,
        residual_sum,
        fitted_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        terms,
    })
}

/// Invert a symmetric positive matrix by Gauss-Jordan elimination with
/// partial pivoting. Returns `None` when a pivot degenerates.
fn invert(matrix: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let n = matrix.len();
    let scale = matrix
        .iter()
        .flat_map(|row| row.iter())
        .fold(0.0f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return None;
    }
    let tolerance = scale * 1e-12;

    let mut a: Vec<Vec<f64>> = matrix.to_vec();
    let mut inv: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();

    for col in 0..n {
        let mut pivot_row = col;
        let mut best = a[col][col].abs();
        for row in col + 1..n {
            if a[row][col].abs() > best {
                best = a[row][col].abs();
                pivot_row = row;
            }
        }
        if best < tolerance {
            return None;
        }
        a.swap(col, pivot_row);
        inv.swap(col, pivot_row);

        let pivot = a[col][col];
        for j in 0..n {
            a[col][j] /= pivot;
            inv[col][j] /= pivot;
        }
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = a[row][col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                a[row][j] -= factor * a[col][j];
                inv[row][j] -= factor * inv[col][j];
            }
        }
    }
    Some(inv)
}
