//! Serializable results of the analysis stage.
//!
//! Computation crates fill these in; reporting crates render them. Nothing
//! here touches a display backend, so tests can assert on plain data.

use serde::{Deserialize, Serialize};

/// One correlation pair and its Pearson coefficient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationEntry {
    /// Pair label, e.g. "Discrimination & Mental Health".
    pub label: String,
    pub coefficient: f64,
}

/// Pairwise correlations in fixed reporting order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationSet {
    pub entries: Vec<CorrelationEntry>,
}

impl CorrelationSet {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.coefficient)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One fitted regression term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OlsTerm {
    /// Term name; the intercept is reported as "const".
    pub name: String,
    pub estimate: f64,
    pub std_error: f64,
    pub t_value: f64,
    pub p_value: f64,
}

/// A fitted ordinary least squares model with its diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OlsSummary {
    /// Name of the response variable.
    pub dependent: String,
    pub nobs: usize,
    /// Residual degrees of freedom (nobs - fitted parameters).
    pub df_resid: usize,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub f_statistic: f64,
    pub f_pvalue: f64,
    /// Sum of residuals; approximately zero whenever an intercept is fitted.
    pub residual_sum: f64,
    /// Wall-clock timestamp of the fit, for the printed summary header.
    pub fitted_at: String,
    /// Intercept first, then one term per predictor.
    pub terms: Vec<OlsTerm>,
}

impl OlsSummary {
    /// Look up a fitted term by name.
    pub fn term(&self, name: &str) -> Option<&OlsTerm> {
        self.terms.iter().find(|term| term.name == name)
    }

    /// Coefficient estimates in term order, for chart rendering.
    pub fn coefficients(&self) -> Vec<(String, f64)> {
        self.terms
            .iter()
            .map(|term| (term.name.clone(), term.estimate))
            .collect()
    }
}
