use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("insufficient data: need at least {needed} rows, got {actual}")]
    InsufficientData { needed: usize, actual: usize },
    #[error("series '{variable}' has zero variance")]
    ZeroVariance { variable: String },
    #[error("normal equations are singular; predictors are linearly dependent")]
    Singular,
    #[error("column '{column}' not found in analysis frame")]
    MissingColumn { column: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
