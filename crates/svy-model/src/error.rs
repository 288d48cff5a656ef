use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("required column '{column}' not found in source table")]
    MissingColumn { column: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, SurveyError>;
