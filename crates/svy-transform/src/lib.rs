#![deny(unsafe_code)]

pub mod clean;
pub mod recode;

pub use clean::{AnalysisColumn, CleanResult, build_analysis_frame};
pub use recode::{NumericColumn, RecodedColumn, numeric_column, recode_column};
