#![deny(unsafe_code)]

pub mod csv_table;
pub mod numeric;
pub mod profile;

pub use csv_table::{SurveyTable, read_survey_table};
pub use numeric::{format_numeric, parse_f64, parse_i64};
pub use profile::{ColumnProfile, build_column_profiles};
