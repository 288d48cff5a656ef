#![deny(unsafe_code)]

pub mod correlation;
pub mod distribution;
pub mod error;
pub mod frame;
pub mod regression;

pub use correlation::{correlation_pairs, pearson};
pub use error::{Result, StatsError};
pub use frame::column_f64s;
pub use regression::{INTERCEPT, fit_ols};
