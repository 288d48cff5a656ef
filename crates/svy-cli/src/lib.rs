//! CLI library components for the survey analyzer.

pub mod logging;
pub mod pipeline;
