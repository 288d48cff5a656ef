//! CLI argument definitions for the survey analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default dataset filename, matching the survey export this analysis was
/// built around. Running `qol-analyzer analyze` from the data directory
/// needs no arguments.
pub const DEFAULT_DATASET: &str =
    "Final_Report_of_the_Asian_American_Quality_of_Life__AAQoL_.csv";

#[derive(Parser)]
#[command(
    name = "qol-analyzer",
    version,
    about = "Quality-of-life survey analyzer - correlations and regression over Likert data",
    long_about = "Analyze a quality-of-life survey export.\n\n\
                  Recodes Likert-style answers to ordinal scales, computes pairwise\n\
                  Pearson correlations, fits an OLS model predicting mental health,\n\
                  and renders a correlation heatmap and a coefficient bar chart."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis pipeline over a survey CSV.
    Analyze(AnalyzeArgs),

    /// List the builtin ordinal recoding scales.
    Scales,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the survey CSV export.
    #[arg(value_name = "DATASET", default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,

    /// Output directory for charts and exports (default: <DATASET dir>/analysis).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip chart rendering; numeric results are still printed.
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Write a machine-readable analysis.json next to the charts.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
