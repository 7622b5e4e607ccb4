//! CLI argument definitions for the roster export.
//!
//! Export behavior is configured through the environment; the command line
//! only controls logging.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster-export",
    version,
    about = "Export student race/ethnicity/LEP demographics for the roster-sync partner",
    long_about = "Pull student demographic records from the student information \
                  database, re-encode them into the partner's fixed vocabulary, \
                  write a delimited export file, and upload it over SFTP.\n\n\
                  Behavior is configured through environment settings: DB_USER, \
                  DB_PASSWORD, DB_CONNECT, TRANSFER_USER, TRANSFER_PASSWORD, \
                  TRANSFER_HOST, plus the optional EXPORT_INCREMENTAL, \
                  EXPORT_DELIMITER, and EXPORT_HEADER switches."
)]
pub struct Cli {
    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write the run log to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
