//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::timestamp::{DateOrder, DisplayFlag};

/// daylog - Day-rotating log files with configurable timestamps.
#[derive(Debug, Parser)]
#[command(name = "daylog")]
#[command(
    author,
    version,
    about = "Day-rotating log files with configurable timestamps",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./.daylog.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log directory (overrides the config file)
    #[arg(short, long, global = true, env = "DAYLOG_DIR")]
    pub dir: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Append a timestamped record to today's log file
    Log(LogArgs),

    /// Write a timestamped record to the console
    Print(PrintArgs),

    /// Show the current time as a stamp
    Stamp(StampArgs),

    /// Format a number of seconds chronometer-style
    Duration(DurationArgs),

    /// Show today's log file path, creating it if needed
    Path,
}

/// Arguments for the `log` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LogArgs {
    /// Values to record, joined by spaces
    #[arg(required = true)]
    pub values: Vec<String>,
}

/// Arguments for the `print` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PrintArgs {
    /// Values to print, joined by spaces
    pub values: Vec<String>,
}

/// Arguments for the `stamp` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StampArgs {
    /// Show the date only
    #[arg(long, conflicts_with = "time_only")]
    pub date_only: bool,

    /// Show the time of day only
    #[arg(long)]
    pub time_only: bool,

    /// Order of the date fields
    #[arg(long, value_enum)]
    pub order: Option<DateOrder>,

    /// Display flag to switch on (repeatable)
    #[arg(long = "flag", value_enum)]
    pub flags: Vec<DisplayFlag>,

    /// Delimiter between date fields
    #[arg(long)]
    pub delimiter: Option<char>,
}

/// Arguments for the `duration` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DurationArgs {
    /// Seconds, fractional part in hundredths
    #[arg(allow_negative_numbers = true)]
    pub seconds: f64,

    /// Wrap at 24 hours and report the overflowing days
    #[arg(long)]
    pub wrap: bool,
}
