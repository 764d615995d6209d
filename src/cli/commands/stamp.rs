//! Stamp command implementation.
//!
//! The `daylog stamp` command shows the current local time under the
//! configured stamp options, with per-invocation overrides.

use std::io::Write;

use chrono::NaiveDateTime;

use crate::cli::args::StampArgs;
use crate::config::DaylogConfig;
use crate::error::Result;
use crate::timestamp::{self, TimestampConfig};

use super::dispatcher::{Command, CommandResult};

/// The stamp command implementation.
pub struct StampCommand {
    delimiter: char,
    args: StampArgs,
}

impl StampCommand {
    /// Create a new stamp command.
    pub fn new(config: &DaylogConfig, args: StampArgs) -> Self {
        Self {
            delimiter: config.timestamp.delimiter_char(),
            args,
        }
    }

    /// The process defaults with this invocation's overrides applied.
    pub fn effective_config(&self) -> TimestampConfig {
        let mut config = TimestampConfig::inherited();
        if let Some(order) = self.args.order {
            config = config.with_order(order);
        }
        for flag in &self.args.flags {
            config = config.with_flag(*flag, true);
        }
        config
    }

    /// Render `now` according to the arguments.
    pub fn render(&self, now: NaiveDateTime) -> String {
        let config = self.effective_config();
        let delimiter = self.args.delimiter.unwrap_or(self.delimiter);
        if self.args.date_only {
            config.stamp_date(now, delimiter)
        } else if self.args.time_only {
            config.stamp_time(now)
        } else {
            config.stamp(now, delimiter)
        }
    }
}

impl Command for StampCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        writeln!(out, "{}", self.render(timestamp::now()))?;
        Ok(CommandResult::success())
    }
}
