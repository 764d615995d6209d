//! Duration command implementation.

use std::io::Write;

use crate::cli::args::DurationArgs;
use crate::error::Result;
use crate::timestamp::{format_duration, format_duration_24};

use super::dispatcher::{Command, CommandResult};

/// The duration command implementation.
pub struct DurationCommand {
    args: DurationArgs,
}

impl DurationCommand {
    /// Create a new duration command.
    pub fn new(args: DurationArgs) -> Self {
        Self { args }
    }

    fn render(&self) -> String {
        if self.args.wrap {
            let (stamp, days) = format_duration_24(self.args.seconds);
            match days {
                0 => stamp,
                1 => format!("{} (+1 day)", stamp),
                n => format!("{} (+{} days)", stamp, n),
            }
        } else {
            format_duration(self.args.seconds)
        }
    }
}

impl Command for DurationCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        writeln!(out, "{}", self.render())?;
        Ok(CommandResult::success())
    }
}
