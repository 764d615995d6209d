//! Print command implementation.
//!
//! The `daylog print` command writes one record to the console. It never
//! touches the log directory.

use std::io::Write;

use crate::cli::args::PrintArgs;
use crate::config::DaylogConfig;
use crate::error::Result;
use crate::writer::{LogWriter, Loggable};

use super::dispatcher::{Command, CommandResult};

/// The print command implementation.
pub struct PrintCommand {
    config: DaylogConfig,
    args: PrintArgs,
}

impl PrintCommand {
    /// Create a new print command.
    pub fn new(config: &DaylogConfig, args: PrintArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }
}

impl Command for PrintCommand {
    fn execute(&self, _out: &mut dyn Write) -> Result<CommandResult> {
        let writer = LogWriter::builder(&self.config.directory)
            .delimiter(self.config.timestamp.delimiter_char())
            .locale(self.config.locale.as_deref().unwrap_or(""))
            .build()?;

        let values: Vec<&dyn Loggable> = self.args.values.iter().map(|v| v as &dyn Loggable).collect();
        writer.print(&values);
        Ok(CommandResult::success())
    }
}
