//! Path command implementation.
//!
//! The `daylog path` command opens today's file, creating the directory and
//! the file when missing, and prints its path.

use std::io::Write;

use crate::config::DaylogConfig;
use crate::error::Result;
use crate::session::LogFileSession;

use super::dispatcher::{Command, CommandResult};

/// The path command implementation.
pub struct PathCommand {
    directory: String,
}

impl PathCommand {
    /// Create a new path command.
    pub fn new(config: &DaylogConfig) -> Self {
        Self {
            directory: config.directory.clone(),
        }
    }
}

impl Command for PathCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let mut session = LogFileSession::new(&self.directory);
        session.update()?;
        match session.current_path() {
            Some(path) => {
                writeln!(out, "{}", path.display())?;
                Ok(CommandResult::success())
            }
            None => Ok(CommandResult::failure(1)),
        }
    }
}
