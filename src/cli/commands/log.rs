//! Log command implementation.
//!
//! The `daylog log` command appends one record to today's file.

use std::io::Write;

use crate::cli::args::LogArgs;
use crate::config::DaylogConfig;
use crate::error::Result;
use crate::writer::{LogWriter, Loggable};

use super::dispatcher::{Command, CommandResult};

/// The log command implementation.
pub struct LogCommand {
    config: DaylogConfig,
    args: LogArgs,
}

impl LogCommand {
    /// Create a new log command.
    pub fn new(config: &DaylogConfig, args: LogArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LogArgs {
        &self.args
    }
}

impl Command for LogCommand {
    fn execute(&self, _out: &mut dyn Write) -> Result<CommandResult> {
        let writer = LogWriter::builder(&self.config.directory)
            .delimiter(self.config.timestamp.delimiter_char())
            .locale(self.config.locale.as_deref().unwrap_or(""))
            .build()?;

        let values: Vec<&dyn Loggable> = self.args.values.iter().map(|v| v as &dyn Loggable).collect();
        writer.log(&values)?;

        if let Some(path) = writer.current_path() {
            tracing::debug!("Wrote record to {}", path.display());
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn log_appends_record() {
        let temp = TempDir::new().unwrap();
        let config = DaylogConfig {
            directory: temp.path().join("logs").to_string_lossy().into_owned(),
            ..DaylogConfig::default()
        };
        let cmd = LogCommand::new(
            &config,
            LogArgs {
                values: vec!["alpha".into(), "beta".into()],
            },
        );

        let mut out = Vec::new();
        assert!(cmd.execute(&mut out).unwrap().success);
        assert!(out.is_empty());

        let entries: Vec<_> = fs::read_dir(temp.path().join("logs"))
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);
        let content = fs::read_to_string(&entries[0]).unwrap();
        assert!(content.starts_with('['));
        assert!(content.ends_with("] alpha beta\n"));
    }
}
