//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::config::DaylogConfig;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing any report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: DaylogConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher for an already-applied config.
    ///
    /// A `--dir` given on the command line replaces the config's directory.
    pub fn new(mut config: DaylogConfig, dir_override: Option<String>) -> Self {
        if let Some(dir) = dir_override {
            config.directory = dir;
        }
        Self { config }
    }

    /// The effective configuration.
    pub fn config(&self) -> &DaylogConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Log(args) => {
                let cmd = super::log::LogCommand::new(&self.config, args.clone());
                cmd.execute(out)
            }
            Commands::Print(args) => {
                let cmd = super::print::PrintCommand::new(&self.config, args.clone());
                cmd.execute(out)
            }
            Commands::Stamp(args) => {
                let cmd = super::stamp::StampCommand::new(&self.config, args.clone());
                cmd.execute(out)
            }
            Commands::Duration(args) => {
                let cmd = super::duration::DurationCommand::new(args.clone());
                cmd.execute(out)
            }
            Commands::Path => {
                let cmd = super::path::PathCommand::new(&self.config);
                cmd.execute(out)
            }
        }
    }
}
