//! Command implementations.
//!
//! Each subcommand lives in its own module and implements [`Command`].

pub mod dispatcher;
pub mod duration;
pub mod log;
pub mod path;
pub mod print;
pub mod stamp;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use duration::DurationCommand;
pub use log::LogCommand;
pub use path::PathCommand;
pub use print::PrintCommand;
pub use stamp::StampCommand;
