//! Day-based log file rotation.
//!
//! This module provides the rotation state behind a writer:
//! - [`LogFileSession`] keeps today's file open and swaps it when the day changes
//! - [`normalize_directory`] cleans up the log directory path
//! - [`Clock`] supplies the date, so rotation can be driven by hand in tests
//!
//! Files are laid out as `{directory}/{YYYY-MM-DD}.log` and are always opened
//! in append mode.
//!
//! A tailing reader can watch [`LogFileSession::update`] and
//! [`LogFileSession::current_path`] to notice rotation, reopen the new file,
//! and resume from its recorded offset.

mod clock;
mod directory;
mod file;

pub use clock::{Clock, ManualClock, SystemClock};
pub use directory::normalize_directory;
pub use file::LogFileSession;

/// Default log directory, relative to the working directory.
pub const DEFAULT_DIRECTORY: &str = "Log/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directory_is_normalized() {
        assert_eq!(normalize_directory(DEFAULT_DIRECTORY), DEFAULT_DIRECTORY);
    }
}
