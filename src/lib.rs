//! daylog - Day-rotating log files with configurable timestamps.
//!
//! Records are written as `[<timestamp>] <value> <value> ...` lines to
//! `{directory}/{YYYY-MM-DD}.log`, switching files when the day changes.
//! Concurrent writers are serialized through keyed locks.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`locale`] - Process locale selection
//! - [`lock`] - Keyed lock registry
//! - [`session`] - Day-rotating log file handle
//! - [`timestamp`] - Date, time, and duration rendering
//! - [`writer`] - Thread-safe record writer
//!
//! # Example
//!
//! ```
//! use daylog::timestamp::{DateOrder, DisplayFlag, TimestampConfig};
//! use chrono::NaiveDate;
//!
//! let config = TimestampConfig::new(DateOrder::DayMonthYear, Default::default())
//!     .with_flag(DisplayFlag::MonthAsText, true)
//!     .with_flag(DisplayFlag::HideWeekday, true);
//! let at = NaiveDate::from_ymd_opt(2024, 3, 5)
//!     .unwrap()
//!     .and_hms_opt(14, 30, 0)
//!     .unwrap();
//! assert_eq!(config.stamp(at, '-'), "05-MAR-2024_14:30:00");
//! ```
//!
//! For file-based logging, see [`LogWriter`] and the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod locale;
pub mod lock;
pub mod session;
pub mod timestamp;
pub mod writer;

pub use error::{DaylogError, Result};
pub use lock::{LockKey, LockRegistry};
pub use session::LogFileSession;
pub use timestamp::{DateOrder, DisplayFlag, DisplayFlags, TimestampConfig};
pub use writer::{LogWriter, Loggable};
