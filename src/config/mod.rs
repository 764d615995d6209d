//! Configuration loading, parsing, and validation for daylog.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use daylog::config::{load_config, CONFIG_FILE_NAME};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(CONFIG_FILE_NAME), "directory: logs\\app").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.directory, "logs\\app");
//! ```
//!
//! # Configuration File
//!
//! ```yaml
//! directory: Log/
//! locale: ""
//! timestamp:
//!   order: yyyy_mm_dd
//!   flags: [twelve_hour, hide_weekday]
//!   delimiter: "-"
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{DaylogConfig, TimestampSettings};
pub use validator::validate;

use crate::error::Result;

/// Install the config's timestamp section as the process-wide default and
/// forward its locale, if any.
///
/// Call before building writers; they copy the defaults when built.
pub fn apply(config: &DaylogConfig) -> Result<()> {
    crate::timestamp::set_default_config(config.timestamp.to_config());
    if let Some(locale) = &config.locale {
        crate::locale::set_locale_global(locale)?;
    }
    Ok(())
}
