//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::session::DEFAULT_DIRECTORY;
use crate::timestamp::{DateOrder, DisplayFlags, TimestampConfig, DATE_DELIMITER};

/// Root of a `.daylog.yml` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaylogConfig {
    /// Log directory. Backslashes are accepted.
    pub directory: String,

    /// Locale name forwarded to the host facility. `""` reads the environment.
    pub locale: Option<String>,

    /// Process-wide timestamp defaults.
    pub timestamp: TimestampSettings,
}

impl Default for DaylogConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_DIRECTORY.to_string(),
            locale: None,
            timestamp: TimestampSettings::default(),
        }
    }
}

/// The `timestamp:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampSettings {
    pub order: DateOrder,
    pub flags: DisplayFlags,
    /// Single character between date fields.
    pub delimiter: String,
}

impl Default for TimestampSettings {
    fn default() -> Self {
        Self {
            order: DateOrder::default(),
            flags: DisplayFlags::empty(),
            delimiter: DATE_DELIMITER.to_string(),
        }
    }
}

impl TimestampSettings {
    /// The order and flags as a formatter config.
    pub fn to_config(&self) -> TimestampConfig {
        TimestampConfig::new(self.order, self.flags)
    }

    /// The delimiter character, falling back to `-` when unset.
    pub fn delimiter_char(&self) -> char {
        self.delimiter.chars().next().unwrap_or(DATE_DELIMITER)
    }
}
