//! Timestamp formatting.
//!
//! Renders calendar times into filename-safe date stamps and display stamps
//! under a configurable [`DateOrder`] and set of [`DisplayFlags`], plus
//! chronometer-style durations.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveTime;
//! use daylog::timestamp::{format_time, DisplayFlag, DisplayFlags};
//!
//! let flags = DisplayFlags::from(DisplayFlag::TwelveHour);
//! let noon = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
//! assert_eq!(format_time(noon, flags), "12:30:00_PM");
//! ```

mod format;
mod options;
mod stopwatch;

pub use format::{
    format_date, format_datetime, format_duration, format_duration_24, format_time,
    DATE_DELIMITER,
};
pub use options::{
    default_config, set_default_config, set_default_flag, set_default_order, DateOrder,
    DisplayFlag, DisplayFlags, TimestampConfig,
};
pub use stopwatch::{running_time, secs_from_micros, secs_from_millis, secs_from_nanos, Stopwatch};

/// Current local wall-clock time.
pub fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

impl TimestampConfig {
    /// Full stamp of `dt` under this config.
    pub fn stamp(&self, dt: chrono::NaiveDateTime, delimiter: char) -> String {
        format_datetime(dt, self, delimiter)
    }

    /// Date-only stamp of `dt` under this config.
    pub fn stamp_date(&self, dt: chrono::NaiveDateTime, delimiter: char) -> String {
        format_date(dt.date(), self.order, self.flags, delimiter)
    }

    /// Time-only stamp of `dt` under this config.
    pub fn stamp_time(&self, dt: chrono::NaiveDateTime) -> String {
        format_time(dt.time(), self.flags)
    }
}
