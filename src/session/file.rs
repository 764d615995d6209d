//! Day-rotating log file.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime};

use super::clock::{Clock, SystemClock};
use super::directory::normalize_directory;
use crate::error::{DaylogError, Result};
use crate::timestamp::{DateOrder, DisplayFlag, DisplayFlags, TimestampConfig, DATE_DELIMITER};

/// Stamp used for file names, e.g. `2024-03-05`.
const FILE_STAMP: TimestampConfig = TimestampConfig::new(
    DateOrder::YearMonthDay,
    DisplayFlags::empty().with(DisplayFlag::HideWeekday, true),
);

/// Owns the open log file for the current day and swaps it when the day
/// changes.
///
/// The day comparison uses the day of the month only. A session that is not
/// updated between, say, March 5th and April 5th keeps writing to the March
/// file.
pub struct LogFileSession {
    directory: String,
    current_day: Option<u32>,
    path: Option<PathBuf>,
    file: Option<File>,
    clock: Arc<dyn Clock>,
}

impl LogFileSession {
    /// Create a session for `directory` driven by the system clock.
    ///
    /// Nothing touches the file system until the first [`Self::update`].
    pub fn new(directory: &str) -> Self {
        Self::with_clock(directory, Arc::new(SystemClock))
    }

    /// Create a session driven by `clock`.
    pub fn with_clock(directory: &str, clock: Arc<dyn Clock>) -> Self {
        Self {
            directory: normalize_directory(directory),
            current_day: None,
            path: None,
            file: None,
            clock,
        }
    }

    /// Make sure today's file is the open one.
    ///
    /// Returns `true` when a new file was opened. On failure the previously
    /// open file, path and day are left as they were, so the next call tries
    /// again.
    pub fn update(&mut self) -> Result<bool> {
        let now = self.clock.now();
        let day = now.day();
        if self.current_day == Some(day) {
            return Ok(false);
        }

        let path = self.path_for(now);
        fs::create_dir_all(&self.directory).map_err(|source| {
            tracing::warn!("Failed to create log directory {}: {}", self.directory, source);
            DaylogError::DirectoryCreate {
                path: PathBuf::from(&self.directory),
                source,
            }
        })?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| {
                tracing::warn!("Failed to open log file {}: {}", path.display(), source);
                DaylogError::FileOpen {
                    path: path.clone(),
                    source,
                }
            })?;

        tracing::debug!("Rotated log file to {}", path.display());
        self.file = Some(file);
        self.path = Some(path);
        self.current_day = Some(day);
        Ok(true)
    }

    /// The file `dt` belongs in.
    pub fn path_for(&self, dt: NaiveDateTime) -> PathBuf {
        let stamp = FILE_STAMP.stamp_date(dt, DATE_DELIMITER);
        PathBuf::from(format!("{}{}.log", self.directory, stamp))
    }

    /// Append `bytes` to the open file and flush.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let path = self.path.clone().unwrap_or_default();
        let file = self.file.as_mut().ok_or_else(|| DaylogError::FileWrite {
            path: path.clone(),
            source: io::Error::new(io::ErrorKind::NotConnected, "no log file is open"),
        })?;
        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|source| DaylogError::FileWrite { path, source })
    }

    /// Point the session at another directory.
    ///
    /// The current file stays open until the next [`Self::update`], which
    /// always rotates.
    pub fn set_directory(&mut self, directory: &str) {
        self.directory = normalize_directory(directory);
        self.current_day = None;
    }

    /// The normalized directory, always ending in `/`.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Path of the open file, if any update has succeeded.
    pub fn current_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Day of the month of the open file.
    pub fn current_day(&self) -> Option<u32> {
        self.current_day
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }
}

impl fmt::Debug for LogFileSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogFileSession")
            .field("directory", &self.directory)
            .field("current_day", &self.current_day)
            .field("path", &self.path)
            .finish()
    }
}
