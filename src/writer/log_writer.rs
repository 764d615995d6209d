//! Thread-safe timestamped record writer.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use console::Term;
use parking_lot::Mutex;

use super::loggable::{join_args, Loggable};
use crate::error::Result;
use crate::lock::{LockKey, LockRegistry};
use crate::session::{Clock, LogFileSession, SystemClock, DEFAULT_DIRECTORY};
use crate::timestamp::{TimestampConfig, DATE_DELIMITER};

/// Key of the lock that serializes console output.
pub struct Console;

/// Writes `[<timestamp>] <value> <value> ...` lines to a day-rotating file or
/// to the console.
///
/// Every call takes a keyed lock for its whole duration, so lines from
/// concurrent threads never interleave. By default all writers in a process
/// share one file lock; give a writer its own key with
/// [`LogWriterBuilder::key`].
pub struct LogWriter {
    session: Mutex<LogFileSession>,
    stamp: TimestampConfig,
    delimiter: char,
    clock: Arc<dyn Clock>,
    registry: Arc<LockRegistry>,
    key: LockKey,
    locale: Option<String>,
}

impl LogWriter {
    /// Writer for `directory` using the process-wide stamp defaults and the
    /// locale from the environment.
    ///
    /// A locale the host rejects is logged and otherwise ignored; use
    /// [`LogWriterBuilder::build`] to treat it as an error.
    pub fn new(directory: &str) -> Self {
        let mut writer = Self::builder(directory).build_unchecked();
        if let Err(e) = writer.set_locale("") {
            tracing::warn!("{}", e);
        }
        writer
    }

    /// Start configuring a writer for `directory`.
    pub fn builder(directory: &str) -> LogWriterBuilder {
        LogWriterBuilder::new(directory)
    }

    /// Write one record to today's file.
    ///
    /// Fails without writing anything if today's file cannot be opened, and
    /// with [`LockReentrancy`](crate::DaylogError::LockReentrancy) when called
    /// from inside another `log` on the same thread.
    pub fn log(&self, args: &[&dyn Loggable]) -> Result<()> {
        let _guard = self.registry.blocking(self.key)?;
        let mut session = self.session.lock();
        session.update()?;
        let line = self.render(self.clock.now(), args);
        session.append(line.as_bytes())
    }

    /// Write one record to standard output.
    ///
    /// Console errors are ignored; this never fails. Lines are serialized
    /// through the console key of this writer's registry, so only writers
    /// sharing a registry are kept from interleaving. Writers built without
    /// [`LogWriterBuilder::registry`] all share [`LockRegistry::global`].
    pub fn print(&self, args: &[&dyn Loggable]) {
        let _guard = self.registry.spin(LockKey::of::<Console>());
        let line = self.render(self.clock.now(), args);
        let _ = Term::stdout().write_str(&line);
    }

    /// The full record line for `args` at `now`, newline included.
    pub fn render(&self, now: NaiveDateTime, args: &[&dyn Loggable]) -> String {
        let mut line = format!("[{}]", self.stamp.stamp(now, self.delimiter));
        if !args.is_empty() {
            line.push(' ');
            line.push_str(&join_args(args));
        }
        line.push('\n');
        line
    }

    /// Rotate now if the day changed. See [`LogFileSession::update`].
    pub fn update(&self) -> Result<bool> {
        let _guard = self.registry.blocking(self.key)?;
        self.session.lock().update()
    }

    /// Path of the file currently open, if any.
    pub fn current_path(&self) -> Option<std::path::PathBuf> {
        self.session.lock().current_path().map(|p| p.to_path_buf())
    }

    /// The normalized log directory.
    pub fn directory(&self) -> String {
        self.session.lock().directory().to_string()
    }

    /// Move future records to another directory. The next `log` rotates.
    pub fn set_directory(&self, directory: &str) -> Result<()> {
        let _guard = self.registry.blocking(self.key)?;
        self.session.lock().set_directory(directory);
        Ok(())
    }

    /// Forward `name` to the host locale facility for console text.
    pub fn set_locale(&mut self, name: &str) -> Result<()> {
        crate::locale::set_locale_console(name)?;
        self.locale = Some(name.to_string());
        Ok(())
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// The stamp config copied at construction.
    pub fn stamp_config(&self) -> TimestampConfig {
        self.stamp
    }

    pub fn key(&self) -> LockKey {
        self.key
    }
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogWriter")
            .field("session", &*self.session.lock())
            .field("stamp", &self.stamp)
            .field("key", &self.key)
            .finish()
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORY)
    }
}

/// Builder for [`LogWriter`].
pub struct LogWriterBuilder {
    directory: String,
    stamp: Option<TimestampConfig>,
    delimiter: char,
    clock: Arc<dyn Clock>,
    registry: Option<Arc<LockRegistry>>,
    key: LockKey,
    locale: Option<String>,
}

impl LogWriterBuilder {
    fn new(directory: &str) -> Self {
        Self {
            directory: directory.to_string(),
            stamp: None,
            delimiter: DATE_DELIMITER,
            clock: Arc::new(SystemClock),
            registry: None,
            key: LockKey::of::<LogFileSession>(),
            locale: Some(String::new()),
        }
    }

    /// Stamp config for record lines. Defaults to the process-wide config at
    /// build time.
    pub fn stamp(mut self, config: TimestampConfig) -> Self {
        self.stamp = Some(config);
        self
    }

    /// Delimiter between date fields in record stamps.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Registry to take locks from. Defaults to [`LockRegistry::global`].
    ///
    /// File and console serialization only hold among writers that share a
    /// registry.
    pub fn registry(mut self, registry: Arc<LockRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Lock key serializing this writer's file output.
    pub fn key(mut self, key: LockKey) -> Self {
        self.key = key;
        self
    }

    /// Locale forwarded to the host facility on build. Defaults to `""`, the
    /// locale named by the environment.
    pub fn locale(mut self, name: &str) -> Self {
        self.locale = Some(name.to_string());
        self
    }

    /// Build the writer and apply its locale.
    pub fn build(self) -> Result<LogWriter> {
        let locale = self.locale.clone();
        let mut writer = self.build_unchecked();
        if let Some(name) = locale {
            writer.set_locale(&name)?;
        }
        Ok(writer)
    }

    fn build_unchecked(self) -> LogWriter {
        LogWriter {
            session: Mutex::new(LogFileSession::with_clock(
                &self.directory,
                Arc::clone(&self.clock),
            )),
            stamp: self.stamp.unwrap_or_else(TimestampConfig::inherited),
            delimiter: self.delimiter,
            clock: self.clock,
            registry: self.registry.unwrap_or_else(LockRegistry::global),
            key: self.key,
            locale: None,
        }
    }
}
