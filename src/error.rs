//! Error types for daylog operations.
//!
//! This module defines [`DaylogError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Rotation and file-open failures are never recovered internally; they
//!   propagate to the caller of [`LogWriter::log`](crate::writer::LogWriter::log)
//! - Use `anyhow::Error` (via `DaylogError::Other`) for unexpected errors
//! - Spin-lock re-entry is a hang, not an error, so it has no variant here

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::lock::LockKey;

/// Core error type for daylog operations.
#[derive(Debug, Error)]
pub enum DaylogError {
    /// The log directory could not be created.
    #[error("Failed to create log directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The day's log file could not be opened for appending.
    #[error("Failed to open log file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a record to an open log file failed.
    #[error("Failed to write log file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A blocking lock was acquired again by the thread that already holds it.
    #[error("Lock {key} is already held by the current thread")]
    LockReentrancy { key: LockKey },

    /// The host locale facility rejected a locale name.
    #[error("Unsupported locale: {locale:?}")]
    LocaleInit { locale: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DaylogError {
    /// The underlying OS error code, for the file-system failure kinds.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Self::DirectoryCreate { source, .. }
            | Self::FileOpen { source, .. }
            | Self::FileWrite { source, .. } => source.raw_os_error(),
            Self::Io(source) => source.raw_os_error(),
            _ => None,
        }
    }
}

/// Result type alias for daylog operations.
pub type Result<T> = std::result::Result<T, DaylogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_create_displays_path() {
        let err = DaylogError::DirectoryCreate {
            path: PathBuf::from("/nope/Log/"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/nope/Log/"));
    }

    #[test]
    fn file_open_keeps_os_code() {
        let err = DaylogError::FileOpen {
            path: PathBuf::from("Log/2024-03-05.log"),
            source: io::Error::from_raw_os_error(13),
        };
        assert_eq!(err.os_code(), Some(13));
        assert!(err.to_string().contains("2024-03-05.log"));
    }

    #[test]
    fn os_code_absent_for_lock_errors() {
        let err = DaylogError::LockReentrancy {
            key: LockKey::Id(7),
        };
        assert_eq!(err.os_code(), None);
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn locale_init_displays_name() {
        let err = DaylogError::LocaleInit {
            locale: "xx_YY.bogus".into(),
        };
        assert!(err.to_string().contains("xx_YY.bogus"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DaylogError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file missing");
        let err: DaylogError = io_err.into();
        assert!(matches!(err, DaylogError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DaylogError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
