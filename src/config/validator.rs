//! Configuration validation rules.
//!
//! - The date delimiter must be exactly one character
//! - The date delimiter must not be a path separator
//! - The directory must not be empty

use crate::config::schema::DaylogConfig;
use crate::error::{DaylogError, Result};

/// Validate a configuration, reporting every problem at once.
pub fn validate(config: &DaylogConfig) -> Result<()> {
    let mut problems = Vec::new();

    let delimiter = &config.timestamp.delimiter;
    if delimiter.chars().count() != 1 {
        problems.push(format!(
            "timestamp.delimiter must be a single character, got {:?}",
            delimiter
        ));
    } else if delimiter == "/" || delimiter == "\\" {
        problems.push("timestamp.delimiter must not be a path separator".to_string());
    }

    if config.directory.trim().is_empty() {
        problems.push("directory must not be empty".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(DaylogError::ConfigValidationError {
            message: problems.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&DaylogConfig::default()).is_ok());
    }

    #[test]
    fn path_separator_delimiter_is_rejected() {
        let mut config = DaylogConfig::default();
        config.timestamp.delimiter = "/".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("path separator"));
    }

    #[test]
    fn all_problems_are_reported() {
        let mut config = DaylogConfig::default();
        config.timestamp.delimiter = String::new();
        config.directory = "  ".into();
        let msg = validate(&config).unwrap_err().to_string();
        assert!(msg.contains("single character"));
        assert!(msg.contains("directory"));
    }
}
