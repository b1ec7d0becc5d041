//! Error types for the work-log engine.
//!
//! The calculation engine and the store readers never fail: malformed stored
//! data degrades to safe defaults. Errors only arise at the edges, when a
//! configuration file is loaded or a caller hands in a date or month string.

use thiserror::Error;

/// The main error type for the work-log crate.
///
/// # Example
///
/// ```
/// use worklog::error::EngineError;
///
/// let error = EngineError::InvalidMonth {
///     value: "2025-13".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid month '2025-13': expected YYYY-MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A month string was not a valid `YYYY-MM` month.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected input.
        value: String,
    },

    /// Output could not be serialized.
    #[error("Failed to serialize output: {message}")]
    OutputError {
        /// A description of the serialization failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/worklog.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/worklog.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = EngineError::InvalidDate {
            value: "2025-02-30".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2025-02-30': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_output_error_displays_message() {
        let error = EngineError::OutputError {
            message: "key must be a string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to serialize output: key must be a string"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth {
                value: "june".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
