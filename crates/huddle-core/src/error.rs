//! Error types for Huddle

use thiserror::Error;

/// Main error type for Huddle operations
#[derive(Error, Debug)]
pub enum HuddleError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration value out of range or inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using HuddleError
pub type HuddleResult<T> = Result<T, HuddleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HuddleError::Config("feed interval must be positive".to_string());
        assert_eq!(
            format!("{}", err),
            "Config error: feed interval must be positive"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HuddleError = io_err.into();
        assert!(matches!(err, HuddleError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: HuddleError = json_err.into();
        assert!(matches!(err, HuddleError::Json(_)));
    }
}
