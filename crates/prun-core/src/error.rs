//! Error types for prun

use thiserror::Error;

/// Main error type for prun
#[derive(Error, Debug)]
pub enum PrunError {
    /// More processes requested than allocated slots
    #[error("Oversubscribed: {requested} processes requested but only {available} slots allocated")]
    Oversubscribed { requested: usize, available: usize },

    /// Malformed or unsupported command-line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Host allocation could not be read
    #[error("Allocation error: {0}")]
    Allocation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Launcher could not be invoked
    #[error("Launcher error: {0}")]
    Launcher(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for prun operations
pub type PrunResult<T> = Result<T, PrunError>;

impl From<toml::de::Error> for PrunError {
    fn from(err: toml::de::Error) -> Self {
        PrunError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrunError::Oversubscribed {
            requested: 40,
            available: 20,
        };
        assert_eq!(
            err.to_string(),
            "Oversubscribed: 40 processes requested but only 20 slots allocated"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PrunError = io_err.into();
        assert!(matches!(err, PrunError::Io(_)));
    }
}
