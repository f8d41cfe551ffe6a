//! Error types for explanation rendering

use thiserror::Error;

/// Result type alias for explanation operations
pub type Result<T> = std::result::Result<T, ExplainError>;

/// Main error type for explanation rendering
#[derive(Error, Debug)]
pub enum ExplainError {
    #[error("Missing label: explanation entry {index} has neither a class nor a target")]
    MissingLabel { index: usize },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ExplainError {
    fn from(err: serde_json::Error) -> Self {
        ExplainError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExplainError::MissingLabel { index: 2 };
        assert_eq!(
            err.to_string(),
            "Missing label: explanation entry 2 has neither a class nor a target"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ExplainError = json_err.into();
        assert!(matches!(err, ExplainError::SerializationError(_)));
    }
}
