//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_model_display() {
        let error = DomainError::InvalidModel("model name cannot be empty".to_string());
        assert_eq!(error.to_string(), "Invalid model: model name cannot be empty");
    }
}
