//! Validation error types

use thiserror::Error;

/// Validation error for domain models
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Identifier is not a valid store key
    #[error("invalid product id '{value}'")]
    InvalidId { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "name" };
        assert_eq!(err.to_string(), "name cannot be empty");

        let err = ValidationError::InvalidId {
            value: "not-hex".into(),
        };
        assert_eq!(err.to_string(), "invalid product id 'not-hex'");
    }
}
