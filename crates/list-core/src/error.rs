//! List Errors
//!
//! Every controller operation returns `ListResult`.

use thiserror::Error;

/// Common result type for list operations
pub type ListResult<T> = Result<T, ListError>;

/// Errors raised by the list controller and its collaborators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Submitted text was empty
    #[error("item text is empty")]
    EmptyInput,
    /// Submitted text already exists in the list
    #[error("item already exists: {0}")]
    Duplicate(String),
    /// A display handle that the controller no longer tracks
    #[error("unknown item")]
    UnknownItem,
    /// Stored data could not be decoded
    #[error("malformed stored items: {0}")]
    MalformedStorage(String),
    /// The persistence slot rejected a read or write
    #[error("storage error: {0}")]
    Storage(String),
    /// Configuration could not be parsed
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ListError {
    /// Validation failures are shown to the user and change nothing
    pub fn is_validation(&self) -> bool {
        matches!(self, ListError::EmptyInput | ListError::Duplicate(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(ListError::EmptyInput.is_validation());
        assert!(ListError::Duplicate("Milk".into()).is_validation());
        assert!(!ListError::Storage("quota".into()).is_validation());
        assert!(!ListError::UnknownItem.is_validation());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ListError::Duplicate("Milk".into()).to_string(),
            "item already exists: Milk"
        );
    }
}
