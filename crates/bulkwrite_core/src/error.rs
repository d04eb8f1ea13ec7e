//! Error types for bulk write results.

use thiserror::Error;

/// Result type for bulk write result operations.
pub type BulkWriteResult<T> = Result<T, BulkWriteError>;

/// Errors that can occur while building or reading a bulk write outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BulkWriteError {
    /// An argument supplied at construction time was rejected.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// Counts were requested from a write that was not acknowledged.
    #[error("cannot get information about an unacknowledged write")]
    Unacknowledged,
}

impl BulkWriteError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let err = BulkWriteError::invalid_argument("upserts can not be null");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid argument: upserts can not be null");
    }

    #[test]
    fn unacknowledged_message() {
        let err = BulkWriteError::Unacknowledged;
        assert!(!err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "cannot get information about an unacknowledged write"
        );
    }
}
