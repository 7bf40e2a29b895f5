//! Error types for the item service

use super::ServiceOperation;
use thiserror::Error;

/// Errors that can occur when talking to the item backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The configured base URL cannot be used
    #[error("Invalid service URL {url:?}: {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The request never got a response (connection refused, reset, ...)
    #[error("{operation} request failed: {message}")]
    Request {
        /// Operation that failed
        operation: ServiceOperation,
        /// Transport error
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("{operation} rejected (status {status}): {body}")]
    Status {
        /// Operation that failed
        operation: ServiceOperation,
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body was not the expected JSON
    #[error("{operation} response parsing failed: {message}")]
    Decode {
        /// Operation that failed
        operation: ServiceOperation,
        /// Parser error
        message: String,
    },
}

impl ServiceError {
    /// The operation this error belongs to, if it came from a call
    #[must_use]
    pub const fn operation(&self) -> Option<ServiceOperation> {
        match self {
            Self::InvalidUrl { .. } => None,
            Self::Request { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let error = ServiceError::Status {
            operation: ServiceOperation::Update,
            status: 400,
            body: "description too long".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "update rejected (status 400): description too long"
        );
        assert_eq!(error.operation(), Some(ServiceOperation::Update));
    }
}
