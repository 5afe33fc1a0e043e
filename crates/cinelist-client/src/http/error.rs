/*
[INPUT]:  Error sources (HTTP status, transport, serialization, URL building)
[OUTPUT]: OperationFailed errors naming the failed operation and the cause
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use super::operation::Operation;

/// Main error type for the CineList client
#[derive(Error, Debug)]
pub enum CineListError {
    /// A backend operation did not produce a usable response
    #[error("{}: {cause}", .operation.description())]
    OperationFailed {
        operation: Operation,
        #[source]
        cause: FailureCause,
    },

    /// A configured base URL could not be parsed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The underlying HTTP client could not be built
    #[error("HTTP client setup failed: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Why an operation failed.
#[derive(Error, Debug)]
pub enum FailureCause {
    /// The backend answered with a non-2xx status. The body is never read.
    #[error("{reason}")]
    Status { status: StatusCode, reason: String },

    /// No response was obtained, or the body could not be read.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// A success response carried a body that is not JSON.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request target could not be built from the base URL.
    #[error("invalid request target: {0}")]
    Target(#[source] url::ParseError),
}

impl FailureCause {
    /// Build a status failure, using the status' reason phrase as the message.
    pub fn from_status(status: StatusCode) -> Self {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        FailureCause::Status { status, reason }
    }
}

impl CineListError {
    /// The operation that failed, if this is a runtime failure
    pub fn operation(&self) -> Option<Operation> {
        match self {
            CineListError::OperationFailed { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// The failure cause, if this is a runtime failure
    pub fn cause(&self) -> Option<&FailureCause> {
        match self {
            CineListError::OperationFailed { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// HTTP status of an application-level failure
    pub fn status(&self) -> Option<StatusCode> {
        match self.cause() {
            Some(FailureCause::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Check if no response was obtained from the backend
    pub fn is_transport(&self) -> bool {
        matches!(self.cause(), Some(FailureCause::Transport(_)))
    }
}

/// Result type alias for CineList operations
pub type Result<T> = std::result::Result<T, CineListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_failure_message() {
        let err = CineListError::OperationFailed {
            operation: Operation::ListMovies,
            cause: FailureCause::from_status(StatusCode::INTERNAL_SERVER_ERROR),
        };
        assert_eq!(err.to_string(), "Error listing movies: Internal Server Error");
        assert_eq!(err.operation(), Some(Operation::ListMovies));
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_status_without_reason_falls_back_to_code() {
        let status = StatusCode::from_u16(599).expect("valid status");
        match FailureCause::from_status(status) {
            FailureCause::Status { reason, .. } => assert_eq!(reason, "599"),
            other => panic!("Expected Status cause, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_failure_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let detail = json_err.to_string();
        let err = CineListError::OperationFailed {
            operation: Operation::GetMovie,
            cause: FailureCause::Decode(json_err),
        };
        let message = err.to_string();
        assert!(message.starts_with("Error fetching movie: invalid response body"));
        assert!(message.contains(&detail));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_url_parse_error_has_no_operation() {
        let err = CineListError::from(url::Url::parse("not a url").unwrap_err());
        assert!(err.operation().is_none());
        assert!(err.to_string().starts_with("Invalid URL"));
    }
}
