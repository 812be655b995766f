//! HTTP error responses.
//!
//! The wire contract for failures is a flat JSON body `{"error": "<message>"}`
//! with status 400 for rejections and 500 for unexpected resolver faults.
//! Validator and resolver failures are recovered here and never escape to
//! the transport layer as unhandled faults.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use phonemeta_lib::{ResolveError, ValidationError};

/// Flat error body returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A request failure with its HTTP status and user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// A 400 rejection with the given message.
    pub fn rejection(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A 500 for an unexpected resolver fault.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Whether this error is a client rejection rather than a fault.
    pub fn is_rejection(&self) -> bool {
        self.status == StatusCode::BAD_REQUEST
    }
}

impl From<&ValidationError> for ApiError {
    fn from(err: &ValidationError) -> Self {
        Self::rejection(err.to_string())
    }
}

impl From<&ResolveError> for ApiError {
    fn from(err: &ResolveError) -> Self {
        match err {
            ResolveError::Unparseable { .. } | ResolveError::NoRegion { .. } => {
                Self::rejection(err.to_string())
            }
            ResolveError::Internal { .. } => Self::internal(err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_rejections() {
        let err = ApiError::from(&ValidationError::MissingPlus);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains('+'));
        assert!(err.is_rejection());
    }

    #[test]
    fn expected_resolve_failures_map_to_rejections() {
        let err = ApiError::from(&ResolveError::NoRegion {
            number: "+999555012345678".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = ApiError::from(&ResolveError::Unparseable {
            reason: "garbage".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_resolve_faults_map_to_500() {
        let err = ApiError::from(&ResolveError::Internal {
            message: "metadata table corrupted".to_string(),
        });
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.is_rejection());
    }

    #[test]
    fn body_serializes_to_flat_error_object() {
        let body = ErrorBody {
            error: "Missing 'number' parameter.".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Missing 'number' parameter."}"#);
    }
}
