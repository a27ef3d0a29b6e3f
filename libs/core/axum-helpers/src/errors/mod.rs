pub mod handlers;

use axum::{
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::backtrace::Backtrace;
use thiserror::Error;
use utoipa::ToSchema;

/// Deployment mode controlling how much detail error responses expose.
///
/// In `Development`, error bodies carry the underlying error text and a
/// captured backtrace; in `Production` they are sanitized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeploymentMode {
    Development,
    Production,
}

static DEPLOYMENT_MODE: OnceCell<DeploymentMode> = OnceCell::new();

/// Record the deployment mode once at startup. Later calls are ignored.
pub fn set_deployment_mode(mode: DeploymentMode) {
    let _ = DEPLOYMENT_MODE.set(mode);
}

/// Current mode; defaults to the sanitized `Production` behavior when unset.
pub fn deployment_mode() -> DeploymentMode {
    DEPLOYMENT_MODE
        .get()
        .copied()
        .unwrap_or(DeploymentMode::Production)
}

/// Standard error envelope.
///
/// `status` is `"fail"` for client-class (4xx) failures and `"error"` for
/// server-class (5xx) faults. The `error` and `stack` diagnostic fields are
/// only populated outside production.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": "fail",
///   "message": "Item not found"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// "fail" (client error) or "error" (server fault)
    pub status: &'static str,
    /// Human-readable error message
    pub message: String,
    /// Underlying error text (non-production only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Captured backtrace (non-production only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Application error type: the single typed error channel.
///
/// Validators and services raise these; the [`IntoResponse`] impl below is
/// the only place errors are serialized to HTTP. Every variant carries an
/// explicit status, which makes it "operational" in the sense that its
/// message is safe to report to the caller; the `Internal` variant is the
/// unclassified-fault bucket whose message is sanitized in production.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON body rejected: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Form body rejected: {0}")]
    FormExtractorRejection(#[from] FormRejection),

    #[error("Query string rejected: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Path parameter rejected: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Too Many Requests: {0}")]
    TooManyRequests(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON body rejected: {:?}", e);
                // axum reports deserialization faults as 422; the API
                // contract is 400 for any malformed body
                (StatusCode::BAD_REQUEST, e.body_text(), format!("{:?}", e))
            }
            AppError::FormExtractorRejection(e) => {
                tracing::warn!("Form body rejected: {:?}", e);
                (StatusCode::BAD_REQUEST, e.body_text(), format!("{:?}", e))
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!("Query string rejected: {:?}", e);
                (StatusCode::BAD_REQUEST, e.body_text(), format!("{:?}", e))
            }
            AppError::PathExtractorRejection(e) => {
                tracing::warn!("Path parameter rejected: {:?}", e);
                (StatusCode::BAD_REQUEST, e.body_text(), format!("{:?}", e))
            }
            AppError::Validation(msg) => {
                tracing::info!("Validation failed: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone(), msg)
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone(), msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg.clone(), msg)
            }
            AppError::TooManyRequests(msg) => {
                tracing::warn!("Rate limit exceeded: {}", msg);
                (StatusCode::TOO_MANY_REQUESTS, msg.clone(), msg)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone(), msg)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, msg.clone(), msg)
            }
        };

        (status, Json(error_body(status, message, detail))).into_response()
    }
}

/// Build the error envelope for a status code.
///
/// Server-class messages are replaced with a generic message in production;
/// diagnostic fields are attached outside production.
fn error_body(status: StatusCode, message: String, detail: String) -> ErrorBody {
    let class = if status.is_server_error() {
        "error"
    } else {
        "fail"
    };

    let production = deployment_mode() == DeploymentMode::Production;

    let message = if production && status.is_server_error() {
        "Something went wrong".to_string()
    } else {
        message
    };

    let (error, stack) = if production {
        (None, None)
    } else {
        (
            Some(detail),
            Some(Backtrace::force_capture().to_string()),
        )
    };

    ErrorBody {
        status: class,
        message,
        error,
        stack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_use_fail_status() {
        let body = error_body(
            StatusCode::NOT_FOUND,
            "Item not found".to_string(),
            "Item not found".to_string(),
        );
        assert_eq!(body.status, "fail");
        assert_eq!(body.message, "Item not found");
    }

    #[test]
    fn test_server_errors_use_error_status() {
        let body = error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
            "boom".to_string(),
        );
        assert_eq!(body.status, "error");
        // default mode is production: message sanitized, no diagnostics
        assert_eq!(body.message, "Something went wrong");
        assert!(body.error.is_none());
        assert!(body.stack.is_none());
    }

    #[test]
    fn test_rate_limit_maps_to_429() {
        let response = AppError::TooManyRequests("Too many requests".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Item not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response =
            AppError::Validation("name must be between 3 and 100 characters".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
