//! The uniform success envelope wrapped around every 2xx payload.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success envelope.
///
/// Every successful response carries the same shape:
///
/// ```json
/// {
///   "status": "success",
///   "message": "Item created successfully",
///   "data": { ... }
/// }
/// ```
///
/// `data` is always present; operations without a payload (delete)
/// serialize it as `null`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `"success"`; failures use the error envelope instead
    pub status: &'static str,
    /// Human-readable outcome description
    pub message: String,
    /// Payload: object, array, or null
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Envelope with a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data: Some(data),
        }
    }

    /// Envelope with `data: null` (e.g. after a delete).
    pub fn no_data(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success("Item retrieved successfully", serde_json::json!({"id": 1}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "Item retrieved successfully");
        assert_eq!(value["data"]["id"], 1);
    }

    #[test]
    fn test_no_data_serializes_null() {
        let response = ApiResponse::<serde_json::Value>::no_data("Item deleted successfully");
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["data"].is_null());
        // the key itself must be present, not skipped
        assert!(value.as_object().unwrap().contains_key("data"));
    }
}
