use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};

use super::AppError;

/// Catch-all handler for unmatched method+path combinations.
///
/// Registered as both the router fallback and the method-not-allowed
/// fallback so every unrouted request gets the 404 envelope before any
/// business logic runs.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    AppError::NotFound(format!("Cannot {} {}", method, uri.path())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_not_found_names_method_and_path() {
        let response = not_found(Method::GET, "/nope".parse().unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
