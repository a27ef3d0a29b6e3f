//! Request-body extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{Form, FromRequest, Json, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::collect_violations;

/// Body extractor that deserializes JSON or URL-encoded payloads (selected
/// by Content-Type) and then runs the DTO's declared validation rules.
///
/// All violations found in one pass are aggregated into a single 400
/// rejection naming every failing field; the handler is never invoked on
/// invalid input.
///
/// # Example
/// ```ignore
/// use axum::{routing::post, Router};
/// use axum_helpers::extractors::ValidatedBody;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(length(min = 3, max = 100))]
///     name: String,
/// }
///
/// async fn create(ValidatedBody(input): ValidatedBody<CreateItem>) -> String {
///     format!("creating {}", input.name)
/// }
///
/// let app = Router::new().route("/items", post(create));
/// ```
pub struct ValidatedBody<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedBody<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let data = if is_form {
            let Form(data) = Form::<T>::from_request(req, state).await?;
            data
        } else {
            let Json(data) = Json::<T>::from_request(req, state).await?;
            data
        };

        data.validate()
            .map_err(|e| AppError::Validation(collect_violations(&e)))?;

        Ok(ValidatedBody(data))
    }
}
