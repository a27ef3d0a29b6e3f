//! Query-string extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::collect_violations;

/// Query extractor that deserializes the query string and then runs the
/// DTO's declared validation rules, rejecting with one aggregated 400
/// before the handler runs.
///
/// Non-numeric values for numeric fields are rejected by deserialization;
/// out-of-range values by validation.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;

        data.validate()
            .map_err(|e| AppError::Validation(collect_violations(&e)))?;

        Ok(ValidatedQuery(data))
    }
}
