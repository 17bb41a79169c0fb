//! Validation utilities for Web API DTOs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::web::error::ApiError;

/// A JSON extractor that validates the request body.
///
/// Deserializes the request body as JSON and then validates it using the
/// `validator` crate. A malformed body becomes a 400; a validation failure
/// becomes a 422 with field-level error details. Validation happens before
/// the handler runs, so no store mutation can precede it.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))?;

        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedJson(value))
    }
}

// ============================================================================
// Custom Validators
// ============================================================================

/// Check a field's character count after trimming surrounding whitespace.
///
/// Counts Unicode characters, not bytes, so multi-byte agent names get the
/// same budget as ASCII ones.
fn trimmed_length(
    value: &str,
    min: usize,
    max: usize,
    code: &'static str,
) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(ValidationError::new(code)
            .with_message(format!("Must be between {min} and {max} characters").into()));
    }
    Ok(())
}

/// Agent identifier: 2-50 characters after trimming.
pub fn agent_length(value: &str) -> Result<(), ValidationError> {
    trimmed_length(value, 2, 50, "agent_length")
}

/// Post title: 2-120 characters after trimming.
pub fn title_length(value: &str) -> Result<(), ValidationError> {
    trimmed_length(value, 2, 120, "title_length")
}

/// Post body: 1-5000 characters after trimming.
pub fn post_body_length(value: &str) -> Result<(), ValidationError> {
    trimmed_length(value, 1, 5000, "post_body_length")
}

/// Comment body: 1-2000 characters after trimming.
pub fn comment_body_length(value: &str) -> Result<(), ValidationError> {
    trimmed_length(value, 1, 2000, "comment_body_length")
}
