use crate::core::AppError;
use actix_web::{error::JsonPayloadError, HttpRequest};

/// Convert JSON extractor failures into the relay's `{success, error}` body
///
/// Registered through `web::JsonConfig::error_handler`, so a malformed or
/// mistyped body answers 400 in the same shape as a missing field.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), error = %err, "Rejected JSON payload");

    AppError::validation(format!("Invalid request body: {}", err)).into()
}
