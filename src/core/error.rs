use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Missing or unusable client input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payment gateway errors (failed call or malformed gateway response)
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Failures while handling an inbound gateway notification.
///
/// These never reach the sender: the callback endpoint acknowledges every
/// delivery so the gateway does not keep retrying.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Malformed notification payload: {0}")]
    MalformedPayload(String),

    #[error("Notification payload exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Missing notification signature")]
    MissingSignature,

    #[error("Invalid notification signature")]
    InvalidSignature,
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.client_message(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        AppError::Gateway(msg.into())
    }

    /// Message placed in the `error` field of the JSON body, without the
    /// category prefix used in logs.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Gateway(msg) | AppError::Configuration(msg) => {
                msg.clone()
            }
        }
    }
}
