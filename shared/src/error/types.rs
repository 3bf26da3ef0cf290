//! Application error type

use super::codes::ErrorCode;
use crate::response::ErrorBody;
use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// The primary error type of the service:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending field, underlying cause, etc.)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Attach the underlying cause string (surfaced as `detail` on the wire)
    pub fn with_cause(self, cause: impl Into<String>) -> Self {
        self.with_detail("cause", cause.into())
    }

    /// Get the underlying cause string, if one was attached
    pub fn cause(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.get("cause"))
            .and_then(|v| v.as_str())
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a missing-required-field error
    pub fn required_field(field: impl Into<String>) -> Self {
        let f = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{f} is required"))
            .with_detail("field", f)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{r} not found")).with_detail("resource", r)
    }

    /// Create a missing-configuration error
    pub fn config_missing(name: impl Into<String>) -> Self {
        let n = name.into();
        Self::with_message(ErrorCode::ConfigMissing, format!("{n} is not set"))
            .with_detail("name", n)
    }

    /// Create an invalid-configuration error
    pub fn config_invalid(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigInvalid, msg)
    }

    /// Create an invalid-credential error
    pub fn credential_invalid(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::CredentialInvalid, msg)
    }

    /// Create a store read error
    pub fn store_read(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreReadFailed, msg)
    }

    /// Create a store append error
    pub fn store_append(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreAppendFailed, msg)
    }

    /// Create a store auth error
    pub fn store_auth(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreAuthFailed, msg)
    }

    /// Create a media upload error
    pub fn upload(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::UploadFailed, msg)
    }

    /// Create an upload-rejected error (no media host configured)
    pub fn upload_rejected(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::UploadRejected, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // Non-caller errors are logged with full context before the
        // message is flattened into the wire envelope
        if status.is_server_error() {
            tracing::error!(
                code = %self.code,
                category = self.code.category().name(),
                message = %self.message,
                cause = self.cause().unwrap_or(""),
                "Request failed"
            );
        }

        let body = ErrorBody {
            error: self.message,
            detail: self
                .details
                .as_ref()
                .and_then(|d| d.get("cause"))
                .and_then(|v| v.as_str())
                .map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}
