//! Unified error codes for the catalog service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Configuration errors
//! - 2xxx: Backing store errors
//! - 3xxx: Media host errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and stable log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing or empty
    RequiredField = 7,

    // ==================== 1xxx: Configuration ====================
    /// Required configuration value is missing
    ConfigMissing = 1001,
    /// Configuration value present but unusable
    ConfigInvalid = 1002,
    /// Credential material could not be parsed
    CredentialInvalid = 1003,

    // ==================== 2xxx: Backing store ====================
    /// Reading the configured range failed
    StoreReadFailed = 2001,
    /// Appending a row failed
    StoreAppendFailed = 2002,
    /// Obtaining an access token for the store failed
    StoreAuthFailed = 2003,

    // ==================== 3xxx: Media host ====================
    /// Media host rejected or failed the upload
    UploadFailed = 3001,
    /// Upload attempted without a configured media host
    UploadRejected = 3002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Serialization / deserialization failure
    SerializationError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ConfigMissing => "Required configuration missing",
            Self::ConfigInvalid => "Configuration invalid",
            Self::CredentialInvalid => "Credential material invalid",
            Self::StoreReadFailed => "Failed to fetch from backing store",
            Self::StoreAppendFailed => "Failed to append to backing store",
            Self::StoreAuthFailed => "Backing store authentication failed",
            Self::UploadFailed => "Media upload failed",
            Self::UploadRejected => "Media upload not available",
            Self::InternalError => "Internal server error",
            Self::SerializationError => "Serialization error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            5 => Self::InvalidRequest,
            7 => Self::RequiredField,
            1001 => Self::ConfigMissing,
            1002 => Self::ConfigInvalid,
            1003 => Self::CredentialInvalid,
            2001 => Self::StoreReadFailed,
            2002 => Self::StoreAppendFailed,
            2003 => Self::StoreAuthFailed,
            3001 => Self::UploadFailed,
            3002 => Self::UploadRejected,
            9001 => Self::InternalError,
            9002 => Self::SerializationError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
