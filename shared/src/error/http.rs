//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 400 Bad Request — caller-visible validation failures
            Self::ValidationFailed | Self::RequiredField | Self::InvalidRequest => {
                StatusCode::BAD_REQUEST
            }

            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error — configuration, downstream and
            // system failures are all opaque to the caller
            Self::Unknown
            | Self::ConfigMissing
            | Self::ConfigInvalid
            | Self::CredentialInvalid
            | Self::StoreReadFailed
            | Self::StoreAppendFailed
            | Self::StoreAuthFailed
            | Self::UploadFailed
            | Self::UploadRejected
            | Self::InternalError
            | Self::SerializationError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(
            ErrorCode::RequiredField.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::StoreAppendFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::UploadFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::ConfigMissing.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
