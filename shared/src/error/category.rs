//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Configuration errors
/// - 2xxx: Backing store errors
/// - 3xxx: Media host errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx) — validation, not found
    General,
    /// Configuration errors (1xxx) — fatal at startup/first use
    Config,
    /// Backing store errors (2xxx) — read/append against the sheet
    Store,
    /// Media host errors (3xxx) — image upload
    Media,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Config,
            2000..3000 => Self::Store,
            3000..4000 => Self::Media,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Config => "config",
            Self::Store => "store",
            Self::Media => "media",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(7), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Config);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::Config);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Store);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Media);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::RequiredField.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ConfigMissing.category(), ErrorCategory::Config);
        assert_eq!(
            ErrorCode::CredentialInvalid.category(),
            ErrorCategory::Config
        );
        assert_eq!(ErrorCode::StoreReadFailed.category(), ErrorCategory::Store);
        assert_eq!(ErrorCode::UploadFailed.category(), ErrorCategory::Media);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Store).unwrap();
        assert_eq!(json, "\"store\"");

        let category: ErrorCategory = serde_json::from_str("\"media\"").unwrap();
        assert_eq!(category, ErrorCategory::Media);
    }
}
