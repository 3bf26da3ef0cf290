//! Unified error system for the catalog service
//!
//! This module provides the error handling shared by every layer:
//! - [`ErrorCode`]: standardized error codes for all failure modes
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (validation, not found)
//! - 1xxx: Configuration errors (credentials, target identifiers)
//! - 2xxx: Backing store errors (read/append against the sheet)
//! - 3xxx: Media host errors (image upload)
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Validation failure with the offending field attached
//! let err = AppError::required_field("name");
//! assert_eq!(err.code, ErrorCode::RequiredField);
//!
//! // Store failure carrying the underlying cause string
//! let err = AppError::store_append("Failed to save product")
//!     .with_cause("HTTP 403: insufficient permissions");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
