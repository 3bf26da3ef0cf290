//! Shared types for the catalog service
//!
//! Common types used by the server and by integration tests: the error
//! taxonomy, response envelopes, and the data models that cross the HTTP
//! boundary.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Product, SheetEntry};
pub use response::{Ack, ErrorBody};
