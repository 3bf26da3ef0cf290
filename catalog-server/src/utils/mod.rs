//! Utility module - logging and validation helpers

pub mod logger;
pub mod validation;

// Re-export error types for handler code
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use logger::{init_logger, init_logger_with_file};
