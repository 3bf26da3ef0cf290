//! Input validation helpers
//!
//! One validation policy everywhere: trim the value, reject when empty
//! after trimming. Nothing else is checked — `price` in particular is an
//! opaque string the backing store interprets on its own.

use shared::error::{AppError, AppResult};

/// Validate a required text field and return the trimmed value.
pub fn validate_required_text<'a>(value: &'a str, field: &str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required_field(field));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_accepts_and_trims() {
        assert_eq!(validate_required_text(" Pen ", "name").unwrap(), "Pen");
        assert_eq!(validate_required_text("10", "price").unwrap(), "10");
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        for value in ["", "   ", "\t\n"] {
            let err = validate_required_text(value, "name").unwrap_err();
            assert_eq!(err.code, ErrorCode::RequiredField);
            assert_eq!(err.message, "name is required");
        }
    }
}
