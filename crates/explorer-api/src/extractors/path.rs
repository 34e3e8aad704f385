//! Typed path parameter helpers.

use explorer_core::error::AppError;

/// Parses a numeric row ID from a path segment, failing with `message`.
pub fn parse_id(segment: &str, message: &str) -> Result<i64, AppError> {
    segment
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_core::ErrorKind;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "Invalid folder id").unwrap(), 42);
        let err = parse_id("abc", "Invalid folder id").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Invalid folder id");
        assert!(parse_id("1.5", "Invalid file id").is_err());
        assert!(parse_id("", "Invalid file id").is_err());
    }
}
