//! Naming rules shared by folder and file creation.
//!
//! A stored name never contains a path separator, which keeps every path
//! unambiguous: `path` is always the parent path, `/`, and the name.

use explorer_core::error::AppError;
use explorer_core::result::AppResult;

/// Longest stored name, in characters. Matches the `VARCHAR(255)` columns.
pub const MAX_NAME_LEN: usize = 255;

/// Replace each run of `/` or `\` with a single `-` and trim surrounding
/// whitespace. Returns `None` when nothing is left.
pub fn sanitize_name(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut in_separator_run = false;

    for ch in raw.chars() {
        if ch == '/' || ch == '\\' {
            if !in_separator_run {
                out.push('-');
                in_separator_run = true;
            }
        } else {
            out.push(ch);
            in_separator_run = false;
        }
    }

    let trimmed = out.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// [`sanitize_name`], failing with a validation error carrying `message`
/// when nothing is left. Names longer than [`MAX_NAME_LEN`] are rejected.
pub fn require_name(raw: &str, message: &str) -> AppResult<String> {
    let name = sanitize_name(raw).ok_or_else(|| AppError::validation(message))?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name)
}

/// Join a parent path and a sanitized name. Roots have no parent path.
pub fn child_path(parent_path: Option<&str>, name: &str) -> String {
    match parent_path {
        Some(parent) => format!("{parent}/{name}"),
        None => format!("/{name}"),
    }
}

/// Lowercased extension of `name`, taken after its final `.`.
///
/// A dot in first position (hidden-file convention) or in last position
/// does not start an extension.
pub fn derive_file_type(name: &str) -> Option<String> {
    let dot = name.rfind('.')?;
    if dot == 0 || dot == name.len() - 1 {
        return None;
    }
    Some(name[dot + 1..].to_lowercase())
}

/// Resolve the stored type: an explicit value (including an explicit
/// `None`) wins over the derived extension.
pub fn resolve_file_type(explicit: Option<Option<String>>, name: &str) -> Option<String> {
    match explicit {
        Some(given) => given,
        None => derive_file_type(name),
    }
}

/// Normalize a requested size to whole bytes.
///
/// Missing and non-finite values become 0; finite values are truncated
/// toward zero. Negative sizes are rejected.
pub fn normalize_file_size(size: Option<f64>) -> AppResult<i64> {
    let Some(size) = size.filter(|s| s.is_finite()) else {
        return Ok(0);
    };
    let whole = size.trunc();
    if whole < 0.0 {
        return Err(AppError::validation("File size cannot be negative"));
    }
    // `i64::MAX as f64` rounds up to 2^63, which no i64 can hold.
    if whole >= i64::MAX as f64 {
        return Err(AppError::validation("File size is too large"));
    }
    Ok(whole as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_core::ErrorKind;

    #[test]
    fn test_sanitize_collapses_separator_runs() {
        assert_eq!(sanitize_name("a/b").as_deref(), Some("a-b"));
        assert_eq!(sanitize_name("a//\\/b").as_deref(), Some("a-b"));
        assert_eq!(sanitize_name("a\\b/c").as_deref(), Some("a-b-c"));
        assert_eq!(sanitize_name("/leading").as_deref(), Some("-leading"));
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_name("  Invoices \t").as_deref(), Some("Invoices"));
        assert_eq!(sanitize_name(" a / b ").as_deref(), Some("a - b"));
    }

    #[test]
    fn test_sanitize_rejects_blank() {
        assert_eq!(sanitize_name(""), None);
        assert_eq!(sanitize_name("   "), None);
        let err = require_name(" \n ", "Folder name required").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Folder name required");
    }

    #[test]
    fn test_name_length_limit() {
        let longest = "x".repeat(MAX_NAME_LEN);
        assert_eq!(require_name(&longest, "Folder name required").unwrap(), longest);

        let err = require_name(&"x".repeat(MAX_NAME_LEN + 1), "Folder name required").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Name must be at most 255 characters");

        // Counted in characters, after trimming.
        assert!(require_name(&"é".repeat(MAX_NAME_LEN), "File name required").is_ok());
        assert!(require_name(&format!("  {longest}  "), "File name required").is_ok());
    }

    #[test]
    fn test_separator_only_name_is_a_hyphen() {
        assert_eq!(sanitize_name("///").as_deref(), Some("-"));
    }

    #[test]
    fn test_child_path() {
        assert_eq!(child_path(None, "Documents"), "/Documents");
        assert_eq!(
            child_path(Some("/Documents"), "Invoices"),
            "/Documents/Invoices"
        );
    }

    #[test]
    fn test_derive_file_type() {
        assert_eq!(derive_file_type("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(derive_file_type("Photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(derive_file_type(".gitignore"), None);
        assert_eq!(derive_file_type("notes."), None);
        assert_eq!(derive_file_type("README"), None);
        assert_eq!(derive_file_type("a.b."), None);
        assert_eq!(derive_file_type("..x").as_deref(), Some("x"));
    }

    #[test]
    fn test_explicit_file_type_wins() {
        assert_eq!(
            resolve_file_type(Some(Some("Markdown".into())), "notes.txt").as_deref(),
            Some("Markdown")
        );
        assert_eq!(resolve_file_type(Some(None), "notes.txt"), None);
        assert_eq!(
            resolve_file_type(None, "notes.txt").as_deref(),
            Some("txt")
        );
    }

    #[test]
    fn test_normalize_file_size() {
        assert_eq!(normalize_file_size(None).unwrap(), 0);
        assert_eq!(normalize_file_size(Some(f64::NAN)).unwrap(), 0);
        assert_eq!(normalize_file_size(Some(f64::INFINITY)).unwrap(), 0);
        assert_eq!(normalize_file_size(Some(2048.0)).unwrap(), 2048);
        assert_eq!(normalize_file_size(Some(10.9)).unwrap(), 10);
        assert_eq!(normalize_file_size(Some(-0.5)).unwrap(), 0);
        assert_eq!(
            normalize_file_size(Some(-1.0)).unwrap_err().kind,
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_file_size_upper_bound() {
        let largest_below = 9_223_372_036_854_774_784.0; // 2^63 - 1024
        assert_eq!(
            normalize_file_size(Some(largest_below)).unwrap(),
            9_223_372_036_854_774_784
        );

        let err = normalize_file_size(Some(9_223_372_036_854_775_808.0)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "File size is too large");
        assert_eq!(
            normalize_file_size(Some(1e300)).unwrap_err().kind,
            ErrorKind::Validation
        );
    }
}
