//! Field-level constraint checkers
//!
//! The service documents a small set of reusable constraints: names are
//! single-line printable strings of 1-255 characters, descriptions allow up
//! to 2048 characters, identifiers are limited to a URL-safe alphabet.
//! Patterns are compiled once and shared.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Printable characters plus tab; excludes control characters and newlines.
static SINGLE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[\x{0020}-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}\t]*\z")
        .expect("single-line pattern compiles")
});

/// Alphanumeric plus `-` and `_`, used for catalog and version identifiers.
static ID_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[a-zA-Z0-9\-_]+\z").expect("id pattern compiles"));

pub const NAME_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 2048;

/// Character count must fall within `min..=max`.
pub fn check_len(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::Length {
            field,
            len,
            min,
            max,
        });
    }
    Ok(())
}

/// Value must contain only single-line printable characters.
pub fn check_single_line(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !SINGLE_LINE.is_match(value) {
        return Err(ValidationError::Pattern { field });
    }
    Ok(())
}

/// A required name: 1-255 single-line printable characters.
pub fn check_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    check_len(field, value, 1, NAME_MAX)?;
    check_single_line(field, value)
}

/// An optional name, checked only when present.
pub fn check_opt_name(
    field: &'static str,
    value: Option<&String>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => check_name(field, v),
        None => Ok(()),
    }
}

/// A description: up to 2048 single-line printable characters.
pub fn check_description(field: &'static str, value: &str) -> Result<(), ValidationError> {
    check_len(field, value, 0, DESCRIPTION_MAX)?;
    check_single_line(field, value)
}

pub fn check_opt_description(
    field: &'static str,
    value: Option<&String>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => check_description(field, v),
        None => Ok(()),
    }
}

/// An identifier: 1-255 characters from the URL-safe alphabet.
pub fn check_id(field: &'static str, value: &str) -> Result<(), ValidationError> {
    check_len(field, value, 1, NAME_MAX)?;
    if !ID_CHARS.is_match(value) {
        return Err(ValidationError::Pattern { field });
    }
    Ok(())
}

pub fn check_opt_id(field: &'static str, value: Option<&String>) -> Result<(), ValidationError> {
    match value {
        Some(v) => check_id(field, v),
        None => Ok(()),
    }
}

/// Collection size bound.
pub fn check_list_max(
    field: &'static str,
    len: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if len > max {
        return Err(ValidationError::TooManyItems { field, len, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds() {
        assert!(check_name("Name", "sales_db").is_ok());
        assert!(check_name("Name", "").is_err());
        assert!(check_name("Name", &"x".repeat(256)).is_err());
        assert!(check_name("Name", &"x".repeat(255)).is_ok());
    }

    #[test]
    fn test_single_line_rejects_newline() {
        assert!(check_single_line("Description", "one line\twith tab").is_ok());
        assert!(check_single_line("Description", "two\nlines").is_err());
    }

    #[test]
    fn test_id_alphabet() {
        assert!(check_id("CatalogId", "123456789012").is_ok());
        assert!(check_id("CatalogId", "my-catalog_01").is_ok());
        assert!(check_id("CatalogId", "bad id").is_err());
        assert!(check_id("CatalogId", "").is_err());
    }

    #[test]
    fn test_list_bound() {
        assert!(check_list_max("PartitionInputList", 100, 100).is_ok());
        assert!(check_list_max("PartitionInputList", 101, 100).is_err());
    }
}
