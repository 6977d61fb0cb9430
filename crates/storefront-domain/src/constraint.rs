//! Field-constraint violations shared by every record type.
//!
//! The schema declares constraints; enforcement happens wherever a record is
//! constructed or mutated. Violations are reported to the caller as-is, never
//! coerced away.

use thiserror::Error;

/// A declared field constraint was violated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstraintViolation {
    #[error("{field} is {actual} characters, maximum is {max}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("{field} must be at least 1, got {actual}")]
    QuantityBelowMinimum { field: &'static str, actual: i32 },
    #[error("{field} has more than 2 fractional digits")]
    ScaleExceeded { field: &'static str },
    #[error("{field} exceeds 10 total digits")]
    DigitsExceeded { field: &'static str },
    #[error("{value:?} is not a valid {field}")]
    UnknownValue { field: &'static str, value: String },
}

/// Check a required string field against its declared maximum length.
pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ConstraintViolation> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ConstraintViolation::TooLong { field, max, actual });
    }
    Ok(())
}

/// Check an optional string field; `None` always passes.
pub fn max_len_opt(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ConstraintViolation> {
    match value {
        Some(v) => max_len(field, v, max),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_string_at_maximum_length() {
        assert!(max_len("name", &"a".repeat(100), 100).is_ok());
    }

    #[test]
    fn should_reject_string_over_maximum_length() {
        assert_eq!(
            max_len("name", &"a".repeat(101), 100),
            Err(ConstraintViolation::TooLong {
                field: "name",
                max: 100,
                actual: 101,
            })
        );
    }

    #[test]
    fn should_count_characters_not_bytes() {
        // 6 chars, 18 bytes in UTF-8
        assert!(max_len("name", "ねこかわいい", 6).is_ok());
    }

    #[test]
    fn should_always_accept_absent_optional_field() {
        assert!(max_len_opt("notes", None, 1).is_ok());
    }

    #[test]
    fn should_reject_present_optional_field_over_maximum() {
        assert!(max_len_opt("notes", Some("abcd"), 3).is_err());
    }
}
