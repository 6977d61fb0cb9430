//! Monetary value rules.
//!
//! Every monetary field is an exact decimal with at most 10 total digits and
//! 2 fractional digits. Binary floats are never acceptable here; rounding a
//! price is a constraint violation, not a convenience.

use rust_decimal::Decimal;

use crate::constraint::ConstraintViolation;

/// Maximum total digits (integer + fractional) in a monetary value.
pub const MAX_DIGITS: u32 = 10;
/// Maximum fractional digits in a monetary value.
pub const SCALE: u32 = 2;

/// Check a monetary value against the 10-digit / 2-fractional contract.
///
/// Trailing zeros do not count against the scale: `3.50` and `3.5` are the
/// same value and both pass.
pub fn check(field: &'static str, value: Decimal) -> Result<(), ConstraintViolation> {
    let normalized = value.normalize();
    if normalized.scale() > SCALE {
        return Err(ConstraintViolation::ScaleExceeded { field });
    }
    // 8 integer digits leave room for the 2 fractional ones.
    if normalized.abs() >= Decimal::new(100_000_000, 0) {
        return Err(ConstraintViolation::DigitsExceeded { field });
    }
    Ok(())
}

/// Check an optional monetary value; `None` always passes.
pub fn check_opt(field: &'static str, value: Option<Decimal>) -> Result<(), ConstraintViolation> {
    match value {
        Some(v) => check(field, v),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_two_fractional_digits() {
        assert!(check("subtotal", Decimal::new(1050, 2)).is_ok()); // 10.50
    }

    #[test]
    fn should_accept_trailing_zero_scale() {
        // 3.500 normalizes to 3.5
        assert!(check("unit_price", Decimal::new(3500, 3)).is_ok());
    }

    #[test]
    fn should_reject_three_fractional_digits() {
        assert_eq!(
            check("subtotal", Decimal::new(10501, 3)), // 10.501
            Err(ConstraintViolation::ScaleExceeded { field: "subtotal" })
        );
    }

    #[test]
    fn should_accept_eight_integer_digits() {
        // 99_999_999.99
        assert!(check("total_amount", Decimal::new(9_999_999_999, 2)).is_ok());
    }

    #[test]
    fn should_reject_nine_integer_digits() {
        // 100_000_000.00
        assert_eq!(
            check("total_amount", Decimal::new(10_000_000_000, 2)),
            Err(ConstraintViolation::DigitsExceeded {
                field: "total_amount"
            })
        );
    }

    #[test]
    fn should_reject_negative_value_exceeding_digits() {
        assert!(check("discount_amount", Decimal::new(-10_000_000_000, 2)).is_err());
    }

    #[test]
    fn should_always_accept_absent_optional_value() {
        assert!(check_opt("final_price", None).is_ok());
    }

    #[test]
    fn should_reject_present_optional_value_with_bad_scale() {
        assert!(check_opt("final_price", Some(Decimal::new(1, 3))).is_err());
    }
}
