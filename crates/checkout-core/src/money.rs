//! Amount Parsing
//!
//! User-entered amounts are converted to integer minor currency units
//! before they reach the wire. Parsing goes through `rust_decimal`; the
//! payment form never handles floats.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{CheckoutError, Result};

/// Parse an amount string ("12.34") into minor units (1234).
///
/// Rejects non-numeric input, more than two fractional digits, and amounts
/// that are not strictly positive.
pub fn parse_amount(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let amount = Decimal::from_str(trimmed).map_err(|_| {
        CheckoutError::Validation(format!("'{trimmed}' is not a valid amount"))
    })?;

    if amount.scale() > 2 {
        return Err(CheckoutError::Validation(
            "Amounts support at most two decimal places".into(),
        ));
    }
    if amount <= Decimal::ZERO {
        return Err(CheckoutError::Validation(
            "Please enter a valid amount greater than 0".into(),
        ));
    }

    (amount * Decimal::from(100)).to_i64().ok_or_else(|| {
        CheckoutError::Validation(format!("'{trimmed}' is out of range"))
    })
}

/// Format minor units for display ("1234" -> "12.34")
pub fn format_minor(minor: i64) -> String {
    format!("{}.{:02}", minor / 100, (minor % 100).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_places_accepted() {
        assert_eq!(parse_amount("12.34").unwrap(), 1234);
    }

    #[test]
    fn test_three_decimal_places_rejected() {
        assert!(parse_amount("12.345").is_err());
    }

    #[test]
    fn test_whole_and_single_decimal() {
        assert_eq!(parse_amount("12").unwrap(), 1200);
        assert_eq!(parse_amount("7.5").unwrap(), 750);
    }

    #[test]
    fn test_non_positive_rejected() {
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("0.00").is_err());
        assert!(parse_amount("-5").is_err());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12.3.4").is_err());
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        assert_eq!(parse_amount(" 3.99 ").unwrap(), 399);
    }

    #[test]
    fn test_format_minor() {
        assert_eq!(format_minor(1234), "12.34");
        assert_eq!(format_minor(500), "5.00");
        assert_eq!(format_minor(7), "0.07");
    }
}
