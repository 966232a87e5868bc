//! Input validation primitives.
//!
//! Turns raw operator text into numbers, replacing verbose
//! `parse().map_err(|_| Error::validation_invalid_input(..))` chains.

use crate::error::{Error, Result};

/// Parse a signed integer after trimming surrounding whitespace.
pub fn parse_int(value: &str, field: &str, problem: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::validation_invalid_input(field, problem, Some(value.to_string())))
}

/// Parse a decimal number after trimming surrounding whitespace.
///
/// Accepts the usual float spellings, including exponents, `inf` and `nan`.
pub fn parse_float(value: &str, field: &str, problem: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::validation_invalid_input(field, problem, Some(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_trims_whitespace() {
        assert_eq!(parse_int("  -3 ", "n", "msg").unwrap(), -3);
        assert_eq!(parse_int("+7", "n", "msg").unwrap(), 7);
    }

    #[test]
    fn parse_int_rejects_decimals() {
        let err = parse_int("4.5", "n", "not an integer").unwrap_err();
        assert_eq!(err.message, "not an integer");
        assert_eq!(err.details["value"], "4.5");
    }

    #[test]
    fn parse_float_accepts_integers_and_exponents() {
        assert_eq!(parse_float("7", "x", "msg").unwrap(), 7.0);
        assert_eq!(parse_float(" 8.5\n", "x", "msg").unwrap(), 8.5);
        assert_eq!(parse_float("1e3", "x", "msg").unwrap(), 1000.0);
    }

    #[test]
    fn parse_float_rejects_words() {
        assert!(parse_float("eight", "x", "msg").is_err());
        assert!(parse_float("", "x", "msg").is_err());
    }
}
