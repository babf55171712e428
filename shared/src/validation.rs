use chrono::{DateTime, NaiveDate};
use thiserror::Error;

/// Why a form field was rejected
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldValidationError {
    #[error("amount is required")]
    EmptyAmount,
    #[error("'{0}' is not a valid amount")]
    InvalidAmountFormat(String),
    #[error("amount cannot be zero")]
    ZeroAmount,
    #[error("date is required")]
    EmptyDate,
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
}

/// Parses a non-zero, finite amount typed into a form field.
pub fn parse_amount(input: &str) -> Result<f64, FieldValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldValidationError::EmptyAmount);
    }

    let amount: f64 = trimmed
        .parse()
        .map_err(|_| FieldValidationError::InvalidAmountFormat(trimmed.to_string()))?;

    if !amount.is_finite() {
        return Err(FieldValidationError::InvalidAmountFormat(trimmed.to_string()));
    }
    if amount == 0.0 {
        return Err(FieldValidationError::ZeroAmount);
    }

    Ok(amount)
}

pub fn validate_amount(input: &str) -> bool {
    parse_amount(input).is_ok()
}

/// Parses a date input value (YYYY-MM-DD) or a full RFC 3339 timestamp.
pub fn parse_date(input: &str) -> Result<NaiveDate, FieldValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldValidationError::EmptyDate);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| FieldValidationError::InvalidDate(trimmed.to_string()))
}

pub fn validate_date(input: &str) -> bool {
    parse_date(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_amounts() {
        assert_eq!(parse_amount("250"), Ok(250.0));
        assert_eq!(parse_amount(" -19.99 "), Ok(-19.99));
        assert!(validate_amount("0.01"));
    }

    #[test]
    fn test_rejected_amounts() {
        assert_eq!(parse_amount(""), Err(FieldValidationError::EmptyAmount));
        assert_eq!(parse_amount("   "), Err(FieldValidationError::EmptyAmount));
        assert_eq!(parse_amount("0"), Err(FieldValidationError::ZeroAmount));
        assert_eq!(parse_amount("-0.0"), Err(FieldValidationError::ZeroAmount));
        assert_eq!(
            parse_amount("12abc"),
            Err(FieldValidationError::InvalidAmountFormat("12abc".to_string()))
        );
        assert!(!validate_amount("NaN"));
        assert!(!validate_amount("inf"));
    }

    #[test]
    fn test_valid_dates() {
        assert_eq!(
            parse_date("2025-06-15"),
            Ok(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
        );
        assert_eq!(
            parse_date("2025-06-15T10:30:00+05:30"),
            Ok(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
        );
        assert!(validate_date("2024-02-29"));
    }

    #[test]
    fn test_rejected_dates() {
        assert_eq!(parse_date(""), Err(FieldValidationError::EmptyDate));
        assert!(!validate_date("2023-02-29"));
        assert!(!validate_date("15/06/2025"));
        assert!(!validate_date("not a date"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldValidationError::ZeroAmount.to_string(), "amount cannot be zero");
        assert_eq!(
            FieldValidationError::InvalidDate("x".to_string()).to_string(),
            "'x' is not a valid date"
        );
    }
}
