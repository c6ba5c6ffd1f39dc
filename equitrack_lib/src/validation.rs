use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EquitrackError;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_ADDRESS_LENGTH: usize = 200;

pub const CPF_DIGITS: usize = 11;
pub const CNPJ_DIGITS: usize = 14;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, EquitrackError> {
    if input.len() > max_len {
        return Err(EquitrackError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(EquitrackError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a person or company name: required, length-capped, control chars stripped.
pub fn validate_name(input: &str) -> Result<String, EquitrackError> {
    sanitize_text(input, MAX_NAME_LENGTH)
}

/// Validate a street address: required, length-capped, control chars stripped.
pub fn validate_address(input: &str) -> Result<String, EquitrackError> {
    sanitize_text(input, MAX_ADDRESS_LENGTH)
}

/// Strip every non-digit character. Mirrors the input masking the forms
/// apply before a tax id is validated or submitted.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Validate a CPF: exactly 11 digits after stripping punctuation.
/// Returns the bare digit string the API expects.
pub fn validate_cpf(input: &str) -> Result<String, EquitrackError> {
    let digits = digits_only(input);
    if digits.len() == CPF_DIGITS {
        Ok(digits)
    } else {
        Err(EquitrackError::InvalidInput(format!(
            "CPF must have exactly {} digits, got {}",
            CPF_DIGITS,
            digits.len()
        )))
    }
}

/// Validate a CNPJ: exactly 14 digits after stripping punctuation.
/// Returns the bare digit string the API expects.
pub fn validate_cnpj(input: &str) -> Result<String, EquitrackError> {
    let digits = digits_only(input);
    if digits.len() == CNPJ_DIGITS {
        Ok(digits)
    } else {
        Err(EquitrackError::InvalidInput(format!(
            "CNPJ must have exactly {} digits, got {}",
            CNPJ_DIGITS,
            digits.len()
        )))
    }
}

/// Validate an email address shape: one `@` with a non-empty local part and
/// a domain containing a dot, no whitespace. The server owns real validation.
pub fn validate_email(input: &str) -> Result<String, EquitrackError> {
    let trimmed = input.trim();
    let invalid = || {
        EquitrackError::InvalidInput(format!("'{}' is not a valid email address", trimmed))
    };
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(invalid());
    }
    Ok(trimmed.to_string())
}

/// Validate an equity percentage: in the open interval (0, 100], at most two
/// decimal places. This is the only client-side bound on a purchase; whether
/// the company still has capacity is the server's call.
pub fn validate_percentage(value: Decimal) -> Result<Decimal, EquitrackError> {
    if value <= Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(EquitrackError::InvalidInput(format!(
            "percentage must be greater than 0 and at most 100, got {}",
            value
        )));
    }
    if value.normalize().scale() > 2 {
        return Err(EquitrackError::InvalidInput(format!(
            "percentage supports at most two decimal places, got {}",
            value
        )));
    }
    Ok(value)
}

/// Parse and validate a percentage from user input.
pub fn parse_percentage(input: &str) -> Result<Decimal, EquitrackError> {
    let trimmed = input.trim();
    let value = Decimal::from_str(trimmed).map_err(|_| {
        EquitrackError::InvalidInput(format!("'{}' is not a valid percentage", trimmed))
    })?;
    validate_percentage(value)
}

/// Validate a YYYY-MM-DD date string.
pub fn validate_date(input: &str) -> Result<NaiveDate, EquitrackError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        EquitrackError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2024-06-01)",
            trimmed
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // -- Name / address sanitization --

    #[test]
    fn name_normal_text() {
        assert_eq!(validate_name("Maria Silva").unwrap(), "Maria Silva");
    }

    #[test]
    fn name_control_chars_stripped() {
        assert_eq!(validate_name("Mar\x00ia\x01").unwrap(), "Maria");
    }

    #[test]
    fn name_whitespace_trimmed() {
        assert_eq!(validate_name("  Maria  ").unwrap(), "Maria");
    }

    #[test]
    fn name_empty_rejected() {
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn name_too_long_rejected() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name(&long).is_err());
    }

    #[test]
    fn name_unicode_preserved() {
        assert_eq!(validate_name("Jo\u{00E3}o").unwrap(), "Jo\u{00E3}o");
    }

    #[test]
    fn address_too_long_rejected() {
        let long = "x".repeat(MAX_ADDRESS_LENGTH + 1);
        assert!(validate_address(&long).is_err());
    }

    // -- Digit masking --

    #[test]
    fn digits_only_strips_punctuation() {
        assert_eq!(digits_only("123.456.789-01"), "12345678901");
    }

    #[test]
    fn digits_only_empty_input() {
        assert_eq!(digits_only("abc"), "");
    }

    // -- CPF / CNPJ --

    #[test]
    fn cpf_valid() {
        assert_eq!(validate_cpf("12345678901").unwrap(), "12345678901");
    }

    #[test]
    fn cpf_masked_input_accepted() {
        assert_eq!(validate_cpf("123.456.789-01").unwrap(), "12345678901");
    }

    #[test]
    fn cpf_too_short_rejected() {
        assert!(validate_cpf("1234567890").is_err());
    }

    #[test]
    fn cpf_too_long_rejected() {
        assert!(validate_cpf("123456789012").is_err());
    }

    #[test]
    fn cnpj_valid() {
        assert_eq!(validate_cnpj("12345678000190").unwrap(), "12345678000190");
    }

    #[test]
    fn cnpj_masked_input_accepted() {
        assert_eq!(validate_cnpj("12.345.678/0001-90").unwrap(), "12345678000190");
    }

    #[test]
    fn cnpj_wrong_length_rejected() {
        assert!(validate_cnpj("12345678901").is_err());
    }

    // -- Email --

    #[test]
    fn email_valid() {
        assert_eq!(
            validate_email("maria@example.com").unwrap(),
            "maria@example.com"
        );
    }

    #[test]
    fn email_trimmed() {
        assert_eq!(validate_email("  a@b.io  ").unwrap(), "a@b.io");
    }

    #[test]
    fn email_missing_at_rejected() {
        assert!(validate_email("maria.example.com").is_err());
    }

    #[test]
    fn email_missing_local_rejected() {
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn email_domain_without_dot_rejected() {
        assert!(validate_email("maria@localhost").is_err());
    }

    #[test]
    fn email_with_spaces_rejected() {
        assert!(validate_email("maria silva@example.com").is_err());
    }

    // -- Percentage bounds --

    #[test]
    fn percentage_in_range() {
        assert_eq!(validate_percentage(dec!(0.01)).unwrap(), dec!(0.01));
        assert_eq!(validate_percentage(dec!(100)).unwrap(), dec!(100));
    }

    #[test]
    fn percentage_zero_rejected() {
        assert!(validate_percentage(dec!(0)).is_err());
    }

    #[test]
    fn percentage_negative_rejected() {
        assert!(validate_percentage(dec!(-5)).is_err());
    }

    #[test]
    fn percentage_over_hundred_rejected() {
        assert!(validate_percentage(dec!(100.01)).is_err());
    }

    #[test]
    fn percentage_three_decimals_rejected() {
        assert!(validate_percentage(dec!(10.125)).is_err());
    }

    #[test]
    fn percentage_trailing_zeros_accepted() {
        // 10.100 normalizes to 10.1, which fits in two decimal places.
        assert_eq!(validate_percentage(dec!(10.100)).unwrap(), dec!(10.100));
    }

    #[test]
    fn parse_percentage_valid() {
        assert_eq!(parse_percentage("42.5").unwrap(), dec!(42.5));
    }

    #[test]
    fn parse_percentage_garbage_rejected() {
        assert!(parse_percentage("lots").is_err());
        assert!(parse_percentage("").is_err());
    }

    // -- Date --

    #[test]
    fn date_valid() {
        let d = validate_date("2024-06-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn date_with_whitespace() {
        let d = validate_date("  2024-01-15  ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn date_invalid_format() {
        assert!(validate_date("01/06/2024").is_err());
        assert!(validate_date("not-a-date").is_err());
    }

    #[test]
    fn date_invalid_values() {
        assert!(validate_date("2024-13-01").is_err());
        assert!(validate_date("2024-02-30").is_err());
    }
}
