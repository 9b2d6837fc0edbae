//! Per-encoding validation rules.

use crate::codec::checksum::{EAN13_BODY_LEN, UPCA_BODY_LEN, ean13_check_value, upca_check_value};
use crate::error::ValidationError;
use crate::models::Encoding;

/// Minimum character count accepted for a CODE-128 value
pub const CODE128_MIN_LEN: usize = 6;

/// Check whether `value` is well formed under `encoding`
///
/// EAN-13 and UPC-A require the exact digit count and a matching check
/// digit; CODE-128 requires at least [`CODE128_MIN_LEN`] characters; QR
/// requires a non-empty payload. Never panics, whatever the input.
pub fn validate(value: &str, encoding: Encoding) -> bool {
    check(value, encoding).is_ok()
}

/// Like [`validate`], reporting why a value was rejected
pub fn check(value: &str, encoding: Encoding) -> Result<(), ValidationError> {
    match encoding {
        Encoding::Ean13 => check_numeric(value, EAN13_BODY_LEN + 1, ean13_check_value),
        Encoding::UpcA => check_numeric(value, UPCA_BODY_LEN + 1, upca_check_value),
        Encoding::Code128 => {
            let actual = value.chars().count();
            if actual < CODE128_MIN_LEN {
                return Err(ValidationError::TooShort {
                    min: CODE128_MIN_LEN,
                    actual,
                });
            }
            Ok(())
        }
        Encoding::Qr => {
            if value.is_empty() {
                return Err(ValidationError::Empty);
            }
            Ok(())
        }
    }
}

fn check_numeric(
    value: &str,
    expected_len: usize,
    check: fn(&[u8]) -> u8,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual != expected_len {
        return Err(ValidationError::WrongLength {
            expected: expected_len,
            actual,
        });
    }

    let mut digits = Vec::with_capacity(expected_len);
    for (position, c) in value.chars().enumerate() {
        // to_digit(10) accepts ASCII digits only, so digits from other
        // scripts are rejected here
        match c.to_digit(10) {
            Some(d) => digits.push(d as u8),
            None => return Err(ValidationError::NonDigit { found: c, position }),
        }
    }

    let expected = check(&digits[..expected_len - 1]);
    let found = digits[expected_len - 1];
    if expected != found {
        return Err(ValidationError::CheckDigitMismatch {
            expected: char::from(b'0' + expected),
            found: char::from(b'0' + found),
        });
    }
    Ok(())
}
