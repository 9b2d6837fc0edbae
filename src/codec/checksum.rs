//! Weighted check-digit arithmetic for the fixed-length numeric encodings.
//!
//! EAN-13 weights alternate 1,3,1,3,... starting at position 0; UPC-A
//! alternates 3,1,3,1,... The check digit is `(10 - (sum mod 10)) mod 10`.
//! This weighting is the codec's own convention and has not been certified
//! against the GS1 tables — verify before relying on it for true retail
//! interop.

/// Digit count of an EAN-13 body, check digit excluded
pub const EAN13_BODY_LEN: usize = 12;
/// Digit count of a UPC-A body, check digit excluded
pub const UPCA_BODY_LEN: usize = 11;

const EAN13_WEIGHTS: [u32; 2] = [1, 3];
const UPCA_WEIGHTS: [u32; 2] = [3, 1];

/// Check digit over raw digit values (0-9), weights alternating from position 0
fn weighted_check_digit(digits: &[u8], weights: [u32; 2]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * weights[i % 2])
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// EAN-13 check digit value for a body of raw digits
pub(crate) fn ean13_check_value(digits: &[u8]) -> u8 {
    weighted_check_digit(digits, EAN13_WEIGHTS)
}

/// UPC-A check digit value for a body of raw digits
pub(crate) fn upca_check_value(digits: &[u8]) -> u8 {
    weighted_check_digit(digits, UPCA_WEIGHTS)
}

/// Check digit for a 12-digit EAN-13 body
///
/// `None` unless `body` is exactly 12 ASCII digits.
pub fn ean13_check_digit(body: &str) -> Option<char> {
    let digits = digit_values(body, EAN13_BODY_LEN)?;
    Some(char::from(b'0' + ean13_check_value(&digits)))
}

/// Check digit for an 11-digit UPC-A body
///
/// `None` unless `body` is exactly 11 ASCII digits.
pub fn upca_check_digit(body: &str) -> Option<char> {
    let digits = digit_values(body, UPCA_BODY_LEN)?;
    Some(char::from(b'0' + upca_check_value(&digits)))
}

fn digit_values(body: &str, expected_len: usize) -> Option<Vec<u8>> {
    if body.len() != expected_len {
        return None;
    }
    body.bytes()
        .map(|b| if b.is_ascii_digit() { Some(b - b'0') } else { None })
        .collect()
}
