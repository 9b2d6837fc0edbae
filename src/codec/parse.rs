//! Encoding detection and field extraction for scanned values.

use tracing::trace;

use crate::codec::validate::validate;
use crate::models::{Encoding, ParsedBarcode};

/// Classify a scanned `value` and split it into its fields
///
/// Candidates are tried in a fixed order: checksum-valid EAN-13 first,
/// then checksum-valid UPC-A, then a URL-shaped QR payload, and finally
/// CODE-128 as the catch-all. Only the empty string yields `None`.
pub fn parse(value: &str) -> Option<ParsedBarcode> {
    if value.is_empty() {
        return None;
    }

    if validate(value, Encoding::Ean13) {
        trace!(value, "parsed as EAN-13");
        // validate confirmed 13 ASCII digits, so byte slicing is safe
        return Some(ParsedBarcode::Ean13 {
            country_code: value[0..3].to_string(),
            manufacturer_code: value[3..7].to_string(),
            product_code: value[7..12].to_string(),
            check_digit: value.as_bytes()[12] as char,
        });
    }

    if validate(value, Encoding::UpcA) {
        trace!(value, "parsed as UPC-A");
        return Some(ParsedBarcode::UpcA {
            manufacturer_code: value[0..6].to_string(),
            product_code: value[6..11].to_string(),
            check_digit: value.as_bytes()[11] as char,
        });
    }

    if looks_like_url(value) {
        trace!(value, "parsed as QR URL");
        return Some(ParsedBarcode::Qr {
            url: value.to_string(),
        });
    }

    trace!(value, "fell through to CODE-128");
    Some(ParsedBarcode::Code128 {
        value: value.to_string(),
    })
}

/// URL heuristic for QR classification: an `http` prefix or any scheme
/// separator anywhere in the value
fn looks_like_url(value: &str) -> bool {
    value.starts_with("http") || value.contains("://")
}
