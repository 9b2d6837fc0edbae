//! Identifier generation for the four encodings.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::codec::checksum::{EAN13_BODY_LEN, UPCA_BODY_LEN, ean13_check_value, upca_check_value};
use crate::models::Encoding;

/// Default EAN-13 seed when the caller supplies no prefix
const EAN13_DEFAULT_PREFIX: &str = "500";
/// Default UPC-A seed when the caller supplies no prefix
const UPCA_DEFAULT_PREFIX: &str = "72527";
/// Random token length appended to CODE-128 values
const CODE128_TOKEN_LEN: usize = 8;
/// Random suffix length appended to QR payloads
const QR_SUFFIX_LEN: usize = 6;

/// Upper-case base-36 alphabet for CODE-128 tokens and QR suffixes
const BASE36: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Generate a new identifier for `encoding`, seeded with `prefix`
///
/// An empty prefix selects the per-encoding default seed ("500" for
/// EAN-13, "72527" for UPC-A, nothing for the free-form encodings).
/// EAN-13 and UPC-A outputs carry a checksum computed from the body and
/// always satisfy their validator; CODE-128 and QR outputs satisfy theirs
/// by construction.
pub fn generate(encoding: Encoding, prefix: &str) -> String {
    generate_with_rng(encoding, prefix, &mut rand::thread_rng())
}

/// Like [`generate`], drawing randomness from a caller-supplied source
///
/// Useful for deterministic tests and batch issuance with a seeded
/// generator; [`generate`] itself uses the thread-local RNG.
pub fn generate_with_rng<R: Rng + ?Sized>(encoding: Encoding, prefix: &str, rng: &mut R) -> String {
    match encoding {
        Encoding::Ean13 => numeric_with_check(
            prefix,
            EAN13_DEFAULT_PREFIX,
            EAN13_BODY_LEN,
            ean13_check_value,
            rng,
        ),
        Encoding::UpcA => numeric_with_check(
            prefix,
            UPCA_DEFAULT_PREFIX,
            UPCA_BODY_LEN,
            upca_check_value,
            rng,
        ),
        Encoding::Code128 => {
            let mut value = String::with_capacity(prefix.len() + CODE128_TOKEN_LEN);
            value.push_str(prefix);
            push_base36_token(&mut value, CODE128_TOKEN_LEN, rng);
            value
        }
        Encoding::Qr => qr_payload(prefix, unix_millis(), rng),
    }
}

fn numeric_with_check<R: Rng + ?Sized>(
    prefix: &str,
    default_prefix: &str,
    body_len: usize,
    check: fn(&[u8]) -> u8,
    rng: &mut R,
) -> String {
    let seed = if prefix.is_empty() {
        default_prefix
    } else {
        prefix
    };

    // Non-digits in the seed are dropped and overlong seeds truncated,
    // never rejected: the output must always satisfy the validator.
    let mut digits: Vec<u8> = seed
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .take(body_len)
        .collect();
    while digits.len() < body_len {
        digits.push(rng.gen_range(0..10u8));
    }

    let check_digit = check(&digits);
    let mut value = String::with_capacity(body_len + 1);
    for d in digits {
        value.push(char::from(b'0' + d));
    }
    value.push(char::from(b'0' + check_digit));
    value
}

fn push_base36_token<R: Rng + ?Sized>(out: &mut String, len: usize, rng: &mut R) {
    for _ in 0..len {
        out.push(BASE36[rng.gen_range(0..BASE36.len())]);
    }
}

/// QR payload: prefix + base-36 timestamp + random base-36 suffix
fn qr_payload<R: Rng + ?Sized>(prefix: &str, timestamp_millis: u64, rng: &mut R) -> String {
    let mut value = String::from(prefix);
    value.push_str(&to_base36(timestamp_millis));
    push_base36_token(&mut value, QR_SUFFIX_LEN, rng);
    value
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.iter().rev().collect()
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
