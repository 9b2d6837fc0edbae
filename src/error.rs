//! Error types for the barcode codec.
//!
//! The core operations keep their no-fail contracts (`validate` returns a
//! bool, `parse` an `Option`, the generators are total); the types here
//! carry the diagnostic detail behind those answers for callers that need
//! to tell an operator why a scan was rejected.

use thiserror::Error;

/// Reason a value failed strict validation for a claimed encoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Value length differs from the fixed digit count of the encoding
    #[error("expected exactly {expected} digits, got {actual} characters")]
    WrongLength {
        /// Digit count the encoding requires, check digit included
        expected: usize,
        /// Character count of the supplied value
        actual: usize,
    },

    /// A character outside ASCII `0-9` in a fixed-length numeric encoding
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit {
        /// The offending character
        found: char,
        /// Zero-based character position
        position: usize,
    },

    /// Trailing digit does not match the weighted checksum of the body
    #[error("check digit mismatch: computed '{expected}', found '{found}'")]
    CheckDigitMismatch {
        /// Check digit computed from the body
        expected: char,
        /// Check digit present in the value
        found: char,
    },

    /// Value is shorter than the CODE-128 floor
    #[error("value is {actual} characters, CODE-128 requires at least {min}")]
    TooShort {
        /// Minimum accepted length
        min: usize,
        /// Character count of the supplied value
        actual: usize,
    },

    /// Empty value where any non-empty payload would do
    #[error("value is empty")]
    Empty,
}

/// Label that does not name a supported encoding
///
/// Produced by `Encoding::from_str` when a stored record carries a label
/// the codec has never issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown barcode encoding label '{0}'")]
pub struct UnknownEncoding(pub String);
