//! rhq-barcode - Barcode codec for RepairHQ inventory and tickets
//!
//! String-level generation, validation, and parsing for the four barcode
//! encodings RepairHQ prints and scans: EAN-13, UPC-A, CODE-128, and QR.
//! No rendering lives here; values are handed to label hardware as-is.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Barcode codec modules (checksums, generation, validation, parsing)
pub mod codec;
/// Error types for validation diagnostics and encoding lookup
pub mod error;
/// Core data structures (Encoding, ParsedBarcode)
pub mod models;
/// Shared helpers for batch tooling
pub mod tools;

pub use codec::generate::{generate, generate_with_rng};
pub use codec::inventory::{format_inventory_barcode, format_inventory_barcode_with_rng};
pub use codec::parse::parse;
pub use codec::validate::{check, validate};
pub use error::{UnknownEncoding, ValidationError};
pub use models::{Encoding, ParsedBarcode};
