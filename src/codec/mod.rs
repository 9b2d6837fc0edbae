//! Barcode codec modules
//!
//! This module contains all the string-level barcode logic:
//! - Check-digit arithmetic (EAN-13, UPC-A)
//! - Identifier generation for the four encodings
//! - Validation and scan-time parsing
//! - Inventory label layout

/// Weighted check-digit arithmetic for the numeric encodings
pub mod checksum;
/// Identifier generation, seeded or fully random
pub mod generate;
pub mod inventory;
/// Scan classification and field extraction
pub mod parse;
/// Per-encoding validation rules
pub mod validate;
