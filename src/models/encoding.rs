use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownEncoding;

/// Barcode encoding recognized by the codec
///
/// The serialized/display labels ("EAN-13", "CODE-128", "QR", "UPC-A") are
/// the strings stored alongside existing inventory records and must never
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// 13-digit retail format, trailing weighted check digit
    #[serde(rename = "EAN-13")]
    Ean13,
    /// Variable-length alphanumeric format, length-checked only
    #[serde(rename = "CODE-128")]
    Code128,
    /// Free-form payload, typically a URL
    #[serde(rename = "QR")]
    Qr,
    /// 12-digit retail format, trailing weighted check digit
    #[serde(rename = "UPC-A")]
    UpcA,
}

impl Encoding {
    /// Every encoding the codec supports
    pub const ALL: [Encoding; 4] = [
        Encoding::Ean13,
        Encoding::Code128,
        Encoding::Qr,
        Encoding::UpcA,
    ];

    /// Canonical display label, stable across stored records
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Ean13 => "EAN-13",
            Encoding::Code128 => "CODE-128",
            Encoding::Qr => "QR",
            Encoding::UpcA => "UPC-A",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EAN-13" => Ok(Encoding::Ean13),
            "CODE-128" => Ok(Encoding::Code128),
            "QR" => Ok(Encoding::Qr),
            "UPC-A" => Ok(Encoding::UpcA),
            other => Err(UnknownEncoding(other.to_string())),
        }
    }
}
