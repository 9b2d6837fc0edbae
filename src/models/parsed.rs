use serde::{Deserialize, Serialize};

use super::Encoding;

/// Structural decomposition of a scanned barcode value
///
/// Serializes as `{"type": <label>, "fields": {...}}` with camelCase field
/// names, matching the record shape the inventory service already stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "fields")]
pub enum ParsedBarcode {
    /// 13-digit retail code split into its structural runs
    #[serde(rename = "EAN-13")]
    Ean13 {
        /// First 3 digits
        #[serde(rename = "countryCode")]
        country_code: String,
        /// Digits 4-7
        #[serde(rename = "manufacturerCode")]
        manufacturer_code: String,
        /// Digits 8-12
        #[serde(rename = "productCode")]
        product_code: String,
        /// Trailing weighted check digit
        #[serde(rename = "checkDigit")]
        check_digit: char,
    },
    /// 12-digit retail code
    #[serde(rename = "UPC-A")]
    UpcA {
        /// First 6 digits
        #[serde(rename = "manufacturerCode")]
        manufacturer_code: String,
        /// Digits 7-11
        #[serde(rename = "productCode")]
        product_code: String,
        /// Trailing weighted check digit
        #[serde(rename = "checkDigit")]
        check_digit: char,
    },
    /// URL-shaped payload
    #[serde(rename = "QR")]
    Qr {
        /// The payload, verbatim
        url: String,
    },
    /// Catch-all for every other non-empty value
    #[serde(rename = "CODE-128")]
    Code128 {
        /// The value, verbatim
        value: String,
    },
}

impl ParsedBarcode {
    /// The encoding this value was recognized as
    pub fn encoding(&self) -> Encoding {
        match self {
            ParsedBarcode::Ean13 { .. } => Encoding::Ean13,
            ParsedBarcode::UpcA { .. } => Encoding::UpcA,
            ParsedBarcode::Qr { .. } => Encoding::Qr,
            ParsedBarcode::Code128 { .. } => Encoding::Code128,
        }
    }

    /// Reassemble the exact value the fields were split from
    ///
    /// This is the string the inventory lookup keys on, so it must equal
    /// the originally scanned value character for character.
    pub fn canonical_value(&self) -> String {
        match self {
            ParsedBarcode::Ean13 {
                country_code,
                manufacturer_code,
                product_code,
                check_digit,
            } => {
                let mut value = String::with_capacity(13);
                value.push_str(country_code);
                value.push_str(manufacturer_code);
                value.push_str(product_code);
                value.push(*check_digit);
                value
            }
            ParsedBarcode::UpcA {
                manufacturer_code,
                product_code,
                check_digit,
            } => {
                let mut value = String::with_capacity(12);
                value.push_str(manufacturer_code);
                value.push_str(product_code);
                value.push(*check_digit);
                value
            }
            ParsedBarcode::Qr { url } => url.clone(),
            ParsedBarcode::Code128 { value } => value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ean13() -> ParsedBarcode {
        ParsedBarcode::Ean13 {
            country_code: "400".to_string(),
            manufacturer_code: "6381".to_string(),
            product_code: "33393".to_string(),
            check_digit: '1',
        }
    }

    #[test]
    fn test_encoding_accessor() {
        assert_eq!(sample_ean13().encoding(), Encoding::Ean13);
        let qr = ParsedBarcode::Qr {
            url: "https://repairhq.example/t/42".to_string(),
        };
        assert_eq!(qr.encoding(), Encoding::Qr);
    }

    #[test]
    fn test_canonical_value() {
        assert_eq!(sample_ean13().canonical_value(), "4006381333931");

        let upc = ParsedBarcode::UpcA {
            manufacturer_code: "036000".to_string(),
            product_code: "29145".to_string(),
            check_digit: '2',
        };
        assert_eq!(upc.canonical_value(), "036000291452");

        let code = ParsedBarcode::Code128 {
            value: "SRV-XK29DM1Q".to_string(),
        };
        assert_eq!(code.canonical_value(), "SRV-XK29DM1Q");
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(&sample_ean13()).unwrap();
        assert_eq!(json["type"], "EAN-13");
        assert_eq!(json["fields"]["countryCode"], "400");
        assert_eq!(json["fields"]["manufacturerCode"], "6381");
        assert_eq!(json["fields"]["productCode"], "33393");
        assert_eq!(json["fields"]["checkDigit"], "1");
    }

    #[test]
    fn test_wire_round_trip() {
        let stored = r#"{"type":"UPC-A","fields":{"manufacturerCode":"036000","productCode":"29145","checkDigit":"2"}}"#;
        let parsed: ParsedBarcode = serde_json::from_str(stored).unwrap();
        assert_eq!(parsed.encoding(), Encoding::UpcA);
        assert_eq!(parsed.canonical_value(), "036000291452");
    }
}
