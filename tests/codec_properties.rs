//! Integration tests for the barcode codec
//!
//! These tests pin the end-to-end contract: generated values always pass
//! their own validator, parse classification follows the documented
//! precedence, and the serialized field layout stays compatible with the
//! scanning clients.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rhq_barcode::codec::checksum::{ean13_check_digit, upca_check_digit};
use rhq_barcode::{
    Encoding, ParsedBarcode, format_inventory_barcode_with_rng, generate, generate_with_rng, parse,
    validate,
};
use serde_json::json;

#[test]
fn generated_ean13_keeps_prefix_and_validates() {
    let value = generate(Encoding::Ean13, "500");
    assert_eq!(value.len(), 13);
    assert!(value.starts_with("500"));
    assert!(validate(&value, Encoding::Ean13));

    // A caller prefix other than the default seed is kept as well
    let value = generate(Encoding::Ean13, "590");
    assert!(value.starts_with("590"));
    assert!(validate(&value, Encoding::Ean13));
}

#[test]
fn known_ean13_validates_and_flipped_digit_does_not() {
    assert!(validate("4006381333931", Encoding::Ean13));
    assert!(!validate("4006381333932", Encoding::Ean13));
}

#[test]
fn url_payload_classifies_as_qr() {
    assert_eq!(
        parse("https://repairhq.example/t/819"),
        Some(ParsedBarcode::Qr {
            url: "https://repairhq.example/t/819".to_string(),
        })
    );
}

#[test]
fn checksum_valid_upca_wins_over_code128() {
    assert_eq!(
        parse("036000291452"),
        Some(ParsedBarcode::UpcA {
            manufacturer_code: "036000".to_string(),
            product_code: "29145".to_string(),
            check_digit: '2',
        })
    );
}

#[test]
fn inventory_label_layout() {
    let mut rng = StdRng::seed_from_u64(4242);
    let label = format_inventory_barcode_with_rng("Screens", "iph14-scr-blk", &mut rng);
    let parts: Vec<&str> = label.split('-').collect();
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[0], "RHQ");
    assert_eq!(parts[1], "SCR");
    assert_eq!(parts[2], "IPH14S");
    assert_eq!(parts[3].len(), 4);
    assert!(parts[3].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn parsed_wire_shape_is_stable() {
    let parsed = parse("4006381333931").unwrap();
    assert_eq!(
        serde_json::to_value(&parsed).unwrap(),
        json!({
            "type": "EAN-13",
            "fields": {
                "countryCode": "400",
                "manufacturerCode": "6381",
                "productCode": "33393",
                "checkDigit": "1",
            }
        })
    );

    let parsed = parse("otpauth://totp/RepairHQ").unwrap();
    assert_eq!(
        serde_json::to_value(&parsed).unwrap(),
        json!({
            "type": "QR",
            "fields": { "url": "otpauth://totp/RepairHQ" }
        })
    );
}

proptest! {
    #[test]
    fn generated_values_always_validate(seed in any::<u64>(), prefix in "[0-9]{0,15}") {
        let mut rng = StdRng::seed_from_u64(seed);
        for encoding in Encoding::ALL {
            let value = generate_with_rng(encoding, &prefix, &mut rng);
            prop_assert!(validate(&value, encoding), "{} rejected for {}", value, encoding);
        }
    }

    #[test]
    fn arbitrary_prefixes_never_break_generation(seed in any::<u64>(), prefix in ".{0,20}") {
        let mut rng = StdRng::seed_from_u64(seed);
        for encoding in Encoding::ALL {
            let value = generate_with_rng(encoding, &prefix, &mut rng);
            prop_assert!(validate(&value, encoding), "{} rejected for {}", value, encoding);
        }
    }

    #[test]
    fn checksum_valid_twelve_digits_parse_as_upca(body in "[0-9]{11}") {
        let check = upca_check_digit(&body).unwrap();
        let mut value = body;
        value.push(check);
        match parse(&value) {
            Some(ParsedBarcode::UpcA { .. }) => {}
            other => prop_assert!(false, "expected UPC-A for {}, got {:?}", value, other),
        }
    }

    #[test]
    fn flipped_check_digit_never_validates(body in "[0-9]{12}") {
        let check = ean13_check_digit(&body).unwrap();
        let mut value = body.clone();
        value.push(check);
        prop_assert!(validate(&value, Encoding::Ean13));

        let flipped = char::from_digit((check.to_digit(10).unwrap() + 1) % 10, 10).unwrap();
        let mut bad = body;
        bad.push(flipped);
        prop_assert!(!validate(&bad, Encoding::Ean13));
    }

    #[test]
    fn parse_reconstructs_its_input(value in "[0-9A-Za-z:/.\\-]{1,24}") {
        match parse(&value) {
            Some(parsed) => prop_assert_eq!(parsed.canonical_value(), value),
            None => prop_assert!(false, "non-empty input must classify"),
        }
    }

    #[test]
    fn inventory_labels_always_scannable(
        seed in any::<u64>(),
        category in "[A-Za-z]{1,12}",
        sku in "[A-Za-z0-9\\-]{0,20}",
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let label = format_inventory_barcode_with_rng(&category, &sku, &mut rng);
        prop_assert!(label.starts_with("RHQ-"));
        prop_assert!(validate(&label, Encoding::Code128));
    }
}
