//! CODE-128 label layout for inventory items.

use rand::Rng;

/// Leading tag on every inventory label
const INVENTORY_TAG: &str = "RHQ";
/// Characters kept from the category name
const CATEGORY_CODE_LEN: usize = 3;
/// Characters kept from the SKU after cleaning
const SKU_CODE_LEN: usize = 6;

/// Build an inventory label from a category name and a SKU
///
/// The label is `RHQ-<CAT>-<SKU>-<NNNN>`: the first three characters of
/// the category upper-cased, the first six alphanumeric characters of
/// the SKU upper-cased, and a zero-padded random disambiguator. The
/// result always satisfies CODE-128 validation.
pub fn format_inventory_barcode(category: &str, sku: &str) -> String {
    format_inventory_barcode_with_rng(category, sku, &mut rand::thread_rng())
}

/// Like [`format_inventory_barcode`], drawing the disambiguator from a
/// caller-supplied source
pub fn format_inventory_barcode_with_rng<R: Rng + ?Sized>(
    category: &str,
    sku: &str,
    rng: &mut R,
) -> String {
    let category_code = category
        .chars()
        .take(CATEGORY_CODE_LEN)
        .collect::<String>()
        .to_uppercase();
    let sku_code = sku
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(SKU_CODE_LEN)
        .collect::<String>()
        .to_uppercase();
    let suffix = rng.gen_range(0..10_000u32);
    format!("{}-{}-{}-{:04}", INVENTORY_TAG, category_code, sku_code, suffix)
}
