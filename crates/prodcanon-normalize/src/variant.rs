//! Normalization of a single raw variant entry into a [`VariantOption`].

use prodcanon_core::{VariantExtra, VariantOption};
use serde_json::{Map, Value};

use crate::coerce::{loose_bool_field, raw_field, string_like_field};

/// Normalizes one raw variant entry.
///
/// Never fails: each field that is missing or of an unusable type falls back
/// to its default independently. Only `text`, `selected`, `value` and the four
/// [`VariantExtra::KEYS`] are read; every other key is ignored.
#[must_use]
pub fn normalize_variant(raw: &Map<String, Value>) -> VariantOption {
    let text = string_like_field(raw, "text").unwrap_or_default();
    let selected = loose_bool_field(raw, "selected");
    let value = string_like_field(raw, "value");

    let extra = VariantExtra {
        in_stock: raw_field(raw, "inStock"),
        color_value: raw_field(raw, "colorValue"),
        rgb_value: raw_field(raw, "rgbValue"),
        image_url: raw_field(raw, "imageUrl"),
    };

    VariantOption::new(text, selected, value, Some(extra))
}
