//! Normalization from a raw scraper document to [`ProductRecord`].
//!
//! Field-level coercion lives in [`crate::coerce`], per-entry variant handling
//! in [`crate::variant`], and URL-keyed corrections in [`crate::heuristics`];
//! this module wires them together.

use prodcanon_core::{ProductRecord, SiteRules, VariantGroup, VariantGroups, VariantOption};
use serde_json::{Map, Value};

use crate::coerce::{decimal_field, json_type_name, strict_bool_field, string_field};
use crate::error::NormalizeError;
use crate::heuristics::{resolve_brand, resolve_currency};
use crate::variant::normalize_variant;

/// Normalizes a raw document using the built-in site rules.
#[must_use]
pub fn normalize_product(raw: &Value) -> ProductRecord {
    normalize_product_with(raw, SiteRules::builtin())
}

/// Normalizes a raw document using `rules` for brand and currency
/// corrections.
///
/// Always returns a record. A top level that is not an object yields a record
/// with every field at its default.
#[must_use]
pub fn normalize_product_with(raw: &Value, rules: &SiteRules) -> ProductRecord {
    let Some(doc) = raw.as_object() else {
        tracing::warn!(
            found = json_type_name(raw),
            "raw document is not an object; returning an empty record"
        );
        return ProductRecord::default();
    };

    let url = string_field(doc, "url").unwrap_or_default();
    // Brand inference runs before the currency override.
    let brand = resolve_brand(string_field(doc, "brand"), &url, rules);
    let currency = resolve_currency(string_field(doc, "currency"), &url, rules);

    ProductRecord {
        is_product_page: strict_bool_field(doc, "isProductPage"),
        title: string_field(doc, "title"),
        price: decimal_field(doc, "price"),
        original_price: decimal_field(doc, "originalPrice"),
        currency,
        image_url: string_field(doc, "imageUrl"),
        description: string_field(doc, "description"),
        sku: string_field(doc, "sku"),
        availability: string_field(doc, "availability"),
        brand,
        extraction_method: string_field(doc, "extractionMethod"),
        success: strict_bool_field(doc, "success"),
        variants: doc
            .get("variants")
            .and_then(Value::as_object)
            .map(assemble_variant_groups),
        url,
    }
}

/// Parses `text` as JSON and normalizes it with the built-in site rules.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidJson`] if `text` is not JSON at all. Any
/// well-formed JSON value normalizes successfully.
pub fn normalize_json_str(text: &str) -> Result<ProductRecord, NormalizeError> {
    let raw: Value = serde_json::from_str(text)?;
    Ok(normalize_product(&raw))
}

/// Normalizes every document in a JSON array independently; any other value
/// is treated as a batch of one.
#[must_use]
pub fn normalize_batch(raw: &Value, rules: &SiteRules) -> Vec<ProductRecord> {
    match raw {
        Value::Array(docs) => docs
            .iter()
            .map(|doc| normalize_product_with(doc, rules))
            .collect(),
        single => vec![normalize_product_with(single, rules)],
    }
}

/// Builds the variant map from the raw `variants` object.
///
/// Only the recognized group keys are read, and only when they hold an array;
/// anything else under `variants` is ignored.
fn assemble_variant_groups(raw_groups: &Map<String, Value>) -> VariantGroups {
    raw_groups
        .iter()
        .filter_map(|(key, raw)| {
            let Some(group) = VariantGroup::from_key(key) else {
                tracing::debug!(key = %key, "ignoring unknown variant group");
                return None;
            };
            match raw {
                Value::Array(entries) => Some((group, normalize_group(group, entries))),
                other => {
                    tracing::debug!(
                        %group,
                        found = json_type_name(other),
                        "ignoring variant group that is not an array"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Folds one group's raw entries into options, keeping input order and
/// discarding entries that fail [`normalize_entry`].
fn normalize_group(group: VariantGroup, entries: &[Value]) -> Vec<VariantOption> {
    entries
        .iter()
        .enumerate()
        .fold(Vec::with_capacity(entries.len()), |mut kept, (index, entry)| {
            match normalize_entry(group, index, entry) {
                Ok(option) => kept.push(option),
                Err(error) => tracing::debug!(%error, "dropping variant entry"),
            }
            kept
        })
}

/// Minimal validation for one entry: it must be an object and must carry a
/// `text` key (an empty or null `text` still passes).
fn normalize_entry(
    group: VariantGroup,
    index: usize,
    entry: &Value,
) -> Result<VariantOption, NormalizeError> {
    let Value::Object(fields) = entry else {
        return Err(NormalizeError::NotAnObject {
            group,
            index,
            found: json_type_name(entry),
        });
    };
    if !fields.contains_key("text") {
        return Err(NormalizeError::MissingText { group, index });
    }
    Ok(normalize_variant(fields))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
