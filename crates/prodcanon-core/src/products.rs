use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::format_price;
use crate::variants::VariantOption;

/// The three variant collections a product page can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantGroup {
    Colors,
    Sizes,
    OtherOptions,
}

impl VariantGroup {
    pub const ALL: [VariantGroup; 3] = [
        VariantGroup::Colors,
        VariantGroup::Sizes,
        VariantGroup::OtherOptions,
    ];

    /// Key of this group inside the raw `variants` object.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            VariantGroup::Colors => "colors",
            VariantGroup::Sizes => "sizes",
            VariantGroup::OtherOptions => "otherOptions",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.key() == key)
    }
}

impl std::fmt::Display for VariantGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Variant options keyed by group, each list in page order.
pub type VariantGroups = BTreeMap<VariantGroup, Vec<VariantOption>>;

/// The canonical view of one scraped product page.
///
/// Serializes to the same camelCase shape the scraper emits, so a serialized
/// record normalizes back to an identical record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub is_product_page: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    /// Pre-sale price, when the page shows a strike-through price.
    #[serde(
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Decimal>,
    /// Currency code as reported by the page, or as forced by a site rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Free-text availability as shown on the page (e.g. `"In stock"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Which scraper strategy produced the document (e.g. `"json-ld"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_method: Option<String>,
    /// Page URL; empty when the scraper did not report one.
    pub url: String,
    pub success: bool,
    /// `None` when the document had no `variants` object at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<VariantGroups>,
}

impl ProductRecord {
    /// Options of `group`, or an empty slice when the group is absent.
    #[must_use]
    pub fn variant_group(&self, group: VariantGroup) -> &[VariantOption] {
        self.variants
            .as_ref()
            .and_then(|groups| groups.get(&group))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if any group holds at least one option.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.variants
            .as_ref()
            .is_some_and(|groups| groups.values().any(|options| !options.is_empty()))
    }

    /// The pre-selected option of `group`, if the page marked one.
    #[must_use]
    pub fn selected_option(&self, group: VariantGroup) -> Option<&VariantOption> {
        self.variant_group(group).iter().find(|o| o.selected)
    }

    /// Options of `group` that are currently purchasable.
    pub fn in_stock_options(&self, group: VariantGroup) -> impl Iterator<Item = &VariantOption> {
        self.variant_group(group).iter().filter(|o| o.is_in_stock())
    }

    /// `price` formatted for display in the record's currency.
    #[must_use]
    pub fn formatted_price(&self) -> Option<String> {
        self.price.map(|p| self.format_amount(p))
    }

    /// `original_price` formatted for display in the record's currency.
    #[must_use]
    pub fn formatted_original_price(&self) -> Option<String> {
        self.original_price.map(|p| self.format_amount(p))
    }

    /// Returns `true` when the original price is strictly above the price.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        matches!((self.price, self.original_price), (Some(p), Some(o)) if o > p)
    }

    /// Whole-percent markdown from `original_price` to `price`.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let (Some(price), Some(original)) = (self.price, self.original_price) else {
            return None;
        };
        if original <= price || original.is_zero() {
            return None;
        }
        ((original - price) / original * Decimal::ONE_HUNDRED)
            .round()
            .to_u32()
    }

    fn format_amount(&self, amount: Decimal) -> String {
        format_price(amount, self.currency.as_deref().unwrap_or_default())
    }
}
