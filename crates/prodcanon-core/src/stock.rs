//! Ordered stock-status inference for [`VariantOption`].
//!
//! Rules are tried in [`STOCK_RULES`] order and the first one that yields a
//! verdict wins. When none does, the option is treated as in stock: pages omit
//! stock markup for available options far more often than for sold-out ones.

use serde_json::Value;

use crate::variants::VariantOption;

/// Case-insensitive substrings in `value` that mark an option as sold out.
pub const OUT_OF_STOCK_KEYWORDS: [&str; 5] = [
    "unavailable",
    "out of stock",
    "out-of-stock",
    "disabled",
    "sold out",
];

/// A single source of stock information on a variant option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockRule {
    /// Explicit `inStock` key captured from the raw entry.
    ExtraField,
    /// `value` is a JSON object fragment with an `inStock` key.
    EmbeddedJson,
    /// `value` contains one of [`OUT_OF_STOCK_KEYWORDS`].
    Keyword,
}

/// Evaluation order for [`infer_in_stock`].
pub const STOCK_RULES: [StockRule; 3] = [
    StockRule::ExtraField,
    StockRule::EmbeddedJson,
    StockRule::Keyword,
];

impl StockRule {
    /// Returns this rule's verdict, or `None` when the rule has nothing to say
    /// about `option`.
    #[must_use]
    pub fn evaluate(self, option: &VariantOption) -> Option<bool> {
        match self {
            StockRule::ExtraField => option
                .extra_field(|e| e.in_stock.as_ref())
                .map(is_strict_true),
            StockRule::EmbeddedJson => {
                let value = option.value.as_deref()?;
                if !value.contains("inStock") {
                    return None;
                }
                match serde_json::from_str::<Value>(value) {
                    Ok(Value::Object(map)) => {
                        Some(map.get("inStock").is_some_and(is_strict_true))
                    }
                    // Not an object, or not JSON at all: let the keyword rule decide.
                    _ => None,
                }
            }
            StockRule::Keyword => {
                let lower = option.value.as_deref()?.to_lowercase();
                OUT_OF_STOCK_KEYWORDS
                    .iter()
                    .any(|kw| lower.contains(kw))
                    .then_some(false)
            }
        }
    }
}

/// Only a JSON boolean `true` counts; `"true"`, `1` and friends do not.
fn is_strict_true(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

/// The first rule in [`STOCK_RULES`] that produces a verdict, with the verdict.
fn first_verdict(option: &VariantOption) -> Option<(StockRule, bool)> {
    STOCK_RULES
        .into_iter()
        .find_map(|rule| rule.evaluate(option).map(|verdict| (rule, verdict)))
}

/// Infers availability for `option`, defaulting to `true`.
#[must_use]
pub fn infer_in_stock(option: &VariantOption) -> bool {
    first_verdict(option).map_or(true, |(_, verdict)| verdict)
}
