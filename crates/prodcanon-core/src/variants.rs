//! Canonical variant options (a color swatch, a size, or any other
//! selectable attribute) and their read-time derived fields.
//!
//! ## Observed shape of scraped variant entries
//!
//! The scraper emits entries like `{"text": "M", "selected": true}` for sizes
//! and `{"text": "Ecru", "value": "background: rgb(240, 234, 214)"}` for color
//! swatches. `value` carries whatever the page exposed on the element: a JSON
//! fragment (`{"id": 4, "inStock": false}`), an image URL, an inline style, or
//! a CSS class list such as `"swatch swatch--disabled"`. Nothing declares which
//! one it is, so the derived accessors below inspect it on every read.
//!
//! Four keys (`inStock`, `colorValue`, `rgbValue`, `imageUrl`) are sometimes
//! set explicitly by site-specific extractors. They are kept verbatim in
//! [`VariantExtra`] and always take precedence over anything sniffed from
//! `value`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::stock;

static RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgb\([^()]*\)").expect("valid rgb regex"));

/// The four explicit keys a scraped variant entry may carry alongside
/// `text`/`selected`/`value`.
///
/// Values are stored exactly as scraped. Serializes flattened into the owning
/// [`VariantOption`], so a serialized option has the same shape as a raw entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantExtra {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Value>,
}

impl VariantExtra {
    /// Raw entry keys captured into a [`VariantExtra`].
    pub const KEYS: [&'static str; 4] = ["inStock", "colorValue", "rgbValue", "imageUrl"];

    /// Returns `true` when none of the four keys was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_stock.is_none()
            && self.color_value.is_none()
            && self.rgb_value.is_none()
            && self.image_url.is_none()
    }

    /// Collapses an empty extra block to `None`.
    #[must_use]
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// One selectable attribute value of a product, e.g. size `"M"` or a color
/// swatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOption {
    /// Display label. Empty when the scraper captured the key but no text.
    pub text: String,
    /// Whether the page rendered this option as pre-selected.
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: Option<VariantExtra>,
}

impl VariantOption {
    /// Builds an option, dropping `extra` when it carries no keys.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        selected: bool,
        value: Option<String>,
        extra: Option<VariantExtra>,
    ) -> Self {
        Self {
            text: text.into(),
            selected,
            value,
            extra: extra.and_then(VariantExtra::non_empty),
        }
    }

    /// Whether the option can currently be purchased.
    ///
    /// Evaluated through [`stock::STOCK_RULES`] in order; options with no
    /// stock signal at all are reported as available.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        stock::infer_in_stock(self)
    }

    /// Explicit `colorValue`, otherwise the raw `value`.
    #[must_use]
    pub fn color_value(&self) -> Option<&str> {
        match self.extra_field(|e| e.color_value.as_ref()) {
            Some(explicit) => explicit.as_str(),
            None => self.value.as_deref(),
        }
    }

    /// Explicit `rgbValue`, otherwise the first `rgb(...)` found in `value`.
    #[must_use]
    pub fn rgb_value(&self) -> Option<&str> {
        match self.extra_field(|e| e.rgb_value.as_ref()) {
            Some(explicit) => explicit.as_str(),
            None => self
                .value
                .as_deref()
                .and_then(|v| RGB_RE.find(v))
                .map(|m| m.as_str()),
        }
    }

    /// Explicit `imageUrl`, otherwise `value` when it looks like an absolute
    /// or protocol-relative URL.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self.extra_field(|e| e.image_url.as_ref()) {
            Some(explicit) => explicit.as_str(),
            None => self
                .value
                .as_deref()
                .filter(|v| v.starts_with("http") || v.starts_with("//")),
        }
    }

    /// An extra value, with JSON `null` read as absent.
    pub(crate) fn extra_field<'a>(
        &'a self,
        pick: impl FnOnce(&'a VariantExtra) -> Option<&'a Value>,
    ) -> Option<&'a Value> {
        self.extra
            .as_ref()
            .and_then(pick)
            .filter(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn with_value(value: &str) -> VariantOption {
        VariantOption::new("Ecru", false, Some(value.to_owned()), None)
    }

    fn with_extra(extra: VariantExtra) -> VariantOption {
        VariantOption::new("Ecru", false, None, Some(extra))
    }

    #[test]
    fn new_collapses_empty_extra() {
        let option = VariantOption::new("M", true, None, Some(VariantExtra::default()));
        assert!(option.extra.is_none());
    }

    #[test]
    fn rgb_value_extracted_from_inline_style() {
        let option = with_value("background: rgb(10, 20, 30); color: red");
        assert_eq!(option.rgb_value(), Some("rgb(10, 20, 30)"));
    }

    #[test]
    fn rgb_value_takes_first_match() {
        let option = with_value("rgb(1, 2, 3) rgb(4, 5, 6)");
        assert_eq!(option.rgb_value(), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn rgb_value_token_is_case_sensitive() {
        let option = with_value("RGB(1, 2, 3)");
        assert_eq!(option.rgb_value(), None);
    }

    #[test]
    fn rgb_value_prefers_explicit_key() {
        let option = VariantOption::new(
            "Ecru",
            false,
            Some("rgb(1, 2, 3)".to_owned()),
            Some(VariantExtra {
                rgb_value: Some(json!("rgb(9, 9, 9)")),
                ..VariantExtra::default()
            }),
        );
        assert_eq!(option.rgb_value(), Some("rgb(9, 9, 9)"));
    }

    #[test]
    fn color_value_falls_back_to_value() {
        let option = with_value("#f0ead6");
        assert_eq!(option.color_value(), Some("#f0ead6"));
    }

    #[test]
    fn color_value_prefers_explicit_key() {
        let option = with_extra(VariantExtra {
            color_value: Some(json!("ecru")),
            ..VariantExtra::default()
        });
        assert_eq!(option.color_value(), Some("ecru"));
    }

    #[test]
    fn color_value_absent_without_value() {
        let option = VariantOption::new("Ecru", false, None, None);
        assert_eq!(option.color_value(), None);
    }

    #[test]
    fn image_url_accepts_absolute_and_protocol_relative() {
        assert_eq!(
            with_value("https://cdn.example.com/a.jpg").image_url(),
            Some("https://cdn.example.com/a.jpg")
        );
        assert_eq!(
            with_value("//cdn.example.com/a.jpg").image_url(),
            Some("//cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn image_url_rejects_relative_paths() {
        assert_eq!(with_value("/img/a.jpg").image_url(), None);
    }

    #[test]
    fn image_url_prefers_explicit_key() {
        let option = VariantOption::new(
            "Ecru",
            false,
            Some("https://cdn.example.com/value.jpg".to_owned()),
            Some(VariantExtra {
                image_url: Some(json!("https://cdn.example.com/explicit.jpg")),
                ..VariantExtra::default()
            }),
        );
        assert_eq!(option.image_url(), Some("https://cdn.example.com/explicit.jpg"));
    }

    #[test]
    fn serializes_in_raw_entry_shape() {
        let option = VariantOption::new(
            "Ecru",
            true,
            Some("x".to_owned()),
            Some(VariantExtra {
                in_stock: Some(json!(false)),
                ..VariantExtra::default()
            }),
        );
        let value = serde_json::to_value(&option).expect("serialization failed");
        assert_eq!(
            value,
            json!({"text": "Ecru", "selected": true, "value": "x", "inStock": false})
        );
    }
}
