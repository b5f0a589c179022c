//! Site-specific correction rules keyed by product URL.
//!
//! Brand inference and currency overrides are data, not code: adding a site
//! means adding a row to the table (or to `config/sites.yaml`).

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

static BUILTIN: LazyLock<SiteRules> = LazyLock::new(|| SiteRules {
    brands: vec![
        BrandRule::new("zara.com", "Zara"),
        BrandRule::new("stradivarius.com", "Stradivarius"),
        BrandRule::new("louisvuitton.com", "Louis Vuitton"),
    ],
    currency_overrides: vec![CurrencyOverride {
        currency: "USD".to_string(),
        any_of: vec![
            UrlMatch {
                contains: "us.louisvuitton.com".to_string(),
                path_segment: None,
            },
            UrlMatch {
                contains: "louisvuitton.com".to_string(),
                path_segment: Some("eng-us".to_string()),
            },
        ],
    }],
});

/// Fills in a missing brand when the URL contains `marker`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRule {
    /// Case-insensitive URL substring, e.g. `"zara.com"`.
    pub marker: String,
    pub brand: String,
}

impl BrandRule {
    #[must_use]
    pub fn new(marker: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            brand: brand.into(),
        }
    }
}

/// One URL condition of a [`CurrencyOverride`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMatch {
    /// Case-insensitive URL substring.
    pub contains: String,
    /// When set, the URL path must also contain this exact segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_segment: Option<String>,
}

impl UrlMatch {
    /// `lower_url` must already be lowercased.
    fn matches(&self, lower_url: &str) -> bool {
        if !lower_url.contains(&self.contains.to_lowercase()) {
            return false;
        }
        match &self.path_segment {
            None => true,
            Some(segment) => {
                let segment = segment.to_lowercase();
                path_segments(lower_url).any(|s| s == segment)
            }
        }
    }
}

/// Forces `currency` for every URL matching any of `any_of`, replacing
/// whatever the page reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyOverride {
    pub currency: String,
    pub any_of: Vec<UrlMatch>,
}

/// The full correction table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRules {
    #[serde(default)]
    pub brands: Vec<BrandRule>,
    #[serde(default)]
    pub currency_overrides: Vec<CurrencyOverride>,
}

impl SiteRules {
    /// The rules shipped with the crate.
    #[must_use]
    pub fn builtin() -> &'static SiteRules {
        &BUILTIN
    }

    /// Brand for the first rule whose marker occurs in `url`.
    #[must_use]
    pub fn infer_brand(&self, url: &str) -> Option<&str> {
        let lower = url.to_lowercase();
        self.brands
            .iter()
            .find(|rule| lower.contains(&rule.marker.to_lowercase()))
            .map(|rule| rule.brand.as_str())
    }

    /// Currency forced for `url`, if any override applies.
    #[must_use]
    pub fn currency_override(&self, url: &str) -> Option<&str> {
        let lower = url.to_lowercase();
        self.currency_overrides
            .iter()
            .find(|rule| rule.any_of.iter().any(|m| m.matches(&lower)))
            .map(|rule| rule.currency.as_str())
    }
}

/// Path segments of a URL, without scheme, host, query or fragment.
fn path_segments(url: &str) -> impl Iterator<Item = &str> {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let without_query = without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or(without_scheme);
    without_query
        .split('/')
        .skip(1)
        .filter(|s| !s.is_empty())
}

/// Load and validate site rules from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_site_rules(path: &Path) -> Result<SiteRules, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SitesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_site_rules(&content)
}

/// Parse and validate site rules from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_site_rules(yaml: &str) -> Result<SiteRules, ConfigError> {
    let rules: SiteRules = serde_yaml::from_str(yaml)?;
    validate_site_rules(&rules)?;
    Ok(rules)
}

fn validate_site_rules(rules: &SiteRules) -> Result<(), ConfigError> {
    let mut seen_markers = HashSet::new();

    for rule in &rules.brands {
        if rule.marker.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "brand '{}' has an empty URL marker",
                rule.brand
            )));
        }
        if rule.brand.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "marker '{}' maps to an empty brand name",
                rule.marker
            )));
        }
        if !seen_markers.insert(rule.marker.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand marker: '{}'",
                rule.marker
            )));
        }
    }

    for rule in &rules.currency_overrides {
        if rule.currency.len() != 3 || !rule.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Validation(format!(
                "invalid currency code '{}'; must be three ASCII letters",
                rule.currency
            )));
        }
        if rule.any_of.is_empty() {
            return Err(ConfigError::Validation(format!(
                "currency override '{}' has no URL matchers",
                rule.currency
            )));
        }
        if rule.any_of.iter().any(|m| m.contains.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "currency override '{}' has an empty URL matcher",
                rule.currency
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "sites_test.rs"]
mod tests;
