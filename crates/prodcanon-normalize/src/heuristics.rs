//! URL-keyed corrections applied on top of the scraped fields.

use prodcanon_core::SiteRules;

/// A non-blank scraped brand always wins; otherwise the first matching site
/// rule fills it in.
#[must_use]
pub fn resolve_brand(scraped: Option<String>, url: &str, rules: &SiteRules) -> Option<String> {
    if scraped.as_deref().is_some_and(|b| !b.trim().is_empty()) {
        return scraped;
    }
    match rules.infer_brand(url) {
        Some(inferred) => {
            tracing::debug!(url, brand = inferred, "inferred brand from url");
            Some(inferred.to_owned())
        }
        None => scraped,
    }
}

/// A matching currency override replaces the scraped currency outright.
#[must_use]
pub fn resolve_currency(scraped: Option<String>, url: &str, rules: &SiteRules) -> Option<String> {
    match rules.currency_override(url) {
        Some(forced) => {
            if scraped.as_deref() != Some(forced) {
                tracing::debug!(
                    url,
                    scraped = scraped.as_deref(),
                    currency = forced,
                    "overriding scraped currency"
                );
            }
            Some(forced.to_owned())
        }
        None => scraped,
    }
}
