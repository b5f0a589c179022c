pub mod app_config;
pub mod config;
pub mod money;
pub mod products;
pub mod sites;
pub mod stock;
pub mod variants;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use money::{format_price, CurrencyStyle, SymbolPosition};
pub use products::{ProductRecord, VariantGroup, VariantGroups};
pub use sites::{load_site_rules, parse_site_rules, BrandRule, CurrencyOverride, SiteRules, UrlMatch};
pub use stock::{StockRule, OUT_OF_STOCK_KEYWORDS, STOCK_RULES};
pub use variants::{VariantExtra, VariantOption};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read site rules file {path}: {source}")]
    SitesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse site rules: {0}")]
    SitesFileParse(#[from] serde_yaml::Error),

    #[error("site rules validation failed: {0}")]
    Validation(String),
}
