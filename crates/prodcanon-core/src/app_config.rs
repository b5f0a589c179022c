use std::borrow::Cow;
use std::path::PathBuf;

use crate::sites::{load_site_rules, SiteRules};
use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// YAML site-rules file replacing the built-in table when set.
    pub sites_path: Option<PathBuf>,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl AppConfig {
    /// Site rules from `sites_path`, or the built-in table when unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured file cannot be loaded.
    pub fn site_rules(&self) -> Result<Cow<'static, SiteRules>, ConfigError> {
        match &self.sites_path {
            Some(path) => load_site_rules(path).map(Cow::Owned),
            None => Ok(Cow::Borrowed(SiteRules::builtin())),
        }
    }
}
