use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config.log_level, "info");
    assert!(config.sites_path.is_none());
    assert!(!config.pretty);
}

#[test]
fn build_app_config_reads_all_vars() {
    let mut map = HashMap::new();
    map.insert("PRODCANON_LOG_LEVEL", "debug");
    map.insert("PRODCANON_SITES_PATH", "./config/sites.yaml");
    map.insert("PRODCANON_PRETTY", "yes");
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(
        config.sites_path,
        Some(PathBuf::from("./config/sites.yaml"))
    );
    assert!(config.pretty);
}

#[test]
fn build_app_config_blank_sites_path_is_unset() {
    let mut map = HashMap::new();
    map.insert("PRODCANON_SITES_PATH", "  ");
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(config.sites_path.is_none());
}

#[test]
fn build_app_config_rejects_bad_pretty_flag() {
    let mut map = HashMap::new();
    map.insert("PRODCANON_PRETTY", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PRODCANON_PRETTY"),
        "expected InvalidEnvVar(PRODCANON_PRETTY), got: {result:?}"
    );
}

#[test]
fn site_rules_default_to_builtin() {
    let map: HashMap<&str, &str> = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    let rules = config.site_rules().unwrap();
    assert_eq!(&*rules, crate::SiteRules::builtin());
}

#[test]
fn site_rules_missing_file_is_an_error() {
    let mut map = HashMap::new();
    map.insert("PRODCANON_SITES_PATH", "/nonexistent/sites.yaml");
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(matches!(
        config.site_rules(),
        Err(ConfigError::SitesFileIo { .. })
    ));
}
