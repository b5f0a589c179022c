use super::*;

const SHIPPED_SITES_YAML: &str = include_str!("../../../config/sites.yaml");

#[test]
fn shipped_yaml_matches_builtin_table() {
    let rules = parse_site_rules(SHIPPED_SITES_YAML).expect("shipped sites.yaml must be valid");
    assert_eq!(&rules, SiteRules::builtin());
}

#[test]
fn infer_brand_zara() {
    let rules = SiteRules::builtin();
    assert_eq!(
        rules.infer_brand("https://www.zara.com/us/product/123"),
        Some("Zara")
    );
}

#[test]
fn infer_brand_is_case_insensitive() {
    let rules = SiteRules::builtin();
    assert_eq!(
        rules.infer_brand("HTTPS://WWW.STRADIVARIUS.COM/es/item"),
        Some("Stradivarius")
    );
}

#[test]
fn infer_brand_louis_vuitton() {
    let rules = SiteRules::builtin();
    assert_eq!(
        rules.infer_brand("https://eu.louisvuitton.com/fra-fr/produits/x"),
        Some("Louis Vuitton")
    );
}

#[test]
fn infer_brand_unknown_site() {
    let rules = SiteRules::builtin();
    assert_eq!(rules.infer_brand("https://shop.example.com/p/1"), None);
    assert_eq!(rules.infer_brand(""), None);
}

#[test]
fn currency_override_us_subdomain() {
    let rules = SiteRules::builtin();
    assert_eq!(
        rules.currency_override("https://us.louisvuitton.com/eng-us/item"),
        Some("USD")
    );
    assert_eq!(
        rules.currency_override("https://us.louisvuitton.com/products/x"),
        Some("USD")
    );
}

#[test]
fn currency_override_eng_us_path_segment() {
    let rules = SiteRules::builtin();
    assert_eq!(
        rules.currency_override("https://www.louisvuitton.com/eng-us/products/x?sku=1"),
        Some("USD")
    );
}

#[test]
fn currency_override_requires_whole_segment() {
    let rules = SiteRules::builtin();
    assert_eq!(
        rules.currency_override("https://www.louisvuitton.com/eng-usa/products/x"),
        None
    );
    assert_eq!(
        rules.currency_override("https://www.louisvuitton.com/products/x#eng-us"),
        None
    );
}

#[test]
fn currency_override_other_locales_untouched() {
    let rules = SiteRules::builtin();
    assert_eq!(
        rules.currency_override("https://eu.louisvuitton.com/fra-fr/produits/x"),
        None
    );
    assert_eq!(
        rules.currency_override("https://www.zara.com/us/product/123"),
        None
    );
}

#[test]
fn path_segments_strip_scheme_host_and_query() {
    let segments: Vec<_> = path_segments("https://host.com/a/b/?q=1#frag").collect();
    assert_eq!(segments, vec!["a", "b"]);
}

#[test]
fn parse_site_rules_accepts_custom_table() {
    let yaml = r"
brands:
  - marker: mango.com
    brand: Mango
currency_overrides:
  - currency: GBP
    any_of:
      - contains: shop.mango.com
        path_segment: gb
";
    let rules = parse_site_rules(yaml).expect("valid rules");
    assert_eq!(rules.infer_brand("https://shop.mango.com/gb/p"), Some("Mango"));
    assert_eq!(
        rules.currency_override("https://shop.mango.com/gb/p"),
        Some("GBP")
    );
    assert_eq!(rules.currency_override("https://shop.mango.com/es/p"), None);
}

#[test]
fn parse_site_rules_empty_document_yields_no_rules() {
    let rules = parse_site_rules("{}").expect("valid rules");
    assert!(rules.brands.is_empty());
    assert!(rules.currency_overrides.is_empty());
}

#[test]
fn validate_rejects_empty_marker() {
    let rules = SiteRules {
        brands: vec![BrandRule::new("  ", "Nameless")],
        currency_overrides: vec![],
    };
    let err = validate_site_rules(&rules).unwrap_err();
    assert!(err.to_string().contains("empty URL marker"));
}

#[test]
fn validate_rejects_empty_brand() {
    let rules = SiteRules {
        brands: vec![BrandRule::new("zara.com", "")],
        currency_overrides: vec![],
    };
    let err = validate_site_rules(&rules).unwrap_err();
    assert!(err.to_string().contains("empty brand name"));
}

#[test]
fn validate_rejects_duplicate_markers_case_insensitively() {
    let rules = SiteRules {
        brands: vec![
            BrandRule::new("zara.com", "Zara"),
            BrandRule::new("ZARA.com", "Zara Home"),
        ],
        currency_overrides: vec![],
    };
    let err = validate_site_rules(&rules).unwrap_err();
    assert!(err.to_string().contains("duplicate brand marker"));
}

#[test]
fn validate_rejects_bad_currency_code() {
    let rules = SiteRules {
        brands: vec![],
        currency_overrides: vec![CurrencyOverride {
            currency: "US$".to_string(),
            any_of: vec![UrlMatch {
                contains: "example.com".to_string(),
                path_segment: None,
            }],
        }],
    };
    let err = validate_site_rules(&rules).unwrap_err();
    assert!(err.to_string().contains("invalid currency code"));
}

#[test]
fn validate_rejects_override_without_matchers() {
    let rules = SiteRules {
        brands: vec![],
        currency_overrides: vec![CurrencyOverride {
            currency: "USD".to_string(),
            any_of: vec![],
        }],
    };
    let err = validate_site_rules(&rules).unwrap_err();
    assert!(err.to_string().contains("no URL matchers"));
}

#[test]
fn parse_site_rules_reports_yaml_errors() {
    let err = parse_site_rules("brands: [").unwrap_err();
    assert!(matches!(err, ConfigError::SitesFileParse(_)));
}

#[test]
fn load_site_rules_missing_file() {
    let err = load_site_rules(Path::new("/nonexistent/sites.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::SitesFileIo { .. }));
}
