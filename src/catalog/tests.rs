use super::*;
use std::io::Write;

#[test]
fn test_builtin_catalog_is_populated() {
    let catalog = IndicatorCatalog::builtin();
    assert!(!catalog.is_empty());
    assert!(!catalog.suspicious_domain_substrings().is_empty());
    assert!(!catalog.typosquat_tokens().is_empty());
    assert!(!catalog.phishing_phrases().is_empty());
}

#[test]
fn test_builtin_catalog_does_not_flag_real_brand_domains() {
    let catalog = IndicatorCatalog::builtin();
    for url in [
        "https://google.com",
        "https://paypal.com",
        "https://microsoft.com",
        "https://amazon.com",
    ] {
        assert!(catalog.find_suspicious_domain(url).is_none(), "{url}");
        assert!(catalog.find_typosquat(url).is_none(), "{url}");
    }
}

#[test]
fn test_shared_builtin_is_single_instance() {
    let a = IndicatorCatalog::shared_builtin();
    let b = IndicatorCatalog::shared_builtin();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(*a, IndicatorCatalog::default());
}

#[test]
fn test_new_normalizes_entries() {
    let catalog = IndicatorCatalog::new(
        ["  Evil-Bank ", "evil-bank", ""],
        ["G00gle", "G00gle", "   "],
        ["Act Now", "act now", "Act Now"],
    );
    assert_eq!(catalog.suspicious_domain_substrings(), ["evil-bank"]);
    assert_eq!(catalog.typosquat_tokens(), ["G00gle"]);
    // Phrases are matched ignoring case, so they dedupe ignoring case too
    assert_eq!(catalog.phishing_phrases(), ["Act Now"]);
}

#[test]
fn test_phrase_differing_only_in_case_scores_once() {
    let catalog =
        IndicatorCatalog::from_json_str(r#"{"phishing_phrases": ["Act Now", "act now"]}"#)
            .expect("catalog");
    let result = crate::analysis::analyze_content(&catalog, "please act now");
    assert_eq!(result.risk_score(), 15);
    assert_eq!(
        result.threat_indicators(),
        [crate::analysis::phishing_phrase_indicator("Act Now")]
    );
}

#[test]
fn test_find_suspicious_domain_is_case_insensitive() {
    let catalog = IndicatorCatalog::new(["paypal-security"], Vec::<&str>::new(), Vec::<&str>::new());
    assert_eq!(
        catalog.find_suspicious_domain("HTTPS://PayPal-Security.example/login"),
        Some("paypal-security")
    );
    assert_eq!(catalog.find_suspicious_domain("https://paypal.com"), None);
}

#[test]
fn test_find_typosquat_is_case_sensitive() {
    let catalog = IndicatorCatalog::new(Vec::<&str>::new(), ["paypa1"], Vec::<&str>::new());
    assert_eq!(catalog.find_typosquat("http://paypa1.com"), Some("paypa1"));
    assert_eq!(catalog.find_typosquat("http://PAYPA1.com"), None);
}

#[test]
fn test_matching_phrases_preserves_catalog_order() {
    let catalog = IndicatorCatalog::new(
        Vec::<&str>::new(),
        Vec::<&str>::new(),
        ["urgent", "act now", "final notice"],
    );
    let matches = catalog.matching_phrases("FINAL NOTICE: this is URGENT");
    assert_eq!(matches, vec!["urgent", "final notice"]);
    assert!(catalog.matching_phrases("hello there").is_empty());
}

#[test]
fn test_from_json_str_with_all_keys() {
    let json = r#"{
        "suspicious_domain_substrings": ["bad-bank"],
        "typosquat_tokens": ["g00gle"],
        "phishing_phrases": ["wire transfer"]
    }"#;
    let catalog = IndicatorCatalog::from_json_str(json).expect("valid catalog");
    assert_eq!(catalog.suspicious_domain_substrings(), ["bad-bank"]);
    assert_eq!(catalog.typosquat_tokens(), ["g00gle"]);
    assert_eq!(catalog.phishing_phrases(), ["wire transfer"]);
}

#[test]
fn test_from_json_str_missing_keys_default_to_empty() {
    let catalog = IndicatorCatalog::from_json_str(r#"{"phishing_phrases": ["gift card"]}"#)
        .expect("partial catalog");
    assert!(catalog.suspicious_domain_substrings().is_empty());
    assert!(catalog.typosquat_tokens().is_empty());
    assert_eq!(catalog.phishing_phrases(), ["gift card"]);
}

#[test]
fn test_from_json_str_rejects_empty_catalog() {
    let err = IndicatorCatalog::from_json_str("{}").unwrap_err();
    assert!(matches!(err, CatalogError::Empty));

    let err = IndicatorCatalog::from_json_str(r#"{"typosquat_tokens": ["  "]}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Empty));
}

#[test]
fn test_from_json_str_rejects_malformed_json() {
    let err = IndicatorCatalog::from_json_str("[1, 2").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn test_from_json_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"suspicious_domain_substrings": ["Lookalike-Bank"]}}"#).expect("write");
    let catalog = IndicatorCatalog::from_json_file(file.path()).expect("catalog file");
    assert_eq!(catalog.suspicious_domain_substrings(), ["lookalike-bank"]);
}

#[test]
fn test_from_json_file_missing_file() {
    let err = IndicatorCatalog::from_json_file(Path::new("/nonexistent/catalog.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}
