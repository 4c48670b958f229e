//! URL risk analyzer.
//!
//! Scores a URL string against structural and lexical indicators. Any string
//! is accepted: malformed URLs are scored, never rejected.

use super::rules::{evaluate, single, Rule};
use super::AnalysisResult;
use crate::catalog::IndicatorCatalog;
use crate::config::{
    DOMAIN_IMPERSONATION_WEIGHT, MAX_URL_DOTS, SUSPICIOUS_SUBDOMAIN_WEIGHT, TYPOSQUATTING_WEIGHT,
    UNUSUAL_DOMAIN_PATTERN_WEIGHT,
};

/// Emitted when the URL contains a known-bad domain fragment
pub const DOMAIN_IMPERSONATION: &str = "Domain impersonation detected";
/// Emitted when the URL contains a misspelled brand token
pub const TYPOSQUATTING_ATTEMPT: &str = "Typosquatting attempt";
/// Emitted when the URL has more than three dots
pub const SUSPICIOUS_SUBDOMAIN: &str = "Suspicious subdomain structure";
/// Emitted when a digit appears after the scheme
pub const UNUSUAL_DOMAIN_PATTERN: &str = "Unusual domain pattern";

const URL_RULES: &[Rule] = &[
    Rule {
        name: "domain_impersonation",
        weight: DOMAIN_IMPERSONATION_WEIGHT,
        detect: detect_domain_impersonation,
    },
    Rule {
        name: "typosquatting",
        weight: TYPOSQUATTING_WEIGHT,
        detect: detect_typosquatting,
    },
    Rule {
        name: "suspicious_subdomain",
        weight: SUSPICIOUS_SUBDOMAIN_WEIGHT,
        detect: detect_suspicious_subdomain,
    },
    Rule {
        name: "unusual_domain_pattern",
        weight: UNUSUAL_DOMAIN_PATTERN_WEIGHT,
        detect: detect_unusual_domain_pattern,
    },
];

/// Scores `url` against the URL rule table.
///
/// Indicators appear in rule order: impersonation, typosquatting, subdomain
/// structure, then digits in the domain.
pub fn analyze_url(catalog: &IndicatorCatalog, url: &str) -> AnalysisResult {
    evaluate(URL_RULES, catalog, url)
}

fn detect_domain_impersonation(catalog: &IndicatorCatalog, url: &str) -> Vec<String> {
    single(
        catalog.find_suspicious_domain(url).is_some(),
        DOMAIN_IMPERSONATION,
    )
}

fn detect_typosquatting(catalog: &IndicatorCatalog, url: &str) -> Vec<String> {
    single(catalog.find_typosquat(url).is_some(), TYPOSQUATTING_ATTEMPT)
}

fn detect_suspicious_subdomain(_: &IndicatorCatalog, url: &str) -> Vec<String> {
    let dots = url.matches('.').count();
    single(dots > MAX_URL_DOTS, SUSPICIOUS_SUBDOMAIN)
}

fn detect_unusual_domain_pattern(_: &IndicatorCatalog, url: &str) -> Vec<String> {
    let has_digit = strip_scheme(url).chars().any(|c| c.is_ascii_digit());
    single(has_digit, UNUSUAL_DOMAIN_PATTERN)
}

/// Removes a leading `http://` or `https://`.
fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
