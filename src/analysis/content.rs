//! Content risk analyzer for email and SMS text.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{evaluate, single, Rule};
use super::AnalysisResult;
use crate::catalog::IndicatorCatalog;
use crate::config::{CALL_TO_ACTION_WEIGHT, MONEY_CONTENT_WEIGHT, PHISHING_PHRASE_WEIGHT};

/// Emitted when "click" is followed later by "here"
pub const SUSPICIOUS_CALL_TO_ACTION: &str = "Suspicious call-to-action";
/// Emitted when a dollar amount appears
pub const MONEY_RELATED_CONTENT: &str = "Money-related content";

// `.` does not cross line breaks, so "click" and "here" must share a line.
const CALL_TO_ACTION_PATTERN: &str = r"(?i)click.*here";
const MONEY_AMOUNT_PATTERN: &str = r"\$\d+";

/// Compiles a constant pattern; a failure here is a programming error.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static CALL_TO_ACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(CALL_TO_ACTION_PATTERN, "CALL_TO_ACTION_RE"));
static MONEY_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(MONEY_AMOUNT_PATTERN, "MONEY_AMOUNT_RE"));

const CONTENT_RULES: &[Rule] = &[
    Rule {
        name: "phishing_phrase",
        weight: PHISHING_PHRASE_WEIGHT,
        detect: detect_phishing_phrases,
    },
    Rule {
        name: "call_to_action",
        weight: CALL_TO_ACTION_WEIGHT,
        detect: detect_call_to_action,
    },
    Rule {
        name: "money_content",
        weight: MONEY_CONTENT_WEIGHT,
        detect: detect_money_content,
    },
];

/// Formats the indicator emitted for a matching phrase.
pub fn phishing_phrase_indicator(phrase: &str) -> String {
    format!("Phishing phrase: \"{phrase}\"")
}

/// Scores free-form text against the content rule table.
///
/// Every matching catalog phrase contributes separately, so the score has no
/// upper bound.
pub fn analyze_content(catalog: &IndicatorCatalog, text: &str) -> AnalysisResult {
    evaluate(CONTENT_RULES, catalog, text)
}

fn detect_phishing_phrases(catalog: &IndicatorCatalog, text: &str) -> Vec<String> {
    catalog
        .matching_phrases(text)
        .into_iter()
        .map(phishing_phrase_indicator)
        .collect()
}

fn detect_call_to_action(_: &IndicatorCatalog, text: &str) -> Vec<String> {
    single(CALL_TO_ACTION_RE.is_match(text), SUSPICIOUS_CALL_TO_ACTION)
}

fn detect_money_content(_: &IndicatorCatalog, text: &str) -> Vec<String> {
    single(MONEY_AMOUNT_RE.is_match(text), MONEY_RELATED_CONTENT)
}
