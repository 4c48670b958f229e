//! Declarative rule table evaluation.
//!
//! A rule pairs a detector with a weight. The detector returns one indicator
//! string per match; each match adds the rule's weight to the score. Rules are
//! evaluated in table order and never short-circuit.

use log::debug;

use super::AnalysisResult;
use crate::catalog::IndicatorCatalog;

/// Detector signature: returns the indicators triggered by `input`.
pub(crate) type Detector = fn(&IndicatorCatalog, &str) -> Vec<String>;

/// One heuristic rule.
pub(crate) struct Rule {
    /// Short identifier used in debug logs
    pub name: &'static str,
    /// Points added per emitted indicator
    pub weight: u32,
    pub detect: Detector,
}

/// Evaluates every rule in order against `input`.
pub(crate) fn evaluate(rules: &[Rule], catalog: &IndicatorCatalog, input: &str) -> AnalysisResult {
    let mut risk_score = 0u32;
    let mut indicators = Vec::new();

    for rule in rules {
        for indicator in (rule.detect)(catalog, input) {
            debug!("Rule '{}' matched (+{}): {}", rule.name, rule.weight, indicator);
            risk_score = risk_score.saturating_add(rule.weight);
            indicators.push(indicator);
        }
    }

    AnalysisResult::new(risk_score, indicators)
}

/// Wraps a fixed indicator when `matched` is true.
pub(crate) fn single(matched: bool, indicator: &str) -> Vec<String> {
    if matched {
        vec![indicator.to_string()]
    } else {
        Vec::new()
    }
}
