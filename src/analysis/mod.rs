//! Risk-scoring engine.
//!
//! This module converts raw scan input into a risk score, the triggered threat
//! indicators, and a recommendation:
//! - URL analyzer (impersonation, typosquatting, subdomain chains, digits)
//! - Content analyzer (phishing phrases, call-to-action, money amounts)
//! - Classifier (safe / warn / block)
//!
//! Analyzers are pure functions over their input and an injected
//! [`IndicatorCatalog`](crate::catalog::IndicatorCatalog). They accept any
//! string; only blank input is rejected, and that happens in [`ScanInput`].

mod classify;
mod content;
mod engine;
mod rules;
mod types;
mod url;

pub use classify::{classify, Recommendation, ThreatLevel, Verdict};
pub use content::{
    analyze_content, phishing_phrase_indicator, MONEY_RELATED_CONTENT, SUSPICIOUS_CALL_TO_ACTION,
};
pub use engine::{Assessment, RiskEngine, ScanInput, ScanOutcome};
pub use types::{AnalysisResult, ScanType};
pub use url::{
    analyze_url, DOMAIN_IMPERSONATION, SUSPICIOUS_SUBDOMAIN, TYPOSQUATTING_ATTEMPT,
    UNUSUAL_DOMAIN_PATTERN,
};
