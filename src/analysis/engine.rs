//! Scan orchestration: validate input, run the matching analyzer, classify.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use super::{analyze_content, analyze_url, classify, AnalysisResult, ScanType, Verdict};
use crate::catalog::IndicatorCatalog;
use crate::config::MAX_INPUT_LENGTH;
use crate::error_handling::ScanError;

/// A validated scan request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanInput {
    raw_text: String,
    declared_type: ScanType,
}

impl ScanInput {
    /// Validates and trims a scan request.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::EmptyInput` for blank text and
    /// `ScanError::InputTooLong` when the trimmed text exceeds
    /// `MAX_INPUT_LENGTH` characters.
    pub fn new(raw_text: &str, declared_type: ScanType) -> Result<Self, ScanError> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Err(ScanError::EmptyInput);
        }
        let length = trimmed.chars().count();
        if length > MAX_INPUT_LENGTH {
            return Err(ScanError::InputTooLong {
                length,
                max: MAX_INPUT_LENGTH,
            });
        }
        Ok(Self {
            raw_text: trimmed.to_string(),
            declared_type,
        })
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn declared_type(&self) -> ScanType {
        self.declared_type
    }
}

/// Analyzer output tagged with the kind of input it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Assessment {
    Url(AnalysisResult),
    Email(AnalysisResult),
    Sms(AnalysisResult),
}

impl Assessment {
    pub fn scan_type(&self) -> ScanType {
        match self {
            Assessment::Url(_) => ScanType::Url,
            Assessment::Email(_) => ScanType::Email,
            Assessment::Sms(_) => ScanType::Sms,
        }
    }

    pub fn result(&self) -> &AnalysisResult {
        match self {
            Assessment::Url(result) | Assessment::Email(result) | Assessment::Sms(result) => result,
        }
    }
}

/// Completed scan: what was scanned, what fired, and what to do about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    pub subject: String,
    pub assessment: Assessment,
    pub verdict: Verdict,
    pub scanned_at: DateTime<Utc>,
}

impl ScanOutcome {
    pub fn scan_type(&self) -> ScanType {
        self.assessment.scan_type()
    }

    pub fn risk_score(&self) -> u32 {
        self.assessment.result().risk_score()
    }

    pub fn threat_indicators(&self) -> &[String] {
        self.assessment.result().threat_indicators()
    }
}

/// Risk engine bound to one immutable indicator catalog.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    catalog: Arc<IndicatorCatalog>,
}

impl RiskEngine {
    pub fn new(catalog: Arc<IndicatorCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &IndicatorCatalog {
        &self.catalog
    }

    pub fn analyze_url(&self, url: &str) -> AnalysisResult {
        analyze_url(&self.catalog, url)
    }

    pub fn analyze_content(&self, text: &str) -> AnalysisResult {
        analyze_content(&self.catalog, text)
    }

    /// Runs the analyzer for the input's declared type and classifies the score.
    pub fn scan(&self, input: &ScanInput) -> ScanOutcome {
        let text = input.raw_text();
        let assessment = match input.declared_type() {
            ScanType::Url => Assessment::Url(self.analyze_url(text)),
            ScanType::Email => Assessment::Email(self.analyze_content(text)),
            ScanType::Sms => Assessment::Sms(self.analyze_content(text)),
        };
        let verdict = classify(assessment.result().risk_score());

        debug!(
            "Indicators for {} scan: {:?}",
            assessment.scan_type(),
            assessment.result().threat_indicators()
        );
        info!(
            "Scanned {} input: score={} recommendation={} threat={}",
            assessment.scan_type(),
            assessment.result().risk_score(),
            verdict.recommendation,
            verdict.threat_level
        );

        ScanOutcome {
            subject: text.to_string(),
            assessment,
            verdict,
            scanned_at: Utc::now(),
        }
    }

    /// Validates `raw_text` and scans it.
    ///
    /// # Errors
    ///
    /// Returns the `ScanError` from [`ScanInput::new`]; no analyzer runs in that case.
    pub fn scan_text(&self, raw_text: &str, declared_type: ScanType) -> Result<ScanOutcome, ScanError> {
        let input = ScanInput::new(raw_text, declared_type)?;
        Ok(self.scan(&input))
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(IndicatorCatalog::shared_builtin())
    }
}
