//! Threat indicator catalog.
//!
//! The catalog holds the static indicator lists the analyzers match against:
//! - Known-bad domain fragments (impersonation)
//! - Misspelled brand tokens (typosquatting)
//! - Social-engineering phrases (content scanning)
//!
//! A catalog is built once, never mutated, and shared with the analyzers
//! through an `Arc`. The built-in lists can be replaced with a JSON file.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error_handling::CatalogError;

const BUILTIN_SUSPICIOUS_DOMAINS: &[&str] = &[
    "paypal-security",
    "paypal-verify",
    "amazon-security",
    "amazon-verify",
    "apple-id-verify",
    "appleid-support",
    "microsoft-support",
    "google-security",
    "secure-bank",
    "bank-verify",
    "account-verify",
    "login-verify",
];

const BUILTIN_TYPOSQUAT_TOKENS: &[&str] = &[
    "paypa1",
    "payp4l",
    "g00gle",
    "goog1e",
    "gooogle",
    "micr0soft",
    "microsft",
    "arnazon",
    "amaz0n",
    "app1e",
    "faceb00k",
    "netf1ix",
];

const BUILTIN_PHISHING_PHRASES: &[&str] = &[
    "urgent",
    "verify your account",
    "account suspended",
    "click here",
    "confirm your identity",
    "act now",
    "limited time",
    "you have won",
    "congratulations",
    "password expired",
    "update your payment",
    "unusual activity",
    "final notice",
];

static BUILTIN: LazyLock<Arc<IndicatorCatalog>> =
    LazyLock::new(|| Arc::new(IndicatorCatalog::builtin()));

/// Immutable set of threat indicators used by the analyzers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorCatalog {
    suspicious_domain_substrings: Vec<String>,
    typosquat_tokens: Vec<String>,
    phishing_phrases: Vec<String>,
}

/// On-disk catalog layout. Missing keys are treated as empty lists.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    suspicious_domain_substrings: Vec<String>,
    typosquat_tokens: Vec<String>,
    phishing_phrases: Vec<String>,
}

impl IndicatorCatalog {
    /// Builds a catalog from raw indicator lists.
    ///
    /// Entries are trimmed and blank entries dropped; duplicates keep their
    /// first position. Domain fragments are lower-cased because they are
    /// matched against a lower-cased URL. Typosquat tokens are kept as given
    /// and matched case-sensitively. Phrases keep their original spelling for
    /// indicator text; they are matched and deduplicated case-insensitively.
    pub fn new<D, T, P>(
        suspicious_domain_substrings: D,
        typosquat_tokens: T,
        phishing_phrases: P,
    ) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        Self {
            suspicious_domain_substrings: normalize_entries(
                suspicious_domain_substrings,
                EntryCase::Lower,
            ),
            typosquat_tokens: normalize_entries(typosquat_tokens, EntryCase::Exact),
            phishing_phrases: normalize_entries(phishing_phrases, EntryCase::Folded),
        }
    }

    /// Returns the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_SUSPICIOUS_DOMAINS,
            BUILTIN_TYPOSQUAT_TOKENS,
            BUILTIN_PHISHING_PHRASES,
        )
    }

    /// Returns the process-wide built-in catalog, built on first use.
    pub fn shared_builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Parses a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and
    /// `CatalogError::Empty` when every list is empty after normalization.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let catalog = Self::new(
            file.suspicious_domain_substrings,
            file.typosquat_tokens,
            file.phishing_phrases,
        );
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        debug!(
            "Loaded catalog: {} domain fragments, {} typosquat tokens, {} phrases",
            catalog.suspicious_domain_substrings.len(),
            catalog.typosquat_tokens.len(),
            catalog.phishing_phrases.len()
        );
        Ok(catalog)
    }

    /// Reads and parses a catalog JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, plus any error
    /// from [`IndicatorCatalog::from_json_str`].
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// True when the catalog holds no indicators at all.
    pub fn is_empty(&self) -> bool {
        self.suspicious_domain_substrings.is_empty()
            && self.typosquat_tokens.is_empty()
            && self.phishing_phrases.is_empty()
    }

    pub fn suspicious_domain_substrings(&self) -> &[String] {
        &self.suspicious_domain_substrings
    }

    pub fn typosquat_tokens(&self) -> &[String] {
        &self.typosquat_tokens
    }

    pub fn phishing_phrases(&self) -> &[String] {
        &self.phishing_phrases
    }

    /// First known-bad domain fragment contained in `url` (compared lower-cased).
    pub fn find_suspicious_domain(&self, url: &str) -> Option<&str> {
        let url_lower = url.to_lowercase();
        self.suspicious_domain_substrings
            .iter()
            .find(|fragment| url_lower.contains(fragment.as_str()))
            .map(String::as_str)
    }

    /// First typosquat token contained in `url` (case-sensitive).
    pub fn find_typosquat(&self, url: &str) -> Option<&str> {
        self.typosquat_tokens
            .iter()
            .find(|token| url.contains(token.as_str()))
            .map(String::as_str)
    }

    /// Phrases contained in `text`, case-insensitively, in catalog order.
    pub fn matching_phrases(&self, text: &str) -> Vec<&str> {
        let text_lower = text.to_lowercase();
        self.phishing_phrases
            .iter()
            .filter(|phrase| text_lower.contains(&phrase.to_lowercase()))
            .map(String::as_str)
            .collect()
    }
}

impl Default for IndicatorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// How catalog entries are stored and compared for duplicates.
#[derive(Debug, Clone, Copy)]
enum EntryCase {
    /// Stored lower-cased
    Lower,
    /// Stored and compared as given
    Exact,
    /// Stored as given, compared ignoring case (first spelling wins)
    Folded,
}

fn normalize_entries<I>(entries: I, case: EntryCase) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter_map(|entry| {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() {
                return None;
            }
            let (value, key) = match case {
                EntryCase::Lower => (trimmed.to_lowercase(), trimmed.to_lowercase()),
                EntryCase::Exact => (trimmed.to_string(), trimmed.to_string()),
                EntryCase::Folded => (trimmed.to_string(), trimmed.to_lowercase()),
            };
            if !seen.insert(key) {
                debug!("Dropping duplicate catalog entry: {}", value);
                return None;
            }
            Some(value)
        })
        .collect()
}
