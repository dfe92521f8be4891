//! Reference dataset: the table of guessable tickers.
//!
//! Sourced externally (an S&P-500-style constituents listing) and treated as
//! a read-only, already-loaded table. Validation happens once at load time;
//! play never sees a malformed set.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

/// Configuration error with location tracking.
///
/// Raised when the reference dataset is empty or malformed. Fatal: aborts
/// game initialization, never surfaces during play.
#[derive(Debug, Clone, Display, Error)]
#[display("Configuration error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for ConfigError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Parse error: {}", err))
    }
}

/// One row of the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ReferenceEntry {
    /// Ticker symbol, unique within the set.
    symbol: String,
    /// Security (company) name.
    security: String,
    /// GICS sector.
    #[serde(default)]
    sector: String,
    /// Headquarters location.
    #[serde(default)]
    headquarters: String,
}

impl ReferenceEntry {
    /// Creates an entry, uppercasing the symbol.
    pub fn new(
        symbol: impl Into<String>,
        security: impl Into<String>,
        sector: impl Into<String>,
        headquarters: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into().trim().to_uppercase(),
            security: security.into(),
            sector: sector.into(),
            headquarters: headquarters.into(),
        }
    }
}

/// A validated, non-empty set of reference entries with unique symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSet {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceSet {
    /// Validates and builds a reference set.
    ///
    /// Symbols are uppercased; each must be 1-4 characters, contain no
    /// whitespace, and be unique within the set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the set is empty or any symbol is malformed
    /// or duplicated.
    #[instrument(skip(entries))]
    pub fn new(entries: Vec<ReferenceEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::new("reference set is empty"));
        }

        let entries: Vec<ReferenceEntry> = entries
            .into_iter()
            .map(|e| {
                ReferenceEntry::new(e.symbol, e.security, e.sector, e.headquarters)
            })
            .collect();

        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            let symbol = entry.symbol();
            let len = symbol.chars().count();
            if !(1..=4).contains(&len) || symbol.chars().any(char::is_whitespace) {
                return Err(ConfigError::new(format!(
                    "invalid ticker symbol '{}': expected 1-4 non-blank characters",
                    symbol
                )));
            }
            if !seen.insert(symbol.clone()) {
                return Err(ConfigError::new(format!(
                    "duplicate ticker symbol '{}'",
                    symbol
                )));
            }
        }

        info!(entries = entries.len(), "Reference set validated");
        Ok(Self { entries })
    }

    /// Parses a reference set from a JSON array of entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on parse or validation failure.
    #[instrument(skip(json))]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<ReferenceEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Loads a reference set from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on I/O, parse, or validation failure.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The embedded default table, a sample of S&P 500 constituents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the embedded table fails validation.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json_str(include_str!("../data/reference.json"))
    }

    /// All entries in the set.
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: an empty set never survives construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by ticker symbol (case-insensitive).
    pub fn get(&self, symbol: &str) -> Option<&ReferenceEntry> {
        let symbol = symbol.trim().to_uppercase();
        self.entries.iter().find(|e| *e.symbol() == symbol)
    }
}
