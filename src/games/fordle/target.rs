//! The symbol currently being guessed.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The target of a round sequence: a ticker symbol plus the metadata the hint
/// logic reveals.
///
/// Immutable for the duration of a round sequence; replaced wholesale when the
/// sequence ends in a win or loss. Missing metadata is carried as an empty
/// string rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Target {
    /// Uppercase ticker symbol, 1-4 characters.
    symbol: String,
    /// GICS sector, possibly empty.
    sector: String,
    /// Headquarters location, possibly empty.
    headquarters: String,
}

impl Target {
    /// Creates a target, uppercasing the symbol.
    pub fn new(
        symbol: impl Into<String>,
        sector: impl Into<String>,
        headquarters: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into().trim().to_uppercase(),
            sector: sector.into(),
            headquarters: headquarters.into(),
        }
    }

    /// Number of characters in the symbol.
    pub fn symbol_len(&self) -> usize {
        self.symbol.chars().count()
    }
}
