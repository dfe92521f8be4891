//! Price-history collaborator surface.
//!
//! Consumed only by the charting route; the guess engine never reads prices.
//! The trait stands in for whatever feed the deployment wires up - the core
//! treats the series as already available.

use chrono::{Duration, NaiveDate};
use derive_more::{Display, Error};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Price-history error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Price history error: {} at {}:{}", message, file, line)]
pub struct PriceError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl PriceError {
    /// Creates a new price-history error with caller location tracking.
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

/// One closing price on one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date.
    pub date: NaiveDate,
    /// Closing price.
    pub close: f64,
}

/// Provides the time-ordered closing-price series for a symbol.
pub trait PriceHistoryProvider: Send + Sync + std::fmt::Debug {
    /// Returns the chronological closing-price series for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if no series is available for the symbol.
    fn closing_prices(&self, symbol: &str) -> Result<Vec<PricePoint>, PriceError>;
}

/// In-memory price provider with a deterministic synthetic generator.
///
/// Each symbol gets a random walk seeded from its letters, so the same symbol
/// always charts the same way - enough for serving the game and for tests
/// without touching a live feed.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceHistory {
    series: HashMap<String, Vec<PricePoint>>,
}

impl StaticPriceHistory {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pre-built series for a symbol.
    pub fn insert(&mut self, symbol: impl Into<String>, series: Vec<PricePoint>) {
        self.series.insert(symbol.into().to_uppercase(), series);
    }

    /// Builds a provider with synthetic daily closes for the given symbols.
    ///
    /// The walk runs for `days` trading days ending at `end`.
    #[instrument(skip(symbols))]
    pub fn synthetic<'a>(
        symbols: impl IntoIterator<Item = &'a str>,
        days: usize,
        end: NaiveDate,
    ) -> Self {
        let mut provider = Self::new();
        for symbol in symbols {
            let series = synthetic_walk(symbol, days, end);
            provider.insert(symbol, series);
        }
        debug!(symbols = provider.series.len(), "Synthetic price series built");
        provider
    }
}

impl PriceHistoryProvider for StaticPriceHistory {
    #[instrument(skip(self))]
    fn closing_prices(&self, symbol: &str) -> Result<Vec<PricePoint>, PriceError> {
        self.series
            .get(&symbol.trim().to_uppercase())
            .cloned()
            .ok_or_else(|| PriceError::new(format!("no price series for '{}'", symbol)))
    }
}

/// Deterministic random walk seeded from the symbol's letters.
fn synthetic_walk(symbol: &str, days: usize, end: NaiveDate) -> Vec<PricePoint> {
    let seed = symbol
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
    let mut rng = StdRng::seed_from_u64(seed);

    let mut close = 20.0 + rng.gen_range(0.0..180.0);
    let start = end - Duration::days(days as i64 - 1);
    (0..days)
        .map(|i| {
            let drift: f64 = rng.gen_range(-0.02..0.021);
            close = (close * (1.0 + drift)).max(1.0);
            PricePoint {
                date: start + Duration::days(i as i64),
                close: (close * 100.0).round() / 100.0,
            }
        })
        .collect()
}
