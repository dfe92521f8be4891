//! Hint escalation across wrong guesses.

use super::target::Target;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A textual hint about the current target.
///
/// Separate from letter classification; an unavailable metadata field yields
/// an empty hint string rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Hint {
    /// The sector the company operates in.
    #[display("The stock is in the {_0} sector")]
    Sector(String),
    /// Where the company is headquartered.
    #[display("Its headquarters are located in {_0}")]
    Headquarters(String),
    /// The raw ticker symbol itself.
    #[display("The ticker is {_0}")]
    Ticker(String),
}

/// Hints earned after `attempts` wrong guesses, both modes.
///
/// After one wrong guess the sector and headquarters are revealed; from the
/// third attempt onward the raw ticker symbol is revealed as well.
#[instrument(skip(target), fields(symbol = %target.symbol()))]
pub fn hints_for(target: &Target, attempts: usize) -> Vec<Hint> {
    let mut hints = Vec::new();
    if attempts >= 1 {
        hints.push(Hint::Sector(target.sector().clone()));
        hints.push(Hint::Headquarters(target.headquarters().clone()));
    }
    if attempts >= 2 {
        hints.push(Hint::Ticker(target.symbol().clone()));
    }
    hints
}
