//! Guess normalization and per-position classification rules.

use super::types::{Classification, LetterCell};
use tracing::instrument;

/// Character used to pad a short guess up to the target length.
///
/// A blank never occurs in a ticker symbol, so padded positions classify as
/// absent.
const BLANK: char = ' ';

/// Normalizes a raw guess to uppercase and exactly `len` characters.
///
/// Short input is padded with blanks, long input truncated. The calling
/// boundary is expected to collect the right number of characters; a malformed
/// guess is simply classified as wrong rather than rejected.
#[instrument]
pub fn normalize(raw: &str, len: usize) -> String {
    let mut letters: Vec<char> = raw.trim().to_uppercase().chars().take(len).collect();
    while letters.len() < len {
        letters.push(BLANK);
    }
    letters.into_iter().collect()
}

/// Classifies a normalized guess against the target symbol, position by
/// position.
///
/// For each position: [`Classification::Exact`] if the letters match,
/// [`Classification::Present`] if the letter occurs anywhere else in the
/// target, [`Classification::Absent`] otherwise. The result always has one
/// cell per target position and is computed fresh on every call.
#[instrument]
pub fn classify(guess: &str, target: &str) -> Vec<LetterCell> {
    guess
        .chars()
        .zip(target.chars())
        .map(|(g, t)| {
            let verdict = if g == t {
                Classification::Exact
            } else if target.contains(g) {
                Classification::Present
            } else {
                Classification::Absent
            };
            LetterCell::new(g, verdict)
        })
        .collect()
}
