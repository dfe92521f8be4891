//! Core domain types for the ticker guessing game.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Difficulty mode, which determines the guess shape and the round limit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// The guess is a whole symbol selected from the reference set; 3 attempts.
    Beginner,
    /// The guess is entered letter by letter; 5 attempts.
    Advanced,
}

impl Mode {
    /// Maximum number of attempts against a single target.
    pub fn max_rounds(self) -> usize {
        match self {
            Mode::Beginner => 3,
            Mode::Advanced => 5,
        }
    }
}

/// Outcome of evaluating one guess submission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Transition {
    /// Wrong guess with attempts remaining.
    Continue,
    /// Guess matched the target symbol.
    Win,
    /// Wrong guess on the last allowed attempt.
    Loss,
}

/// Per-position verdict for one guessed letter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Classification {
    /// The letter matches the target at this position.
    Exact,
    /// The letter occurs in the target, but not at this position.
    Present,
    /// The letter does not occur in the target.
    Absent,
}

impl Classification {
    /// Display color for this verdict.
    pub fn color(self) -> FeedbackColor {
        match self {
            Classification::Exact => FeedbackColor::Green,
            Classification::Present => FeedbackColor::Amber,
            Classification::Absent => FeedbackColor::Grey,
        }
    }
}

/// Display color derived from a [`Classification`].
///
/// Rendering derives color from the verdict enum, never from any encoded
/// string shape.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackColor {
    /// Exact match.
    Green,
    /// Letter present elsewhere in the symbol.
    Amber,
    /// Letter absent from the symbol.
    Grey,
}

/// A single guessed letter paired with its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct LetterCell {
    /// The guessed letter, normalized to uppercase.
    letter: char,
    /// The verdict for this position.
    verdict: Classification,
}

/// One row of the guess history: an attempt index plus its classified letters.
///
/// Rows are sized to the target's symbol length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GuessRecord {
    /// Zero-based round index of this guess.
    attempt: usize,
    /// Classified letters, one per target position.
    cells: Vec<LetterCell>,
}

impl GuessRecord {
    /// The guessed letters as a string.
    pub fn word(&self) -> String {
        self.cells.iter().map(|c| *c.letter()).collect()
    }
}

/// Session-lifetime win/loss counters. Monotonically incremented, never reset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters,
)]
pub struct Score {
    /// Rounds won.
    wins: u32,
    /// Rounds lost.
    losses: u32,
}

impl Score {
    /// Records a won round.
    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Records a lost round.
    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// Total rounds played to completion.
    pub fn total_played(&self) -> u32 {
        self.wins + self.losses
    }
}
