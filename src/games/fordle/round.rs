//! Typestate round engine for the guessing game.
//!
//! The round phase is encoded in the type parameter, so a finished round
//! cannot accept another guess at compile time. Win and loss are transient
//! phases: the caller acknowledges the outcome and rotates to a fresh round
//! with [`Round::next`].

use super::hints::{Hint, hints_for};
use super::rules;
use super::target::Target;
use super::types::{GuessRecord, Mode};
use std::marker::PhantomData;
use tracing::instrument;

/// Typestate marker: the round is waiting for a guess.
#[derive(Debug, Clone, Copy)]
pub struct AwaitingGuess;

/// Typestate marker: the round ended in a win.
#[derive(Debug, Clone, Copy)]
pub struct Won;

/// Typestate marker: the round ended in a loss.
#[derive(Debug, Clone, Copy)]
pub struct Lost;

/// Round state with typestate phase encoding.
///
/// - `Round<AwaitingGuess>` accepts submissions
/// - `Round<Won>` / `Round<Lost>` expose the revealed target and rotate to
///   the next round
///
/// Terminal phases carry an empty history and a zero attempt counter; the
/// final classified row survives separately for display.
#[derive(Debug, Clone)]
pub struct Round<S> {
    pub(crate) target: Target,
    pub(crate) mode: Mode,
    pub(crate) attempts: usize,
    pub(crate) history: Vec<GuessRecord>,
    pub(crate) final_feedback: Option<GuessRecord>,
    pub(crate) _state: PhantomData<S>,
}

/// Result of submitting a guess - explicit state transition.
#[derive(Debug)]
pub enum RoundTransition {
    /// Wrong guess, attempts remaining.
    Continue(Round<AwaitingGuess>),
    /// The guess matched the target symbol.
    Won(Round<Won>),
    /// Wrong guess on the last allowed attempt.
    Lost(Round<Lost>),
}

impl Round<AwaitingGuess> {
    /// Starts a fresh round against the given target.
    #[instrument]
    pub fn new(target: Target, mode: Mode) -> Self {
        Self {
            target,
            mode,
            attempts: 0,
            history: Vec::new(),
            final_feedback: None,
            _state: PhantomData,
        }
    }

    /// Restores an in-flight round from persisted state.
    pub(crate) fn restore(
        target: Target,
        mode: Mode,
        attempts: usize,
        history: Vec<GuessRecord>,
    ) -> Self {
        Self {
            target,
            mode,
            attempts,
            history,
            final_feedback: None,
            _state: PhantomData,
        }
    }

    /// Submits a guess, consuming the round and returning a transition.
    ///
    /// The guess is normalized to uppercase first. In advanced mode it is
    /// padded or truncated to the symbol length and classified per position;
    /// in beginner mode the whole selection is compared and no classification
    /// applies. A wrong guess on the last allowed attempt loses the round.
    #[instrument(skip(self), fields(mode = %self.mode, attempts = self.attempts))]
    pub fn submit(mut self, raw: &str) -> RoundTransition {
        let (guess, feedback) = match self.mode {
            Mode::Advanced => {
                let normalized = rules::normalize(raw, self.target.symbol_len());
                let cells = rules::classify(&normalized, self.target.symbol());
                let row = GuessRecord::new(self.attempts, cells);
                (normalized, Some(row))
            }
            Mode::Beginner => (raw.trim().to_uppercase(), None),
        };

        if guess == *self.target.symbol() {
            return RoundTransition::Won(Round {
                target: self.target,
                mode: self.mode,
                attempts: 0,
                history: Vec::new(),
                final_feedback: feedback,
                _state: PhantomData::<Won>,
            });
        }

        if self.attempts + 1 >= self.mode.max_rounds() {
            return RoundTransition::Lost(Round {
                target: self.target,
                mode: self.mode,
                attempts: 0,
                history: Vec::new(),
                final_feedback: feedback,
                _state: PhantomData::<Lost>,
            });
        }

        if let Some(row) = feedback {
            self.history.push(row);
        }
        self.attempts += 1;

        RoundTransition::Continue(self)
    }

    /// Hints earned so far against the current target.
    pub fn hints(&self) -> Vec<Hint> {
        hints_for(&self.target, self.attempts)
    }
}

impl<S> Round<S> {
    /// The target of this round.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// The difficulty mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Attempts consumed against the current target.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Past wrong guesses with their classifications.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }
}

impl Round<Won> {
    /// The classified row of the winning guess, if the mode produces one.
    pub fn final_feedback(&self) -> Option<&GuessRecord> {
        self.final_feedback.as_ref()
    }

    /// Rotates to a fresh round against a newly selected target.
    #[instrument(skip(self))]
    pub fn next(self, target: Target) -> Round<AwaitingGuess> {
        Round::new(target, self.mode)
    }
}

impl Round<Lost> {
    /// The classified row of the final losing guess, if the mode produces one.
    pub fn final_feedback(&self) -> Option<&GuessRecord> {
        self.final_feedback.as_ref()
    }

    /// Rotates to a fresh round against a newly selected target.
    #[instrument(skip(self))]
    pub fn next(self, target: Target) -> Round<AwaitingGuess> {
        Round::new(target, self.mode)
    }
}
