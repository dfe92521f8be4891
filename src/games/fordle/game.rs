//! Mode-parameterized game wrapper over the typestate round engine.
//!
//! Since typestate phases can't be directly serialized or held behind a
//! mutable reference, [`Game`] wraps all possible phases, owns the
//! session-lifetime [`Score`], and converts to and from [`GameSnapshot`] for
//! persistence.

use super::hints::Hint;
use super::round::{AwaitingGuess, Round, RoundTransition};
use super::target::Target;
use super::types::{GuessRecord, Mode, Score, Transition};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Errors from driving the game out of phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A guess was submitted to a finished round.
    #[display("round is over; acknowledge the outcome and advance to the next target")]
    RoundOver,
    /// Target rotation was requested while the round is still live.
    #[display("round is still in progress; rotation only follows a win or loss")]
    RoundInProgress,
}

/// Current phase of the wrapped round.
#[derive(Debug, Clone)]
enum Phase {
    Awaiting(Round<AwaitingGuess>),
    Won(Round<super::round::Won>),
    Lost(Round<super::round::Lost>),
}

/// Everything the caller needs to display one evaluated submission.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct GuessOutcome {
    /// The state-machine transition this guess produced.
    transition: Transition,
    /// Classified letters for this guess (advanced mode only).
    feedback: Option<GuessRecord>,
    /// Hints earned so far against the current target.
    hints: Vec<Hint>,
    /// The target symbol, revealed on a terminal transition.
    revealed: Option<String>,
    /// Updated session score.
    score: Score,
    /// Updated attempt counter.
    attempts: usize,
    /// Round limit for the active mode.
    max_rounds: usize,
}

/// A single player's game: the active round plus the session score.
#[derive(Debug, Clone)]
pub struct Game {
    phase: Phase,
    score: Score,
}

impl Game {
    /// Starts a game against the given target.
    #[instrument(skip(target), fields(symbol = %target.symbol()))]
    pub fn new(target: Target, mode: Mode) -> Self {
        info!(%mode, "Starting game");
        Self {
            phase: Phase::Awaiting(Round::new(target, mode)),
            score: Score::default(),
        }
    }

    /// Evaluates a guess against the current target.
    ///
    /// On a win or loss the round counter resets and the history is cleared;
    /// the next target is *not* selected here - the caller acknowledges the
    /// outcome and calls [`Game::advance`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundOver`] if the round already ended.
    #[instrument(skip(self), fields(mode = %self.mode()))]
    pub fn submit(&mut self, raw: &str) -> Result<GuessOutcome, GameError> {
        let round = match &self.phase {
            Phase::Awaiting(round) => round.clone(),
            Phase::Won(_) | Phase::Lost(_) => return Err(GameError::RoundOver),
        };
        let max_rounds = round.mode().max_rounds();

        let outcome = match round.submit(raw) {
            RoundTransition::Continue(round) => {
                debug!(attempts = round.attempts(), "Wrong guess, round continues");
                let outcome = GuessOutcome {
                    transition: Transition::Continue,
                    feedback: round.history().last().cloned(),
                    hints: round.hints(),
                    revealed: None,
                    score: self.score,
                    attempts: round.attempts(),
                    max_rounds,
                };
                self.phase = Phase::Awaiting(round);
                outcome
            }
            RoundTransition::Won(round) => {
                self.score.record_win();
                info!(wins = self.score.wins(), "Round won");
                let outcome = GuessOutcome {
                    transition: Transition::Win,
                    feedback: round.final_feedback().cloned(),
                    hints: Vec::new(),
                    revealed: Some(round.target().symbol().clone()),
                    score: self.score,
                    attempts: 0,
                    max_rounds,
                };
                self.phase = Phase::Won(round);
                outcome
            }
            RoundTransition::Lost(round) => {
                self.score.record_loss();
                info!(losses = self.score.losses(), "Round lost");
                let outcome = GuessOutcome {
                    transition: Transition::Loss,
                    feedback: round.final_feedback().cloned(),
                    hints: Vec::new(),
                    revealed: Some(round.target().symbol().clone()),
                    score: self.score,
                    attempts: 0,
                    max_rounds,
                };
                self.phase = Phase::Lost(round);
                outcome
            }
        };

        Ok(outcome)
    }

    /// Rotates to a fresh round against a newly selected target.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundInProgress`] if the current round has not
    /// ended yet.
    #[instrument(skip(self, target), fields(symbol = %target.symbol()))]
    pub fn advance(&mut self, target: Target) -> Result<(), GameError> {
        match std::mem::replace(&mut self.phase, Phase::placeholder()) {
            Phase::Won(round) => {
                self.phase = Phase::Awaiting(round.next(target));
                Ok(())
            }
            Phase::Lost(round) => {
                self.phase = Phase::Awaiting(round.next(target));
                Ok(())
            }
            awaiting @ Phase::Awaiting(_) => {
                self.phase = awaiting;
                Err(GameError::RoundInProgress)
            }
        }
    }

    /// The difficulty mode.
    pub fn mode(&self) -> Mode {
        match &self.phase {
            Phase::Awaiting(r) => r.mode(),
            Phase::Won(r) => r.mode(),
            Phase::Lost(r) => r.mode(),
        }
    }

    /// The target of the current round sequence.
    pub fn target(&self) -> &Target {
        match &self.phase {
            Phase::Awaiting(r) => r.target(),
            Phase::Won(r) => r.target(),
            Phase::Lost(r) => r.target(),
        }
    }

    /// Attempts consumed against the current target.
    pub fn attempts(&self) -> usize {
        match &self.phase {
            Phase::Awaiting(r) => r.attempts(),
            Phase::Won(r) => r.attempts(),
            Phase::Lost(r) => r.attempts(),
        }
    }

    /// Past wrong guesses with their classifications for the current target.
    pub fn history(&self) -> &[GuessRecord] {
        match &self.phase {
            Phase::Awaiting(r) => r.history(),
            Phase::Won(r) => r.history(),
            Phase::Lost(r) => r.history(),
        }
    }

    /// Hints earned so far; empty once the round is over.
    pub fn hints(&self) -> Vec<Hint> {
        match &self.phase {
            Phase::Awaiting(r) => r.hints(),
            Phase::Won(_) | Phase::Lost(_) => Vec::new(),
        }
    }

    /// The session score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// True once the round ended in a win or loss.
    pub fn is_round_over(&self) -> bool {
        matches!(self.phase, Phase::Won(_) | Phase::Lost(_))
    }

    /// Terminal transition of the current round, if it ended.
    pub fn outcome(&self) -> Option<Transition> {
        match &self.phase {
            Phase::Awaiting(_) => None,
            Phase::Won(_) => Some(Transition::Win),
            Phase::Lost(_) => Some(Transition::Loss),
        }
    }

    /// The target symbol, revealed only once the round is over.
    pub fn revealed(&self) -> Option<&str> {
        match &self.phase {
            Phase::Awaiting(_) => None,
            Phase::Won(r) => Some(r.target().symbol()),
            Phase::Lost(r) => Some(r.target().symbol()),
        }
    }

    /// Captures the persistable state of this game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            mode: self.mode(),
            score: self.score,
            state: match &self.phase {
                Phase::Awaiting(r) => RoundState::Awaiting {
                    target: r.target().clone(),
                    attempts: r.attempts(),
                    history: r.history().to_vec(),
                },
                Phase::Won(r) => RoundState::Won {
                    target: r.target().clone(),
                },
                Phase::Lost(r) => RoundState::Lost {
                    target: r.target().clone(),
                },
            },
        }
    }

    /// Restores a game from a persisted snapshot.
    #[instrument(skip(snapshot), fields(mode = %snapshot.mode))]
    pub fn from_snapshot(snapshot: GameSnapshot) -> Self {
        let GameSnapshot { mode, score, state } = snapshot;
        let phase = match state {
            RoundState::Awaiting {
                target,
                attempts,
                history,
            } => Phase::Awaiting(Round::restore(target, mode, attempts, history)),
            RoundState::Won { target } => Phase::Won(Round {
                target,
                mode,
                attempts: 0,
                history: Vec::new(),
                final_feedback: None,
                _state: std::marker::PhantomData,
            }),
            RoundState::Lost { target } => Phase::Lost(Round {
                target,
                mode,
                attempts: 0,
                history: Vec::new(),
                final_feedback: None,
                _state: std::marker::PhantomData,
            }),
        };
        Self { phase, score }
    }
}

impl Phase {
    /// Transient value swapped in during [`Game::advance`].
    fn placeholder() -> Self {
        Phase::Awaiting(Round::new(Target::new("?", "", ""), Mode::Advanced))
    }
}

/// Serializable state of a [`Game`], as written to the history store.
///
/// The wire/disk format of the persistence slot; the terminal final-feedback
/// row is display-transient and is not carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The difficulty mode.
    pub mode: Mode,
    /// The session score.
    pub score: Score,
    /// The active round state.
    pub state: RoundState,
}

/// Round state within a [`GameSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for a guess.
    Awaiting {
        /// The current target.
        target: Target,
        /// Attempts consumed.
        attempts: usize,
        /// Wrong guesses so far.
        history: Vec<GuessRecord>,
    },
    /// Round ended in a win; awaiting rotation.
    Won {
        /// The revealed target.
        target: Target,
    },
    /// Round ended in a loss; awaiting rotation.
    Lost {
        /// The revealed target.
        target: Target,
    },
}
