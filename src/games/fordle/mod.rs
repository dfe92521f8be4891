//! Fordle: guess the stock ticker behind a price chart.
//!
//! The engine compares a submitted guess against the current target symbol,
//! classifies each position as exact/present/absent, accumulates a guess
//! history across rounds, and drives the round/outcome state machine
//! (continue, win, loss, hint escalation).

mod game;
mod hints;
mod round;
mod rules;
mod selector;
mod target;
mod types;

pub use game::{Game, GameError, GameSnapshot, GuessOutcome, RoundState};
pub use hints::{Hint, hints_for};
pub use round::{AwaitingGuess, Lost, Round, RoundTransition, Won};
pub use rules::{classify, normalize};
pub use selector::TargetSelector;
pub use target::Target;
pub use types::{Classification, FeedbackColor, GuessRecord, LetterCell, Mode, Score, Transition};
