//! Fordle library - a stock-ticker guessing game.
//!
//! A target ticker is drawn at random from a fixed reference list; the player
//! identifies it from its price chart either by selecting a whole symbol
//! (beginner mode, 3 attempts) or letter by letter with Wordle-style feedback
//! (advanced mode, 5 attempts), with hints escalating across wrong guesses.
//!
//! # Architecture
//!
//! - **Games**: the guess-evaluation engine, classification rules, and
//!   round/outcome state machine
//! - **Reference**: the validated table of guessable tickers
//! - **Session**: per-player state management over an injected history store
//! - **Server**: REST shell for the browser collaborator
//!
//! # Example
//!
//! ```
//! use fordle::{Classification, Game, Mode, Target, Transition};
//!
//! let target = Target::new("MMM", "Industrials", "Saint Paul, Minnesota");
//! let mut game = Game::new(target, Mode::Advanced);
//!
//! let outcome = game.submit("MNM").unwrap();
//! assert_eq!(*outcome.transition(), Transition::Continue);
//!
//! let outcome = game.submit("MMM").unwrap();
//! assert_eq!(*outcome.transition(), Transition::Win);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod reference;
mod session;
mod store;

// Public shells
pub mod cli;
pub mod prices;
pub mod server;

// Crate-level exports - Game types
pub use games::fordle::{
    AwaitingGuess, Classification, FeedbackColor, Game, GameError, GameSnapshot, GuessOutcome,
    GuessRecord, Hint, LetterCell, Lost, Mode, Round, RoundState, RoundTransition, Score, Target,
    TargetSelector, Transition, Won, classify, hints_for, normalize,
};

// Crate-level exports - Reference dataset
pub use reference::{ConfigError, ReferenceEntry, ReferenceSet};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError, SessionId, SessionManager};

// Crate-level exports - History persistence
pub use store::{GuessHistoryStore, InMemoryHistoryStore, JsonFileHistoryStore, StoreError};
