//! Game session management.
//!
//! Each session owns one player's game state: current target, guess history,
//! round counter, and score. Sessions are independent; the manager's lock only
//! guards the map. Every evaluation is written through the injected history
//! store so a rebuilt process can pick up where the player left off.

use crate::games::fordle::{Game, GameError, GuessOutcome, Mode, Target, TargetSelector};
use crate::store::{GuessHistoryStore, StoreError};
use derive_more::{Display, Error, From};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Errors from session operations.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// No session with the given id.
    #[display("session '{_0}' not found")]
    #[from(skip)]
    NotFound(#[error(not(source))] String),
    /// A session with the given id already exists.
    #[display("session '{_0}' already exists")]
    #[from(skip)]
    AlreadyExists(#[error(not(source))] String),
    /// The game rejected the operation.
    #[display("{_0}")]
    Game(GameError),
    /// The history store failed.
    #[display("{_0}")]
    Store(StoreError),
}

/// A single player's session.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session id.
    pub id: SessionId,
    /// The game state.
    pub game: Game,
}

impl GameSession {
    /// Creates a new session with a fresh game.
    #[instrument(skip(target), fields(symbol = %target.symbol()))]
    pub fn new(id: SessionId, mode: Mode, target: Target) -> Self {
        info!(session_id = %id, %mode, "Creating new game session");
        Self {
            id,
            game: Game::new(target, mode),
        }
    }
}

/// Manages all game sessions over an injected history store.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
    store: Arc<dyn GuessHistoryStore>,
    selector: TargetSelector,
}

impl SessionManager {
    /// Creates a session manager.
    #[instrument(skip(store))]
    pub fn new(selector: TargetSelector, store: Arc<dyn GuessHistoryStore>) -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            store,
            selector,
        }
    }

    /// Creates a new session with a freshly selected target.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyExists`] if the id is taken, or a store
    /// error if the initial snapshot cannot be written.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId, mode: Mode) -> Result<GameSession, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        let target = self.selector.select();
        let session = GameSession::new(id.clone(), mode, target);
        self.store.save(&id, &session.game.snapshot())?;
        sessions.insert(id.clone(), session.clone());

        info!(session_id = %id, "Created new session");
        Ok(session)
    }

    /// Gets a session by id, rehydrating from the history store on a memory
    /// miss.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(session) = sessions.get(id) {
            return Some(session.clone());
        }

        match self.store.load(id) {
            Ok(Some(snapshot)) => {
                debug!(session_id = id, "Rehydrating session from store");
                let session = GameSession {
                    id: id.to_string(),
                    game: Game::from_snapshot(snapshot),
                };
                sessions.insert(id.to_string(), session.clone());
                Some(session)
            }
            Ok(None) => {
                debug!(session_id = id, "Session not found");
                None
            }
            Err(err) => {
                warn!(session_id = id, error = %err, "History store load failed");
                None
            }
        }
    }

    /// Evaluates a guess for a session and persists the updated state.
    ///
    /// Read-modify-write against the store: the updated snapshot overwrites
    /// whatever was there (last writer wins).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown session, a wrapped
    /// [`GameError`] if the round is over, or a store error.
    #[instrument(skip(self, raw))]
    pub fn submit_guess(&self, id: &str, raw: &str) -> Result<GuessOutcome, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        self.rehydrate_locked(&mut sessions, id)?;

        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let outcome = session.game.submit(raw)?;
        self.store.save(id, &session.game.snapshot())?;

        info!(
            session_id = id,
            transition = %outcome.transition(),
            attempts = outcome.attempts(),
            "Guess evaluated"
        );
        Ok(outcome)
    }

    /// Rotates a finished session to a freshly selected target.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown session, a wrapped
    /// [`GameError`] if the round is still live, or a store error.
    #[instrument(skip(self))]
    pub fn advance(&self, id: &str) -> Result<GameSession, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        self.rehydrate_locked(&mut sessions, id)?;

        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let target = self.selector.select();
        session.game.advance(target)?;
        self.store.save(id, &session.game.snapshot())?;

        info!(session_id = id, "Session advanced to next target");
        Ok(session.clone())
    }

    /// Lists all session ids known in memory.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().unwrap();
        sessions.keys().cloned().collect()
    }

    /// Loads a session from the store into the locked map if absent.
    fn rehydrate_locked(
        &self,
        sessions: &mut HashMap<SessionId, GameSession>,
        id: &str,
    ) -> Result<(), SessionError> {
        if !sessions.contains_key(id)
            && let Some(snapshot) = self.store.load(id)?
        {
            debug!(session_id = id, "Rehydrating session from store");
            sessions.insert(
                id.to_string(),
                GameSession {
                    id: id.to_string(),
                    game: Game::from_snapshot(snapshot),
                },
            );
        }
        Ok(())
    }
}
