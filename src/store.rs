//! Session-keyed persistence slot for guess history.
//!
//! The UI collaborator may tear down and rebuild its process state between
//! submissions, so the engine's state is written through an injected store
//! after every evaluation: read-modify-write keyed by session id, with
//! last-writer-wins semantics (no concurrent writers are expected per
//! session).

use crate::games::fordle::GameSnapshot;
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, instrument};

/// Storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Storage error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new storage error with caller location tracking.
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

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Serialization error: {}", err))
    }
}

/// Durable read/overwrite of a game snapshot keyed by session.
pub trait GuessHistoryStore: Send + Sync + std::fmt::Debug {
    /// Loads the snapshot for a session, `None` if the session has none.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage failure.
    fn load(&self, session_id: &str) -> Result<Option<GameSnapshot>, StoreError>;

    /// Overwrites the snapshot for a session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage failure.
    fn save(&self, session_id: &str, snapshot: &GameSnapshot) -> Result<(), StoreError>;

    /// Removes the snapshot for a session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage failure.
    fn clear(&self, session_id: &str) -> Result<(), StoreError>;
}

/// Process-local store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    inner: Mutex<HashMap<String, GameSnapshot>>,
}

impl InMemoryHistoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuessHistoryStore for InMemoryHistoryStore {
    #[instrument(skip(self))]
    fn load(&self, session_id: &str) -> Result<Option<GameSnapshot>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.get(session_id).cloned())
    }

    #[instrument(skip(self, snapshot))]
    fn save(&self, session_id: &str, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.insert(session_id.to_string(), snapshot.clone());
        debug!("Snapshot saved");
        Ok(())
    }

    #[instrument(skip(self))]
    fn clear(&self, session_id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.remove(session_id);
        Ok(())
    }
}

/// File-backed store: one JSON document per session under a directory.
///
/// Survives the calling process being rebuilt between submissions. The
/// on-disk layout is an implementation detail of this store, not part of the
/// engine's contract.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    dir: PathBuf,
}

impl JsonFileHistoryStore {
    /// Creates a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the directory cannot be created.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, session_id: &str) -> PathBuf {
        // Session ids become file names; anything unusual is mapped away.
        let safe: String = session_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

impl GuessHistoryStore for JsonFileHistoryStore {
    #[instrument(skip(self))]
    fn load(&self, session_id: &str) -> Result<Option<GameSnapshot>, StoreError> {
        let path = self.path_for(session_id);
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot = serde_json::from_str(&json)?;
        debug!(path = %path.display(), "Snapshot loaded");
        Ok(Some(snapshot))
    }

    #[instrument(skip(self, snapshot))]
    fn save(&self, session_id: &str, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        let path = self.path_for(session_id);
        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&path, json)?;
        debug!(path = %path.display(), "Snapshot saved");
        Ok(())
    }

    #[instrument(skip(self))]
    fn clear(&self, session_id: &str) -> Result<(), StoreError> {
        let path = self.path_for(session_id);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
