//! HTTP shell over the session manager.
//!
//! REST surface for the browser collaborator. The engine itself owns no
//! network ports; every route is a thin translation between JSON and the
//! session operations. The target symbol never appears in a response until
//! the round is over.

use crate::games::fordle::{GuessOutcome, GuessRecord, Mode, Score};
use crate::prices::{PriceHistoryProvider, PricePoint};
use crate::session::{GameSession, SessionError, SessionManager};
use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Shared state handed to every route handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session manager owning all game state.
    pub sessions: SessionManager,
    /// Price-series source for the charting route.
    pub prices: Arc<dyn PriceHistoryProvider>,
}

/// Request body for creating a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Session id; generated when absent.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Difficulty mode.
    pub mode: Mode,
}

/// Request body for submitting a guess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    /// The raw guess: letters in advanced mode, a whole symbol in beginner
    /// mode.
    pub guess: String,
}

/// One classified letter as rendered by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellView {
    /// The guessed letter.
    pub letter: char,
    /// The verdict for this position.
    pub verdict: String,
    /// Display color derived from the verdict.
    pub color: String,
}

/// One guess-history row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowView {
    /// Zero-based round index.
    pub attempt: usize,
    /// Classified letters.
    pub cells: Vec<CellView>,
}

/// Score counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreView {
    /// Rounds won this session.
    pub wins: u32,
    /// Rounds lost this session.
    pub losses: u32,
}

/// Full session state as shown to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    /// Session id.
    pub session_id: String,
    /// Difficulty mode.
    pub mode: Mode,
    /// Attempts consumed against the current target.
    pub attempts: usize,
    /// Round limit for the mode.
    pub max_rounds: usize,
    /// Guess-history rows for the current target.
    pub rows: Vec<RowView>,
    /// Hints earned so far.
    pub hints: Vec<String>,
    /// Session score.
    pub score: ScoreView,
    /// True once the round ended in a win or loss.
    pub round_over: bool,
    /// Terminal transition, when the round is over.
    pub outcome: Option<String>,
    /// The target symbol, revealed only once the round is over.
    pub revealed: Option<String>,
}

/// One evaluated submission as shown to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessView {
    /// The transition this guess produced.
    pub transition: String,
    /// Classified letters for this guess (advanced mode only).
    pub feedback: Option<RowView>,
    /// Hints earned so far.
    pub hints: Vec<String>,
    /// The target symbol, revealed on win or loss.
    pub revealed: Option<String>,
    /// Updated score.
    pub score: ScoreView,
    /// Updated attempt counter.
    pub attempts: usize,
    /// Round limit for the mode.
    pub max_rounds: usize,
}

/// Error body returned by every failing route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Route-level error, mapped onto an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        let status = match &err {
            SessionError::NotFound(_) => StatusCode::NOT_FOUND,
            SessionError::AlreadyExists(_) => StatusCode::CONFLICT,
            SessionError::Game(_) => StatusCode::CONFLICT,
            SessionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, message = %self.message, "Request failed");
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(get_session))
        .route("/sessions/{id}/guess", post(submit_guess))
        .route("/sessions/{id}/next", post(next_round))
        .route("/sessions/{id}/chart", get(chart))
        .with_state(state)
}

/// Binds and serves the router until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
#[instrument(skip(state))]
pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(host, port, "Server ready");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

#[instrument(skip(state, req))]
async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let id = req.session_id.unwrap_or_else(|| {
        format!("game_{}", chrono::Utc::now().timestamp_millis())
    });
    info!(session_id = %id, mode = %req.mode, "Creating session");
    let session = state.sessions.create_session(id, req.mode)?;
    Ok((StatusCode::CREATED, Json(session_view(&session))))
}

#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let session = state
        .sessions
        .get_session(&id)
        .ok_or_else(|| ApiError::not_found(format!("session '{}' not found", id)))?;
    Ok(Json(session_view(&session)))
}

#[instrument(skip(state, req))]
async fn submit_guess(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<GuessRequest>,
) -> Result<Json<GuessView>, ApiError> {
    let outcome = state.sessions.submit_guess(&id, &req.guess)?;
    Ok(Json(guess_view(&outcome)))
}

#[instrument(skip(state))]
async fn next_round(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let session = state.sessions.advance(&id)?;
    Ok(Json(session_view(&session)))
}

#[instrument(skip(state))]
async fn chart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PricePoint>>, ApiError> {
    let session = state
        .sessions
        .get_session(&id)
        .ok_or_else(|| ApiError::not_found(format!("session '{}' not found", id)))?;

    // Dates and closes only: the response must not leak the symbol.
    let series = state
        .prices
        .closing_prices(session.game.target().symbol())
        .map_err(|err| ApiError::not_found(err.to_string()))?;
    Ok(Json(series))
}

fn row_view(record: &GuessRecord) -> RowView {
    RowView {
        attempt: *record.attempt(),
        cells: record
            .cells()
            .iter()
            .map(|cell| CellView {
                letter: *cell.letter(),
                verdict: cell.verdict().to_string(),
                color: cell.verdict().color().to_string(),
            })
            .collect(),
    }
}

fn score_view(score: Score) -> ScoreView {
    ScoreView {
        wins: *score.wins(),
        losses: *score.losses(),
    }
}

fn session_view(session: &GameSession) -> SessionView {
    let game = &session.game;
    SessionView {
        session_id: session.id.clone(),
        mode: game.mode(),
        attempts: game.attempts(),
        max_rounds: game.mode().max_rounds(),
        rows: game.history().iter().map(row_view).collect(),
        hints: game.hints().iter().map(ToString::to_string).collect(),
        score: score_view(game.score()),
        round_over: game.is_round_over(),
        outcome: game.outcome().map(|t| t.to_string()),
        revealed: game.revealed().map(str::to_string),
    }
}

fn guess_view(outcome: &GuessOutcome) -> GuessView {
    GuessView {
        transition: outcome.transition().to_string(),
        feedback: outcome.feedback().as_ref().map(row_view),
        hints: outcome.hints().iter().map(ToString::to_string).collect(),
        revealed: outcome.revealed().clone(),
        score: score_view(*outcome.score()),
        attempts: *outcome.attempts(),
        max_rounds: *outcome.max_rounds(),
    }
}
