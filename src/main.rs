//! Fordle - Unified CLI
//!
//! Stock-ticker guessing game with an HTTP server and a terminal mode.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use fordle::cli::{Cli, Command};
use fordle::prices::StaticPriceHistory;
use fordle::server::{AppState, serve};
use fordle::{
    Game, GuessHistoryStore, InMemoryHistoryStore, JsonFileHistoryStore, Mode, ReferenceSet,
    SessionManager, TargetSelector, Transition,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            host,
            port,
            reference,
            history_dir,
        } => run_server(host, port, reference, history_dir).await,
        Command::Play { mode, reference } => run_play(&mode, reference),
        Command::Validate { reference } => run_validate(&reference),
    }
}

/// Run the HTTP game server
async fn run_server(
    host: String,
    port: u16,
    reference: Option<PathBuf>,
    history_dir: Option<PathBuf>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Fordle server");

    let reference = load_reference(reference.as_deref())?;
    let symbols: Vec<String> = reference
        .entries()
        .iter()
        .map(|e| e.symbol().clone())
        .collect();

    let store: Arc<dyn GuessHistoryStore> = match history_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Using file-backed history store");
            Arc::new(JsonFileHistoryStore::new(dir)?)
        }
        None => {
            info!("Using in-memory history store");
            Arc::new(InMemoryHistoryStore::new())
        }
    };

    let prices = StaticPriceHistory::synthetic(
        symbols.iter().map(String::as_str),
        365,
        chrono::Utc::now().date_naive(),
    );

    let state = AppState {
        sessions: SessionManager::new(TargetSelector::new(reference), store),
        prices: Arc::new(prices),
    };

    serve(state, &host, port).await
}

/// Play a game loop in the terminal
fn run_play(mode: &str, reference: Option<PathBuf>) -> Result<()> {
    let mode: Mode = mode.parse()?;
    let reference = load_reference(reference.as_deref())?;
    let selector = TargetSelector::new(reference);
    let mut game = Game::new(selector.select(), mode);

    println!(
        "Fordle - guess the ticker! Mode: {}, {} attempts per round. Type 'quit' to stop.",
        mode,
        mode.max_rounds()
    );

    let stdin = std::io::stdin();
    loop {
        print!(
            "[{} wins / {} losses] attempt {}/{} > ",
            game.score().wins(),
            game.score().losses(),
            game.attempts() + 1,
            game.mode().max_rounds()
        );
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            break;
        }

        let outcome = game.submit(line)?;
        if let Some(row) = outcome.feedback() {
            let rendered: Vec<String> = row
                .cells()
                .iter()
                .map(|c| format!("{}={}", c.letter(), c.verdict().color()))
                .collect();
            println!("  {}", rendered.join("  "));
        }
        match outcome.transition() {
            Transition::Continue => {
                for hint in outcome.hints() {
                    println!("  Hint: {}", hint);
                }
            }
            Transition::Win => {
                println!("  Correct! Next stock...");
                game.advance(selector.select())?;
            }
            Transition::Loss => {
                println!(
                    "  You have lost. The answer was {}. Next stock...",
                    outcome.revealed().as_deref().unwrap_or("?")
                );
                game.advance(selector.select())?;
            }
        }
    }

    println!(
        "Final score: {} wins, {} losses.",
        game.score().wins(),
        game.score().losses()
    );
    Ok(())
}

/// Validate a reference dataset and exit
fn run_validate(path: &Path) -> Result<()> {
    let reference = ReferenceSet::from_path(path)?;
    println!(
        "{}: {} entries, all symbols valid and unique.",
        path.display(),
        reference.len()
    );
    Ok(())
}

/// Loads the reference dataset from a path, or the embedded sample.
fn load_reference(path: Option<&Path>) -> Result<ReferenceSet> {
    let reference = match path {
        Some(path) => ReferenceSet::from_path(path)?,
        None => ReferenceSet::builtin()?,
    };
    Ok(reference)
}
