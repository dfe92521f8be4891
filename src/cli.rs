//! Command-line interface for fordle.

use clap::{Parser, Subcommand};

/// Fordle - guess the stock ticker behind a price chart
#[derive(Parser, Debug)]
#[command(name = "fordle")]
#[command(about = "Stock-ticker guessing game with Wordle-style feedback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Path to a reference dataset (JSON). Uses the embedded S&P sample
        /// if not provided.
        #[arg(long)]
        reference: Option<std::path::PathBuf>,

        /// Directory for durable guess-history snapshots. Uses an in-memory
        /// store if not provided.
        #[arg(long)]
        history_dir: Option<std::path::PathBuf>,
    },

    /// Play a game in the terminal
    Play {
        /// Difficulty mode (beginner or advanced)
        #[arg(long, default_value = "advanced")]
        mode: String,

        /// Path to a reference dataset (JSON). Uses the embedded S&P sample
        /// if not provided.
        #[arg(long)]
        reference: Option<std::path::PathBuf>,
    },

    /// Validate a reference dataset and exit
    Validate {
        /// Path to the reference dataset (JSON)
        reference: std::path::PathBuf,
    },
}
