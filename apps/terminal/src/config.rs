//! Command-line and environment configuration.

use clap::Parser;
use std::path::PathBuf;

/// Review a line-pair flashcard deck in the terminal.
///
/// Keys: j flip card, k wrong, l right, r reload deck, q quit.
#[derive(Debug, Clone, Parser)]
#[command(name = "flashcards", version)]
pub struct Config {
    /// Deck file: front and back on alternating lines.
    #[arg(env = "FLASHCARD_DECK")]
    pub deck: PathBuf,

    /// Write logs to this file (the terminal is busy with the review screen).
    #[arg(long, env = "FLASHCARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Load the deck, print a summary and exit.
    #[arg(long)]
    pub check: bool,
}

impl Config {
    /// Read `.env` if present, then parse arguments and environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }
}
