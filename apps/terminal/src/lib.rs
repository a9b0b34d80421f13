pub mod config;
pub mod logging;
pub mod summary;
pub mod terminal;

use anyhow::{Context, Result};
use chrono::Utc;
use flashcard_core::{request_exit, DeckStore, ExitRequest, Scheduler, Session};

use crate::config::Config;
use crate::logging::LogTarget;
use crate::summary::{DeckSummary, SessionSummary};
use crate::terminal::TerminalSurface;

pub fn run() -> Result<ExitRequest> {
    let config = Config::load();
    logging::init(LogTarget::choose(config.log_file.as_deref(), !config.check))?;

    let deck = flashcard_core::load(&config.deck)
        .with_context(|| format!("failed to load deck {}", config.deck.display()))?;
    tracing::info!(path = %config.deck.display(), cards = deck.len(), "deck loaded");

    if config.check {
        let summary = DeckSummary::new(&config.deck, &deck);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(request_exit(0));
    }

    let started_at = Utc::now();
    let scheduler = Scheduler::new(DeckStore::with_deck(deck));
    let surface = TerminalSurface::enter().context("failed to set up terminal")?;
    let mut session = Session::new(surface, scheduler)
        .context("failed to create review screen")?
        .with_deck_path(&config.deck);

    let outcome = session.run();
    let (mut surface, scheduler) = session.into_parts();
    surface.restore().context("failed to restore terminal")?;
    let exit = outcome.context("review session failed")?;

    let summary = SessionSummary::new(
        started_at,
        Utc::now(),
        scheduler.counters(),
        scheduler.passes(),
    );
    tracing::info!(
        right = summary.right,
        wrong = summary.wrong,
        passes = summary.passes,
        "session finished"
    );
    println!("{summary}");

    Ok(exit)
}
