//! Summaries printed once the terminal is back to normal.

use chrono::{DateTime, Utc};
use flashcard_core::{Deck, ReviewCounters};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Result of `--check`.
#[derive(Debug, Clone, Serialize)]
pub struct DeckSummary {
    pub path: String,
    pub cards: usize,
    pub blank_fronts: usize,
    pub blank_backs: usize,
}

impl DeckSummary {
    pub fn new(path: &Path, deck: &Deck) -> Self {
        Self {
            path: path.display().to_string(),
            cards: deck.len(),
            blank_fronts: deck.iter().filter(|card| card.front.is_empty()).count(),
            blank_backs: deck.iter().filter(|card| card.back.is_empty()).count(),
        }
    }
}

/// What happened during one review session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub right: u64,
    pub wrong: u64,
    pub passes: u64,
}

impl SessionSummary {
    pub fn new(
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        counters: ReviewCounters,
        passes: u64,
    ) -> Self {
        Self {
            started_at,
            ended_at,
            right: counters.right,
            wrong: counters.wrong,
            passes,
        }
    }

    pub fn elapsed_secs(&self) -> i64 {
        (self.ended_at - self.started_at).num_seconds().max(0)
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reviewed {} cards ({} right, {} wrong) over {} completed passes in {}s",
            self.right + self.wrong,
            self.right,
            self.wrong,
            self.passes,
            self.elapsed_secs()
        )
    }
}
