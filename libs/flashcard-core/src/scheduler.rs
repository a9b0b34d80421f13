//! Review scheduler.
//!
//! A one-box Leitner loop: each pass walks the due cards in index order.
//! A wrong card stays due, a right card leaves the rotation. When a pass
//! finishes without a single wrong verdict, every card becomes due again.

use crate::error::{Result, ReviewError};
use crate::store::DeckStore;
use crate::types::{Card, Deck, DueSet, ReviewCounters, Verdict};
use std::path::Path;
use tracing::debug;

/// Where the scheduler is within a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    Idle,
    AwaitingVerdict(usize),
    RoundComplete,
}

/// Outcome of [`Scheduler::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// This card index is now presented with its back hidden.
    Card(usize),
    /// No due card is left in the pass. `requeued` is true when the pass
    /// had no wrong verdicts and every card was made due again.
    RoundComplete { requeued: bool },
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    store: DeckStore,
    state: ReviewState,
    cursor: usize,
    back_visible: bool,
    pass_clean: bool,
    passes: u64,
    counters: ReviewCounters,
}

impl Scheduler {
    pub fn new(store: DeckStore) -> Self {
        Self {
            store,
            state: ReviewState::Idle,
            cursor: 0,
            back_visible: false,
            pass_clean: true,
            passes: 0,
            counters: ReviewCounters::default(),
        }
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn counters(&self) -> ReviewCounters {
        self.counters
    }

    pub fn back_visible(&self) -> bool {
        self.back_visible
    }

    /// Number of passes completed this session.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn store(&self) -> &DeckStore {
        &self.store
    }

    pub fn deck(&self) -> &Deck {
        self.store.current()
    }

    pub fn due(&self) -> &DueSet {
        self.store.due()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The card awaiting a verdict, if any.
    pub fn current(&self) -> Option<(usize, &Card)> {
        match self.state {
            ReviewState::AwaitingVerdict(index) => {
                self.store.card(index).map(|card| (index, card))
            }
            _ => None,
        }
    }

    /// Move to the next due card, or finish the pass.
    ///
    /// Calling this after `RoundComplete` starts a new pass from index 0.
    pub fn advance(&mut self) -> Result<Step, ReviewError> {
        match self.state {
            ReviewState::AwaitingVerdict(index) => {
                return Err(ReviewError::VerdictPending(index));
            }
            ReviewState::RoundComplete => {
                self.state = ReviewState::Idle;
                self.cursor = 0;
            }
            ReviewState::Idle => {}
        }

        match self.store.due().next_due_from(self.cursor) {
            Some(index) => {
                self.cursor = index;
                self.back_visible = false;
                self.state = ReviewState::AwaitingVerdict(index);
                Ok(Step::Card(index))
            }
            None => Ok(self.finish_round()),
        }
    }

    fn finish_round(&mut self) -> Step {
        let requeued = self.pass_clean;
        if requeued {
            self.store.due_mut().reset();
        }
        self.passes += 1;
        debug!(
            pass = self.passes,
            requeued,
            still_due = self.store.due().due_count(),
            "review pass complete"
        );

        self.pass_clean = true;
        self.cursor = 0;
        self.state = ReviewState::RoundComplete;
        Step::RoundComplete { requeued }
    }

    pub fn reveal(&mut self) -> Result<(), ReviewError> {
        self.require_card()?;
        self.back_visible = true;
        Ok(())
    }

    pub fn conceal(&mut self) -> Result<(), ReviewError> {
        self.require_card()?;
        self.back_visible = false;
        Ok(())
    }

    /// Flip back visibility and return the new value.
    pub fn toggle_back(&mut self) -> Result<bool, ReviewError> {
        self.require_card()?;
        self.back_visible = !self.back_visible;
        Ok(self.back_visible)
    }

    /// Record a verdict for the presented card.
    pub fn mark(&mut self, verdict: Verdict) -> Result<(), ReviewError> {
        let index = self.require_card()?;

        self.store.due_mut().set(index, verdict == Verdict::Wrong);
        self.counters.record(verdict);
        if verdict == Verdict::Wrong {
            self.pass_clean = false;
        }

        self.state = ReviewState::Idle;
        self.cursor = index + 1;
        self.back_visible = false;
        Ok(())
    }

    /// Reload the deck and restart the pass over a fresh due set.
    ///
    /// Counters carry over. On failure nothing changes.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.store.reload(path)?;
        self.restart();
        Ok(())
    }

    /// Replace the deck and restart the pass.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.store.replace(deck);
        self.restart();
    }

    fn restart(&mut self) {
        self.state = ReviewState::Idle;
        self.cursor = 0;
        self.back_visible = false;
        self.pass_clean = true;
    }

    fn require_card(&self) -> Result<usize, ReviewError> {
        match self.state {
            ReviewState::AwaitingVerdict(index) => Ok(index),
            _ => Err(ReviewError::NoCardPresented),
        }
    }
}
