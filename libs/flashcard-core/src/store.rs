//! Deck store: the loaded deck and its due set, kept in step.

use crate::error::Result;
use crate::loader;
use crate::types::{Card, Deck, DueSet};
use std::path::Path;
use tracing::{info, warn};

/// Owns the current deck together with one due flag per card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckStore {
    contents: Contents,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Contents {
    deck: Deck,
    due: DueSet,
}

impl Contents {
    fn new(deck: Deck) -> Self {
        let due = DueSet::all_due(deck.len());
        Self { deck, due }
    }
}

impl Default for DeckStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_deck(Deck::default())
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self {
            contents: Contents::new(deck),
        }
    }

    pub fn current(&self) -> &Deck {
        &self.contents.deck
    }

    pub fn due(&self) -> &DueSet {
        &self.contents.due
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.contents.deck.get(index)
    }

    pub fn len(&self) -> usize {
        self.contents.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.deck.is_empty()
    }

    /// Swap in a new deck with every card due.
    ///
    /// Deck and due set are built first and assigned as one value.
    pub fn replace(&mut self, deck: Deck) {
        self.contents = Contents::new(deck);
    }

    /// Load `path` and replace the current deck on success.
    ///
    /// On failure the store is left exactly as it was.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match loader::load(path) {
            Ok(deck) => {
                info!(path = %path.display(), cards = deck.len(), "deck reloaded");
                self.replace(deck);
                Ok(())
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "deck reload failed, keeping current deck"
                );
                Err(e)
            }
        }
    }

    pub(crate) fn due_mut(&mut self) -> &mut DueSet {
        &mut self.contents.due
    }
}
