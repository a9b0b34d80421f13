//! Core types for the flashcard trainer.

use serde::{Deserialize, Serialize};

/// A front/back text pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Ordered cards in file order.
///
/// Indices stay valid for as long as the deck is loaded; a reload produces a
/// new `Deck` rather than mutating this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.cards.capacity()
    }

    /// Render the deck back into the line-pair file format.
    pub fn to_text(&self) -> String {
        let size = self
            .cards
            .iter()
            .map(|card| card.front.len() + card.back.len() + 2)
            .sum();
        let mut text = String::with_capacity(size);
        for card in &self.cards {
            text.push_str(&card.front);
            text.push('\n');
            text.push_str(&card.back);
            text.push('\n');
        }
        text
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// One flag per card; `true` means the card is still due this round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueSet {
    flags: Vec<bool>,
}

impl DueSet {
    /// Every card due.
    pub fn all_due(len: usize) -> Self {
        Self {
            flags: vec![true; len],
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_due(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn due_count(&self) -> usize {
        self.flags.iter().filter(|due| **due).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    /// First due index at or after `start`. Never wraps.
    pub fn next_due_from(&self, start: usize) -> Option<usize> {
        self.flags
            .iter()
            .enumerate()
            .skip(start)
            .find_map(|(index, due)| due.then_some(index))
    }

    pub(crate) fn set(&mut self, index: usize, due: bool) {
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = due;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.flags.iter_mut().for_each(|flag| *flag = true);
    }
}

/// The user's self-assessment of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Right,
    Wrong,
}

/// Right/wrong tallies for the whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewCounters {
    pub right: u64,
    pub wrong: u64,
}

impl ReviewCounters {
    pub fn total(&self) -> u64 {
        self.right + self.wrong
    }

    pub(crate) fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Right => self.right += 1,
            Verdict::Wrong => self.wrong += 1,
        }
    }
}
