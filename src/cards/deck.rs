//! Deck: an ordered, mutable collection of cards.
//!
//! Battles draw from decks without removing (a draw is a random peek);
//! cards only leave a deck through transfer after a decisive round.
//! Decks are small - the configured battle deck is [`Deck::STANDARD_SIZE`]
//! cards - so membership operations are linear scans over inline storage.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId};
use crate::core::BattleRng;

const STANDARD_SIZE: usize = 4;

/// An ordered collection of cards.
///
/// Backed by a `SmallVec` sized for the standard battle deck, so decks
/// that never grow past four cards never touch the heap.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: SmallVec<[Card; STANDARD_SIZE]>,
}

impl Deck {
    /// Cards in a standard configured battle deck.
    pub const STANDARD_SIZE: usize = STANDARD_SIZE;

    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card to the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Draw a random card. This is a peek: the card stays in the deck.
    ///
    /// Returns `None` if the deck is empty.
    #[must_use]
    pub fn draw(&self, rng: &mut BattleRng) -> Option<&Card> {
        rng.choose(&self.cards)
    }

    /// Whether a card with the given identity is in the deck.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id == id)
    }

    /// Remove the card with the given identity, preserving the order of
    /// the rest. Returns `None` if no card matches.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Iterate over the cards in deck order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// The cards as a slice.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: SmallVec::from_vec(cards),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
