//! Player identity and per-player battle record.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. The arena never interprets the value -
//! the session layer assigns them.
//!
//! ## Player
//!
//! The mutable record a player carries into a battle: deck, currency
//! balance, rating, and win/loss counters. Battles mutate the deck
//! (card transfers); rating updates are applied afterwards by
//! [`crate::rating::update_ratings`].

use serde::{Deserialize, Serialize};

use crate::cards::Deck;

/// Starting balance for a newly registered player.
pub const STARTING_BALANCE: u32 = 20;

/// Starting rating for a newly registered player.
pub const STARTING_RATING: i32 = 100;

/// Player identifier.
///
/// Identifies a registered player across battles. Cards are stamped with
/// the id of their original owner, which card transfers never rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's battle-facing record.
///
/// ## Example
///
/// ```
/// use tcg_arena::core::{Player, PlayerId};
///
/// let player = Player::new(PlayerId::new(1), "gandalf");
/// assert_eq!(player.balance, 20);
/// assert_eq!(player.rating, 100);
/// assert!(player.deck.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier for this player.
    pub id: PlayerId,

    /// Login name (for display/logging).
    pub name: String,

    /// Currency balance. Not touched by battles.
    pub balance: u32,

    /// Elo rating. Updated after decisive battles.
    pub rating: i32,

    /// Number of decisive battles won.
    pub wins: u32,

    /// Number of decisive battles lost.
    pub losses: u32,

    /// The cards this player brings into battle.
    pub deck: Deck,
}

impl Player {
    /// Create a new player with starting balance and rating and an empty deck.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            balance: STARTING_BALANCE,
            rating: STARTING_RATING,
            wins: 0,
            losses: 0,
            deck: Deck::new(),
        }
    }

    /// Set the deck (builder pattern).
    #[must_use]
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    /// Set the rating (builder pattern).
    #[must_use]
    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
