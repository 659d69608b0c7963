//! Card system: cards and decks.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of one physical card
//! - `Card`: Name, damage, derived kind/element, original-owner stamp
//! - `Deck`: Ordered card collection with random-peek draws

pub mod card;
pub mod deck;

pub use card::{Card, CardId, CardKind, Element};
pub use deck::Deck;
