//! # tcg-arena
//!
//! Matchmaking and battle resolution for a two-player trading card game.
//!
//! ## Design Principles
//!
//! 1. **Blocking rendezvous**: Matchmaking pairs players first-come
//!    first-served. The first of a pair blocks until the second arrives
//!    and resolves the battle; both receive the same report.
//!
//! 2. **Layered combat rules**: A round classifies its pairing
//!    (monster/spell/mixed), applies elemental scaling where the pairing
//!    calls for it, then the special matchups. Matchup zeroes always
//!    override computed damage.
//!
//! 3. **Deterministic replay**: All randomness flows from a forkable
//!    ChaCha8 RNG. A seeded matchmaker reproduces every draw of every
//!    battle it creates.
//!
//! ## Architecture
//!
//! - Battles mutate decks (losing cards transfer to the winning card's
//!   original owner) but never ratings; rating updates are a separate
//!   step the session layer applies to decisive reports.
//!
//! - Round history is an `im::Vector` snapshot, so a report shares its
//!   rounds with the battle that produced them without copying.
//!
//! ## Modules
//!
//! - `core`: Player identity and records, RNG, configuration
//! - `cards`: Cards (name-derived kind/element) and decks
//! - `combat`: Elemental effectiveness, special matchups, round resolution
//! - `battle`: Battle lifecycle, round records, card transfer, reports
//! - `matchmaking`: The blocking two-party rendezvous
//! - `rating`: Elo updates for decisive battles

pub mod battle;
pub mod cards;
pub mod combat;
pub mod core;
pub mod error;
pub mod matchmaking;
pub mod rating;

// Re-export commonly used types
pub use crate::core::{ArenaConfig, BattleRng, Player, PlayerId};

pub use crate::cards::{Card, CardId, CardKind, Deck, Element};

pub use crate::combat::{resolve_round, Effectiveness, FightKind};

pub use crate::battle::{Battle, BattleOutcome, BattleReport, BattleState, Round};

pub use crate::matchmaking::{JoinOutcome, Matchmaker};

pub use crate::rating::update_ratings;

pub use crate::error::{MatchError, MatchResult};
