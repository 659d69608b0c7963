//! Core arena types: players, RNG, configuration.
//!
//! This module contains the building blocks shared by matchmaking and
//! battle resolution.

pub mod config;
pub mod player;
pub mod rng;

pub use config::ArenaConfig;
pub use player::{Player, PlayerId, STARTING_BALANCE, STARTING_RATING};
pub use rng::BattleRng;
