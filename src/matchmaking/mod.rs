//! Matchmaking: the blocking two-party battle rendezvous.

pub mod queue;

pub use queue::{JoinOutcome, Matchmaker};
