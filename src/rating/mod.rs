//! Player rating after decisive battles.

pub mod elo;

pub use elo::update_ratings;
