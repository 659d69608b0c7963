//! Arena configuration.
//!
//! The engine reads limits from [`ArenaConfig`] rather than hardcoding
//! them; the defaults match the classic ruleset.

use serde::{Deserialize, Serialize};

/// Configuration for battle resolution.
///
/// ## Example
///
/// ```
/// use tcg_arena::core::ArenaConfig;
///
/// let config = ArenaConfig::default();
/// assert_eq!(config.max_rounds, 100);
///
/// let short = ArenaConfig::default().with_max_rounds(10);
/// assert_eq!(short.max_rounds, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Maximum rounds per battle before it is declared a draw.
    pub max_rounds: u32,
}

impl ArenaConfig {
    /// Set the round cap (builder pattern).
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        assert!(max_rounds > 0, "Round cap must be at least 1");
        self.max_rounds = max_rounds;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { max_rounds: 100 }
    }
}
