//! Finished-battle report.
//!
//! Both participants receive the same report (behind an `Arc` when it
//! crosses the matchmaking channel): the final player records with their
//! mutated decks, the full round history, and the outcome.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::round::Round;
use crate::core::{Player, PlayerId};

/// Outcome of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Single winner.
    Winner(PlayerId),
    /// No winner.
    Draw,
}

impl BattleOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            BattleOutcome::Winner(p) => *p == player,
            BattleOutcome::Draw => false,
        }
    }

    /// Whether the battle ended without a winner.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, BattleOutcome::Draw)
    }
}

/// Immutable snapshot of a finished battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    /// The player who registered the battle and waited.
    pub challenger: Player,

    /// The player who attached and resolved the battle.
    pub opponent: Player,

    /// Every played round, in order.
    pub rounds: Vector<Round>,

    /// How the battle ended.
    pub outcome: BattleOutcome,
}

impl BattleReport {
    /// Number of rounds actually played.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    /// Check if a player won this battle.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.outcome.is_winner(player)
    }

    /// The winning player's record, `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            BattleOutcome::Winner(id) => self.participant(id),
            BattleOutcome::Draw => None,
        }
    }

    /// Look up a participant's final record by id.
    #[must_use]
    pub fn participant(&self, id: PlayerId) -> Option<&Player> {
        if self.challenger.id == id {
            Some(&self.challenger)
        } else if self.opponent.id == id {
            Some(&self.opponent)
        } else {
            None
        }
    }
}
