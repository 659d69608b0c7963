//! Round record.
//!
//! A round stores the scratch copies of the two cards as they ended the
//! round, so the recorded damage values are the effective ones after
//! elemental scaling and special matchups. Deck cards keep their
//! baseline damage; only these records carry the computed values.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One resolved round of a battle.
///
/// Either decisive (a winning and a losing card) or a draw (neither).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    number: u32,
    winner: Option<Card>,
    loser: Option<Card>,
}

impl Round {
    /// Record a decisive round.
    #[must_use]
    pub fn decisive(number: u32, winner: Card, loser: Card) -> Self {
        Self {
            number,
            winner: Some(winner),
            loser: Some(loser),
        }
    }

    /// Record a drawn round.
    #[must_use]
    pub fn draw(number: u32) -> Self {
        Self {
            number,
            winner: None,
            loser: None,
        }
    }

    /// 1-based round number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The winning card's scratch copy, `None` for a drawn round.
    #[must_use]
    pub fn winner(&self) -> Option<&Card> {
        self.winner.as_ref()
    }

    /// The losing card's scratch copy, `None` for a drawn round.
    #[must_use]
    pub fn loser(&self) -> Option<&Card> {
        self.loser.as_ref()
    }

    /// Whether the round ended without a winner.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.winner, &self.loser) {
            (Some(winner), Some(loser)) => {
                write!(f, "Round {}: {} beats {}", self.number, winner, loser)
            }
            _ => write!(f, "Round {}: draw", self.number),
        }
    }
}
