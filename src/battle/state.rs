//! Battle lifecycle and the round loop.
//!
//! A battle is created by the first player (the challenger) and sits in
//! `AwaitingOpponent` until a second player attaches. Running it plays
//! rounds until one deck is empty or the round cap is reached:
//!
//! - Empty decks are only observed at the top of an iteration, when the
//!   draw comes back empty. A deck emptied by a transfer therefore ends
//!   the battle at the start of the next round, and that check does not
//!   count as a played round.
//! - If both decks are empty at the top of an iteration, the battle is
//!   an immediate draw.
//! - Reaching the round cap is a draw. The final round still resolves
//!   and transfers normally first.
//!
//! Draws never touch ratings or decks beyond the rounds already played.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::report::{BattleOutcome, BattleReport};
use super::round::Round;
use super::transfer::apply_transfer;
use crate::combat::resolve_round;
use crate::core::{ArenaConfig, BattleRng, Player, PlayerId};

/// Lifecycle state of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleState {
    /// Registered by the challenger; waiting for an opponent.
    AwaitingOpponent,
    /// Both players attached; rounds can be played.
    InProgress,
    /// Finished with a winner.
    Won(PlayerId),
    /// Finished without a winner.
    Drawn,
}

impl BattleState {
    /// Whether the battle has finished.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, BattleState::Won(_) | BattleState::Drawn)
    }
}

/// A two-player battle.
///
/// ## Example
///
/// ```
/// use tcg_arena::battle::Battle;
/// use tcg_arena::cards::{Card, CardId, Deck};
/// use tcg_arena::core::{BattleRng, Player, PlayerId};
///
/// let a = PlayerId::new(1);
/// let b = PlayerId::new(2);
/// let knight: Deck = [Card::new(CardId::new(1), "Knight", 30.0, a)].into_iter().collect();
/// let ork: Deck = [Card::new(CardId::new(2), "Ork", 10.0, b)].into_iter().collect();
///
/// let challenger = Player::new(a, "kienboec").with_deck(knight);
/// let opponent = Player::new(b, "altenhof").with_deck(ork);
///
/// let report = Battle::play(challenger, opponent, BattleRng::new(42));
/// assert!(report.is_winner(a));
/// ```
#[derive(Debug)]
pub struct Battle {
    config: ArenaConfig,
    rng: BattleRng,
    challenger: Player,
    opponent: Option<Player>,
    state: BattleState,
    rounds: Vector<Round>,
}

impl Battle {
    /// Register a battle for a challenger, awaiting an opponent.
    #[must_use]
    pub fn new(challenger: Player, rng: BattleRng) -> Self {
        Self::with_config(challenger, rng, ArenaConfig::default())
    }

    /// Register a battle with a custom configuration.
    #[must_use]
    pub fn with_config(challenger: Player, rng: BattleRng, config: ArenaConfig) -> Self {
        Self {
            config,
            rng,
            challenger,
            opponent: None,
            state: BattleState::AwaitingOpponent,
            rounds: Vector::new(),
        }
    }

    /// Attach the second player.
    ///
    /// Panics if an opponent is already attached.
    pub fn attach_opponent(&mut self, opponent: Player) {
        assert!(
            matches!(self.state, BattleState::AwaitingOpponent),
            "Opponent can only be attached once"
        );
        debug!("{} joins battle against {}", opponent.name, self.challenger.name);
        self.opponent = Some(opponent);
        self.state = BattleState::InProgress;
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Rounds played so far, in order.
    #[must_use]
    pub fn rounds(&self) -> &Vector<Round> {
        &self.rounds
    }

    /// Play rounds until the battle finishes.
    ///
    /// Panics if called before an opponent is attached or after the
    /// battle has finished.
    pub fn run(&mut self) {
        assert!(
            matches!(self.state, BattleState::InProgress),
            "Battle must be in progress to run"
        );
        let opponent = self
            .opponent
            .as_mut()
            .expect("in-progress battle has an opponent");

        for number in 1..=self.config.max_rounds {
            let drawn_a = self.challenger.deck.draw(&mut self.rng).cloned();
            let drawn_b = opponent.deck.draw(&mut self.rng).cloned();

            let (card_a, card_b) = match (drawn_a, drawn_b) {
                (Some(a), Some(b)) => (a, b),
                (Some(_), None) => {
                    debug!("{} is out of cards", opponent.name);
                    self.state = BattleState::Won(self.challenger.id);
                    break;
                }
                (None, Some(_)) => {
                    debug!("{} is out of cards", self.challenger.name);
                    self.state = BattleState::Won(opponent.id);
                    break;
                }
                (None, None) => {
                    debug!("Both decks are empty");
                    self.state = BattleState::Drawn;
                    break;
                }
            };

            debug!("Round {}: {} drew {}", number, self.challenger.name, card_a);
            debug!("Round {}: {} drew {}", number, opponent.name, card_b);

            let round = resolve_round(number, &card_a, &card_b);
            debug!("{}", round);

            apply_transfer(&round, &mut self.challenger, opponent);
            self.rounds.push_back(round);
        }

        // Round cap reached without an empty deck
        if !self.state.is_terminal() {
            self.state = BattleState::Drawn;
        }

        match self.state {
            BattleState::Won(winner) => {
                info!("Battle over after {} rounds: {} wins", self.rounds.len(), winner);
            }
            _ => info!("Battle over after {} rounds: draw", self.rounds.len()),
        }
    }

    /// Consume the finished battle into its report.
    ///
    /// Panics if the battle has not finished.
    #[must_use]
    pub fn into_report(self) -> BattleReport {
        let outcome = match self.state {
            BattleState::Won(winner) => BattleOutcome::Winner(winner),
            BattleState::Drawn => BattleOutcome::Draw,
            BattleState::AwaitingOpponent | BattleState::InProgress => {
                panic!("Battle has not finished")
            }
        };
        let opponent = self
            .opponent
            .expect("finished battle always has an opponent");

        BattleReport {
            challenger: self.challenger,
            opponent,
            rounds: self.rounds,
            outcome,
        }
    }

    /// Register, attach, run, and report in one call.
    #[must_use]
    pub fn play(challenger: Player, opponent: Player, rng: BattleRng) -> BattleReport {
        Self::play_with_config(challenger, opponent, rng, ArenaConfig::default())
    }

    /// [`Battle::play`] with a custom configuration.
    #[must_use]
    pub fn play_with_config(
        challenger: Player,
        opponent: Player,
        rng: BattleRng,
        config: ArenaConfig,
    ) -> BattleReport {
        let mut battle = Battle::with_config(challenger, rng, config);
        battle.attach_opponent(opponent);
        battle.run();
        battle.into_report()
    }
}
