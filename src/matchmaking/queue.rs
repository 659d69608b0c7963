//! First-come-first-served matchmaking.
//!
//! The first caller registers a pending battle and blocks; the second
//! caller claims it, resolves the battle on its own thread, and hands
//! the report back over a one-shot channel. Pop-or-register happens
//! under a single lock acquisition, so two concurrent callers can never
//! both enqueue without seeing each other, and battles themselves run
//! outside the lock - independent pairs resolve in parallel.
//!
//! The matchmaker owns a master RNG and forks it once per pending
//! battle, so a seeded matchmaker replays every battle it produces.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::battle::{Battle, BattleReport};
use crate::core::{ArenaConfig, BattleRng, Player};
use crate::error::{MatchError, MatchResult};

/// A registered battle waiting for an opponent.
struct PendingBattle {
    ticket: u64,
    challenger: Player,
    rng: BattleRng,
    report_tx: Sender<Arc<BattleReport>>,
}

/// Queue state behind the matchmaker lock.
struct Queue {
    pending: VecDeque<PendingBattle>,
    rng: BattleRng,
    next_ticket: u64,
}

/// What a caller got out of entering the queue.
enum Entered {
    /// Claimed a pending battle: resolve it now, outside the lock.
    Opponent(PendingBattle, Player),
    /// Registered a pending battle: wait for the report.
    Challenger(u64, Receiver<Arc<BattleReport>>),
}

/// Result of a bounded wait for an opponent.
#[derive(Clone, Debug)]
pub enum JoinOutcome {
    /// A battle was fought; here is the shared report.
    Matched(Arc<BattleReport>),
    /// No opponent arrived in time. Nothing was fought or mutated.
    Expired,
}

impl JoinOutcome {
    /// Whether the wait expired unmatched.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, JoinOutcome::Expired)
    }

    /// The report, if a battle was fought.
    #[must_use]
    pub fn into_report(self) -> Option<Arc<BattleReport>> {
        match self {
            JoinOutcome::Matched(report) => Some(report),
            JoinOutcome::Expired => None,
        }
    }
}

/// Blocking two-party battle rendezvous.
///
/// Shared across session threads behind an `Arc`; every method takes
/// `&self`.
///
/// ## Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::thread;
/// use tcg_arena::matchmaking::Matchmaker;
/// use tcg_arena::core::{Player, PlayerId};
///
/// let matchmaker = Arc::new(Matchmaker::new());
///
/// let waiter = {
///     let matchmaker = Arc::clone(&matchmaker);
///     thread::spawn(move || matchmaker.join(Player::new(PlayerId::new(1), "kienboec")))
/// };
///
/// let report = matchmaker.join(Player::new(PlayerId::new(2), "altenhof")).unwrap();
/// let same = waiter.join().unwrap().unwrap();
/// assert_eq!(report.outcome, same.outcome);
/// ```
pub struct Matchmaker {
    config: ArenaConfig,
    queue: Mutex<Queue>,
}

impl Matchmaker {
    /// Create a matchmaker with an entropy-seeded master RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(BattleRng::from_entropy().seed())
    }

    /// Create a matchmaker whose battles replay deterministically from
    /// the given master seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            config: ArenaConfig::default(),
            queue: Mutex::new(Queue {
                pending: VecDeque::new(),
                rng: BattleRng::new(seed),
                next_ticket: 0,
            }),
        }
    }

    /// Set the battle configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: ArenaConfig) -> Self {
        self.config = config;
        self
    }

    /// Enter the queue and block until a battle report is available.
    ///
    /// The first of a pair blocks here while the second resolves the
    /// battle; both return the same shared report.
    pub fn join(&self, player: Player) -> MatchResult<Arc<BattleReport>> {
        match self.enter(player)? {
            Entered::Opponent(pending, opponent) => Ok(self.run_battle(pending, opponent)),
            Entered::Challenger(_, report_rx) => {
                report_rx.recv().map_err(|_| MatchError::Unavailable)
            }
        }
    }

    /// Enter the queue, but give up after `timeout` if no opponent
    /// arrives.
    ///
    /// Expiry removes the pending battle, so an expired challenger is
    /// not matched later. If an opponent claims the battle in the same
    /// instant the timeout fires, the claim wins and this call blocks
    /// for the report it is now guaranteed.
    pub fn join_with_timeout(
        &self,
        player: Player,
        timeout: Duration,
    ) -> MatchResult<JoinOutcome> {
        match self.enter(player)? {
            Entered::Opponent(pending, opponent) => {
                Ok(JoinOutcome::Matched(self.run_battle(pending, opponent)))
            }
            Entered::Challenger(ticket, report_rx) => match report_rx.recv_timeout(timeout) {
                Ok(report) => Ok(JoinOutcome::Matched(report)),
                Err(RecvTimeoutError::Timeout) => {
                    if self.withdraw(ticket)? {
                        debug!("Pending battle {} expired unmatched", ticket);
                        Ok(JoinOutcome::Expired)
                    } else {
                        report_rx
                            .recv()
                            .map(JoinOutcome::Matched)
                            .map_err(|_| MatchError::Unavailable)
                    }
                }
                Err(RecvTimeoutError::Disconnected) => Err(MatchError::Unavailable),
            },
        }
    }

    /// Number of challengers currently waiting for an opponent.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.lock().map(|queue| queue.pending.len()).unwrap_or(0)
    }

    /// Pop a pending battle or register a new one. Single lock
    /// acquisition: concurrent callers serialize here and never miss
    /// each other.
    fn enter(&self, player: Player) -> MatchResult<Entered> {
        let mut queue = self.lock()?;

        if let Some(pending) = queue.pending.pop_front() {
            debug!("{} claims the battle of {}", player.name, pending.challenger.name);
            return Ok(Entered::Opponent(pending, player));
        }

        let ticket = queue.next_ticket;
        queue.next_ticket += 1;
        let rng = queue.rng.fork();
        let (report_tx, report_rx) = mpsc::channel();

        debug!("{} waits for an opponent", player.name);
        queue.pending.push_back(PendingBattle {
            ticket,
            challenger: player,
            rng,
            report_tx,
        });

        Ok(Entered::Challenger(ticket, report_rx))
    }

    /// Resolve a claimed battle and deliver the report to the waiting
    /// challenger. Runs outside the queue lock.
    fn run_battle(&self, pending: PendingBattle, opponent: Player) -> Arc<BattleReport> {
        info!("Executing battle: {} vs {}", pending.challenger.name, opponent.name);

        let report = Arc::new(Battle::play_with_config(
            pending.challenger,
            opponent,
            pending.rng,
            self.config.clone(),
        ));

        if pending.report_tx.send(Arc::clone(&report)).is_err() {
            warn!("Challenger gone before report delivery");
        }

        report
    }

    /// Remove an expired pending battle. Returns `false` if an opponent
    /// already claimed it.
    fn withdraw(&self, ticket: u64) -> MatchResult<bool> {
        let mut queue = self.lock()?;
        let before = queue.pending.len();
        queue.pending.retain(|pending| pending.ticket != ticket);
        Ok(queue.pending.len() != before)
    }

    fn lock(&self) -> MatchResult<MutexGuard<'_, Queue>> {
        self.queue.lock().map_err(|_| MatchError::Unavailable)
    }
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Deck};
    use crate::core::PlayerId;
    use std::thread;

    fn player(id: u64, name: &str, cards: &[(u64, &str, f64)]) -> Player {
        let pid = PlayerId::new(id);
        let deck: Deck = cards
            .iter()
            .map(|&(card_id, card_name, damage)| {
                Card::new(CardId::new(card_id), card_name, damage, pid)
            })
            .collect();
        Player::new(pid, name).with_deck(deck)
    }

    #[test]
    fn test_lone_challenger_expires() {
        let matchmaker = Matchmaker::seeded(42);

        let outcome = matchmaker
            .join_with_timeout(player(1, "a", &[(1, "knight", 20.0)]), Duration::from_millis(20))
            .unwrap();

        assert!(outcome.is_expired());
        assert_eq!(matchmaker.pending(), 0);
    }

    #[test]
    fn test_expired_challenger_is_not_matched_later() {
        let matchmaker = Arc::new(Matchmaker::seeded(42));

        let outcome = matchmaker
            .join_with_timeout(player(1, "a", &[(1, "knight", 20.0)]), Duration::from_millis(10))
            .unwrap();
        assert!(outcome.is_expired());

        // A later pair matches with each other, not with the expired entry.
        let waiter = {
            let matchmaker = Arc::clone(&matchmaker);
            thread::spawn(move || matchmaker.join(player(2, "b", &[(2, "ork", 10.0)])).unwrap())
        };
        while matchmaker.pending() == 0 {
            thread::yield_now();
        }
        let report = matchmaker.join(player(3, "c", &[(3, "dragon", 50.0)])).unwrap();

        let other = waiter.join().unwrap();
        assert_eq!(report.challenger.name, "b");
        assert_eq!(other.challenger.name, "b");
        assert_eq!(report.opponent.name, "c");
    }

    #[test]
    fn test_rendezvous_shares_one_report() {
        let matchmaker = Arc::new(Matchmaker::seeded(7));

        let waiter = {
            let matchmaker = Arc::clone(&matchmaker);
            thread::spawn(move || {
                matchmaker.join(player(1, "kienboec", &[(1, "knight", 30.0)])).unwrap()
            })
        };

        // Give the waiter time to register before claiming.
        while matchmaker.pending() == 0 {
            thread::yield_now();
        }

        let report = matchmaker.join(player(2, "altenhof", &[(2, "ork", 10.0)])).unwrap();
        let same = waiter.join().unwrap();

        assert!(Arc::ptr_eq(&report, &same));
        assert_eq!(report.challenger.name, "kienboec");
        assert_eq!(report.opponent.name, "altenhof");
        assert!(report.is_winner(PlayerId::new(1)));
        assert_eq!(matchmaker.pending(), 0);
    }

    #[test]
    fn test_timeout_join_can_also_fight() {
        let matchmaker = Arc::new(Matchmaker::seeded(7));

        let waiter = {
            let matchmaker = Arc::clone(&matchmaker);
            thread::spawn(move || {
                matchmaker.join(player(1, "a", &[(1, "knight", 30.0)])).unwrap()
            })
        };

        while matchmaker.pending() == 0 {
            thread::yield_now();
        }

        // The second caller never waits, so its timeout is irrelevant.
        let outcome = matchmaker
            .join_with_timeout(player(2, "b", &[(2, "ork", 10.0)]), Duration::ZERO)
            .unwrap();
        let report = outcome.into_report().unwrap();
        let same = waiter.join().unwrap();

        assert!(Arc::ptr_eq(&report, &same));
    }

    #[test]
    fn test_pending_counts_waiters() {
        let matchmaker = Arc::new(Matchmaker::seeded(1));
        assert_eq!(matchmaker.pending(), 0);

        let waiter = {
            let matchmaker = Arc::clone(&matchmaker);
            thread::spawn(move || {
                matchmaker
                    .join_with_timeout(player(1, "a", &[]), Duration::from_secs(5))
                    .unwrap()
            })
        };

        while matchmaker.pending() == 0 {
            thread::yield_now();
        }
        assert_eq!(matchmaker.pending(), 1);

        let _ = matchmaker.join(player(2, "b", &[(1, "goblin", 10.0)])).unwrap();
        assert_eq!(matchmaker.pending(), 0);
        assert!(!waiter.join().unwrap().is_expired());
    }
}
