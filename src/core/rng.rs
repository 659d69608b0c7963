//! Deterministic random number generation with forking for battles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Each battle gets an independent branch from a master RNG
//!
//! ## Usage
//!
//! ```
//! use tcg_arena::core::BattleRng;
//!
//! let mut master = BattleRng::new(42);
//!
//! // Fork for a battle
//! let mut battle_rng = master.fork();
//!
//! // Forks are deterministic: rebuilding the master rebuilds the fork
//! let mut master2 = BattleRng::new(42);
//! let mut battle_rng2 = master2.fork();
//! assert_eq!(battle_rng.seed(), battle_rng2.seed());
//! assert_eq!(battle_rng.gen_range_usize(0..100), battle_rng2.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for battle card draws.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// A matchmaker holds one master instance and forks it per battle, so that
/// replaying a battle from its fork seed reproduces every draw.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create a new RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// Used to give every battle its own draw stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// The seed this instance was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
