//! Randomness as an injected capability.
//!
//! The engine never touches a global RNG. Everything random (the opening
//! shuffle, the penalty reshuffle, the AI's blind picks) goes through a
//! `RandomSource`, so tests can swap in a deterministic source.
//!
//! ## Sources
//!
//! - `GameRng`: seeded ChaCha8, same seed produces identical games
//! - `FixedSource`: never reorders anything and answers picks from a script
//!
//! ```
//! use purble_pairs::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut xs = [1, 2, 3, 4, 5, 6, 7, 8];
//! let mut ys = xs;
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shuffle and pick capability consumed by the engine.
pub trait RandomSource {
    /// Shuffle a slice in place.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Pick an index uniformly from `0..len`.
    ///
    /// `len` is always non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The seed stays readable through [`GameRng::seed`] so a game can be
    /// replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// A source that leaves every slice in its given order and answers picks
/// from a script.
///
/// Once the script runs dry every pick returns 0. Scripted values are
/// taken modulo `len`.
#[derive(Clone, Debug, Default)]
pub struct FixedSource {
    picks: VecDeque<usize>,
}

impl FixedSource {
    /// Create a source with an empty pick script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source that answers picks from `picks`, in order.
    #[must_use]
    pub fn with_picks(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl RandomSource for FixedSource {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}
