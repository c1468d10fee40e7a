//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The two seats at the table: the human and the AI opponent.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a game.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier.
///
/// Seat indices are 0-based: the human is index 0, the AI index 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    Human,
    Ai,
}

impl PlayerId {
    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Human => 0,
            PlayerId::Ai => 1,
        }
    }

    /// The other seat.
    ///
    /// ```
    /// use purble_pairs::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::Human.opponent(), PlayerId::Ai);
    /// assert_eq!(PlayerId::Ai.opponent(), PlayerId::Human);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::Human => PlayerId::Ai,
            PlayerId::Ai => PlayerId::Human,
        }
    }

    /// Iterate over both seats in index order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::Human, PlayerId::Ai].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Human => write!(f, "Player 1"),
            PlayerId::Ai => write!(f, "Player 2 (AI)"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use purble_pairs::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(0);
/// scores[PlayerId::Ai] += 1;
///
/// assert_eq!(scores[PlayerId::Human], 0);
/// assert_eq!(scores[PlayerId::Ai], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::Human), factory(PlayerId::Ai)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Overwrite every entry with the same value.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
