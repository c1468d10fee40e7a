//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the AI and the
//! rules engine.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{FixedSource, GameRng, RandomSource};
pub use config::{GameConfig, Pacing, BOARD_SIZE, CELL_COUNT, MISS_STREAK_PENALTY, PAIR_COUNT};
pub use error::{GameError, MoveRejection};
