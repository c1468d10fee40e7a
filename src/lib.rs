//! # purble-pairs
//!
//! A two-seat memory-matching game: a human and an AI take turns flipping
//! two cells of a 4×4 board, trying to find the eight pairs.
//!
//! ## Rules
//!
//! 1. **Match**: both cells are claimed by the player, who goes again.
//!
//! 2. **Miss**: the cells turn face down and the turn passes.
//!
//! 3. **Penalty**: a third miss in a row returns one of that player's
//!    claimed pairs to the board, reshuffles every unclaimed cell and wipes
//!    the AI's memory. Both miss streaks restart.
//!
//! ## Architecture
//!
//! - **Injected randomness**: the engine is generic over `RandomSource`.
//!   `GameRng` (ChaCha8) is seeded and replayable, `FixedSource` never
//!   shuffles for scripted tests.
//!
//! - **Greedy AI**: remembers every face it has seen and takes a known pair
//!   when it has one, otherwise guesses.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `board`: coordinates, faces, cells, the grid
//! - `ai`: memory and move selection
//! - `rules`: the game engine and its outcomes
//! - `shell`: text renderer, input parser and game loop

pub mod core;
pub mod board;
pub mod ai;
pub mod rules;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    RandomSource, GameRng, FixedSource,
    GameConfig, Pacing,
    GameError, MoveRejection,
    BOARD_SIZE, CELL_COUNT, PAIR_COUNT, MISS_STREAK_PENALTY,
};

pub use crate::board::{Board, Cell, Coord, Symbol};

pub use crate::ai::{AiMemory, select_pair};

pub use crate::rules::{
    GameEngine, GameBuilder,
    GameResult, MatchOutcome, ReshuffleOutcome, TurnRecord,
};

pub use crate::shell::{Controller, InputError, ShellError, parse_coord};
