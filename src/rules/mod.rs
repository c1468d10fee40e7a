//! Game rules: the turn state machine and what it reports.
//!
//! `GameEngine` owns every piece of mutable game state. Controllers call
//! `reveal_cell`/`resolve_turn` (or `play_turn`) for both seats, and
//! `ai_turn` to ask the AI which cells it wants.

pub mod engine;
pub mod builder;
pub mod outcome;

pub use engine::GameEngine;
pub use builder::GameBuilder;
pub use outcome::{GameResult, MatchOutcome, ReshuffleOutcome, TurnRecord};
