//! Engine errors.
//!
//! The only recoverable failure is a rejected move. Controllers report it
//! and ask again; the engine state is untouched when one is returned.

use thiserror::Error;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    /// Row or column outside the board.
    OutOfBounds,
    /// The cell already belongs to a claimed pair.
    AlreadyMatched,
    /// The cell is already face up this turn.
    AlreadyVisible,
    /// Two cells are already revealed and waiting to be resolved.
    TurnFull,
    /// Resolve was asked for cells that are not this turn's reveals.
    NotRevealed,
    /// Every pair has been claimed.
    GameOver,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MoveRejection::OutOfBounds => "cell is off the board",
            MoveRejection::AlreadyMatched => "cell is already matched",
            MoveRejection::AlreadyVisible => "cell is already revealed",
            MoveRejection::TurnFull => "two cells are already revealed this turn",
            MoveRejection::NotRevealed => "cells were not revealed this turn",
            MoveRejection::GameOver => "game is over",
        };
        f.write_str(text)
    }
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: MoveRejection,
    },
}

impl GameError {
    /// Build an `InvalidMove` for the given position.
    #[must_use]
    pub fn invalid_move(row: usize, col: usize, reason: MoveRejection) -> Self {
        GameError::InvalidMove { row, col, reason }
    }

    /// The rejection reason.
    #[must_use]
    pub fn reason(&self) -> MoveRejection {
        match self {
            GameError::InvalidMove { reason, .. } => *reason,
        }
    }
}
