//! Results reported by the engine: per turn, per penalty, per game.

use serde::{Deserialize, Serialize};

use crate::board::{Coord, Symbol};
use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// What a penalty reshuffle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReshuffleOutcome {
    /// The pair with this face went back into play and the board was
    /// reshuffled.
    Returned(Symbol),
    /// The penalised player owned no complete pair. Nothing changed.
    NoRemovablePair,
}

impl ReshuffleOutcome {
    #[must_use]
    pub fn reshuffled(&self) -> bool {
        matches!(self, ReshuffleOutcome::Returned(_))
    }
}

/// Result of resolving one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Both cells showed the same face and were claimed.
    pub matched: bool,
    /// A penalty reshuffle moved cells on the board.
    pub reshuffled: bool,
    /// Set whenever the miss streak hit the penalty, including the no-op case.
    pub penalty: Option<ReshuffleOutcome>,
}

impl MatchOutcome {
    pub(crate) fn matched() -> Self {
        Self {
            matched: true,
            reshuffled: false,
            penalty: None,
        }
    }

    pub(crate) fn missed(penalty: Option<ReshuffleOutcome>) -> Self {
        Self {
            matched: false,
            reshuffled: penalty.is_some_and(|p| p.reshuffled()),
            penalty,
        }
    }
}

/// One resolved turn, as kept in the engine's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn counter.
    pub turn: u32,
    pub player: PlayerId,
    pub cells: [(Coord, Symbol); 2],
    pub outcome: MatchOutcome,
}
