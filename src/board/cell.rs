//! A single board position.

use serde::{Deserialize, Serialize};

use super::Symbol;
use crate::core::PlayerId;

/// One cell: its face plus visibility and claim flags.
///
/// `owner` is set only while `matched` is true.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub symbol: Symbol,
    /// Face up for the current turn only.
    pub visible: bool,
    /// Part of a claimed pair.
    pub matched: bool,
    pub owner: Option<PlayerId>,
}

impl Cell {
    /// A face-down, unclaimed cell.
    #[must_use]
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            visible: false,
            matched: false,
            owner: None,
        }
    }

    /// Whether a renderer should show the face. Matched cells always do.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.visible || self.matched
    }

    /// Claim the cell for `player`.
    pub fn claim(&mut self, player: PlayerId) {
        self.matched = true;
        self.owner = Some(player);
    }

    /// Return a claimed cell to play.
    pub fn release(&mut self) {
        self.matched = false;
        self.owner = None;
    }
}
