//! Game configuration types.
//!
//! The board shape is fixed; what varies between games is the seed and
//! the cosmetic pacing a controller applies between steps.
//!
//! - `Pacing`: delays around the AI's "thinking" and before hiding a miss
//! - `GameConfig`: seed plus pacing

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cells per side of the square board.
pub const BOARD_SIZE: usize = 4;

/// Total cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Distinct symbols, each placed twice.
pub const PAIR_COUNT: usize = CELL_COUNT / 2;

/// Consecutive misses that trigger a penalty reshuffle.
pub const MISS_STREAK_PENALTY: u32 = 3;

/// Cosmetic delays applied by a controller.
///
/// None of these affect game rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Pause before the AI announces its selection.
    pub think: Duration,

    /// Pause before a non-matching pair is turned back over.
    pub hide: Duration,
}

impl Pacing {
    /// No delays at all (tests, `--fast`).
    #[must_use]
    pub const fn none() -> Self {
        Self {
            think: Duration::ZERO,
            hide: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            think: Duration::from_secs(1),
            hide: Duration::from_secs(1),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed. `None` draws a fresh one.
    pub seed: Option<u64>,

    /// Controller pacing.
    pub pacing: Pacing,
}

impl GameConfig {
    /// Create a configuration with a random seed and default pacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the controller pacing.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }
}
