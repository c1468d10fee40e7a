//! Builder for seeded games.

use std::time::Duration;

use tracing::info;

use super::GameEngine;
use crate::core::{GameConfig, GameRng, Pacing};

/// Builder for creating a `GameEngine` backed by `GameRng`.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn think_delay(mut self, delay: Duration) -> Self {
        self.config.pacing.think = delay;
        self
    }

    pub fn hide_delay(mut self, delay: Duration) -> Self {
        self.config.pacing.hide = delay;
        self
    }

    /// Drop all pacing delays.
    pub fn fast(mut self) -> Self {
        self.config = self.config.with_pacing(Pacing::none());
        self
    }

    /// Deal the game.
    ///
    /// The returned config always carries the seed that was used, so the
    /// same game can be dealt again.
    pub fn build(self) -> (GameEngine<GameRng>, GameConfig) {
        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let config = self.config.with_seed(rng.seed());
        info!(seed = rng.seed(), "dealing new game");

        (GameEngine::new(rng), config)
    }
}
