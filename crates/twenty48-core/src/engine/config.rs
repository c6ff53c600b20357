use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Rejected configuration or an unreadable config file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroGridSize,
    #[error("mutation probability {0} outside [0, 1]")]
    MutationProbability(f64),
    #[error("root tile value {0} below the minimum of 2")]
    RootTileValue(u64),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Game config options for a round of the tile game.
///
/// Deserialization is strict: every field must be present and unknown fields
/// are rejected, so a snapshot or config file either matches this schema or
/// fails loudly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Side length of the square board.
    pub grid_size: usize,
    /// Tiles spawned after each slide.
    pub spawn_tile_count: usize,
    /// Tiles spawned when the game is created.
    pub starting_tile_count: usize,
    /// Informational win threshold; see [`Game::reached_win_tile`].
    ///
    /// [`Game::reached_win_tile`]: crate::engine::Game::reached_win_tile
    pub win_tile_value: u64,
    /// Probability that a spawned tile carries the mutated (squared) value.
    pub mutation_probability: f64,
    /// Whether the mutation chance applies to the initial spawn.
    pub mutation_at_start: bool,
    /// Whether a spawn shortfall ends the game instead of being reported.
    pub spawn_kill: bool,
    /// Base tile value; merges multiply by this value.
    pub root_tile_value: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            spawn_tile_count: 2,
            starting_tile_count: 2,
            win_tile_value: 2048,
            mutation_probability: 0.1,
            mutation_at_start: true,
            spawn_kill: false,
            root_tile_value: 2,
        }
    }
}

impl GameConfig {
    /// Check the field ranges, failing fast on a config no game can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if !self.mutation_probability.is_finite()
            || !(0.0..=1.0).contains(&self.mutation_probability)
        {
            return Err(ConfigError::MutationProbability(self.mutation_probability));
        }
        // 0 collides with the empty sentinel, 1 makes merges value-preserving
        if self.root_tile_value < 2 {
            return Err(ConfigError::RootTileValue(self.root_tile_value));
        }
        Ok(())
    }

    /// The mutated spawn value: the square of the root tile value.
    #[inline]
    pub fn mutated_tile_value(&self) -> u64 {
        self.root_tile_value * self.root_tile_value
    }

    /// Load and validate a config from a TOML file.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = std::fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let cfg: Self = toml::from_str(&contents)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
