//! Full-state snapshots of a game.
//!
//! A [`SaveState`] captures everything a [`Game`] owns except its generator:
//! config, grid values, score, the last movement matrix, and the spawn
//! bookkeeping. Serialization is JSON with a fixed field order, so
//! save -> load -> save reproduces the original bytes. Loading validates the
//! snapshot against its own config and never silently coerces a malformed
//! one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tile_grid::Grid;

use crate::engine::{ConfigError, Game, GameConfig, Tile};

/// Rejected or unreadable snapshot.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("grid dimension {found}, expected {expected}")]
    GridDimensions { expected: usize, found: usize },
    #[error("movement matrix dimension {found}, expected {expected}")]
    MovementDimensions { expected: usize, found: usize },
    #[error("movement offset {0} cannot occur on this grid")]
    MovementOffsetOutOfRange(i32),
    #[error("spawn location ({0}, {1}) outside the grid")]
    SpawnLocationOutOfRange(usize, usize),
}

/// The serialized form of a game.
///
/// `grid` and `movement_matrix` are row-major `grid_size x grid_size`
/// matrices; `latest_spawn_locations` holds `[column, row]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveState {
    pub config: GameConfig,
    pub grid: Vec<Vec<u64>>,
    pub score: u64,
    pub movement_matrix: Vec<Vec<i32>>,
    pub latest_spawn_result: Option<bool>,
    pub latest_spawn_locations: Vec<(usize, usize)>,
}

impl SaveState {
    /// Check the snapshot against its own config.
    pub fn validate(&self) -> Result<(), SaveError> {
        self.config.validate()?;
        let size = self.config.grid_size;

        check_matrix(&self.grid, size)
            .map_err(|found| SaveError::GridDimensions { expected: size, found })?;
        check_matrix(&self.movement_matrix, size)
            .map_err(|found| SaveError::MovementDimensions { expected: size, found })?;

        for offset in self.movement_matrix.iter().flatten() {
            if offset.unsigned_abs() as usize >= size {
                return Err(SaveError::MovementOffsetOutOfRange(*offset));
            }
        }
        for &(col, row) in &self.latest_spawn_locations {
            if col >= size || row >= size {
                return Err(SaveError::SpawnLocationOutOfRange(col, row));
            }
        }
        Ok(())
    }
}

fn check_matrix<T>(rows: &[Vec<T>], size: usize) -> Result<(), usize> {
    if rows.len() != size {
        return Err(rows.len());
    }
    for row in rows {
        if row.len() != size {
            return Err(row.len());
        }
    }
    Ok(())
}

impl<R: Rng> Game<R> {
    /// Snapshot the full game state.
    pub fn to_state(&self) -> SaveState {
        let size = self.config.grid_size;
        SaveState {
            config: self.config.clone(),
            grid: (0..size)
                .map(|r| self.grid.row(r).map(|tile| tile.value()).collect())
                .collect(),
            score: self.score,
            movement_matrix: self.movement_matrix.to_rows(),
            latest_spawn_result: self.latest_spawn_result,
            latest_spawn_locations: self.latest_spawn_locations.clone(),
        }
    }

    /// Serialize the full game state to JSON.
    pub fn save(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(&self.to_state())?)
    }

    /// Rebuild a game from a validated snapshot with the provided generator.
    ///
    /// The restored game is past init mode; no initial spawn runs.
    pub fn from_state(state: SaveState, rng: R) -> Result<Self, SaveError> {
        state.validate()?;
        let size = state.config.grid_size;

        let mut grid = Grid::new(size, Tile::EMPTY);
        for (row, row_values) in state.grid.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                grid.set(col, row, Tile::new(value));
            }
        }
        let mut movement_matrix = Grid::new(size, 0i32);
        for (row, row_offsets) in state.movement_matrix.iter().enumerate() {
            for (col, &offset) in row_offsets.iter().enumerate() {
                movement_matrix.set(col, row, offset);
            }
        }

        Ok(Game {
            config: state.config,
            grid,
            score: state.score,
            init_mode: false,
            movement_matrix,
            latest_spawn_result: state.latest_spawn_result,
            latest_spawn_locations: state.latest_spawn_locations,
            rng,
        })
    }

    /// Deserialize a game from JSON with the provided generator.
    pub fn load_with_rng(json: &str, rng: R) -> Result<Self, SaveError> {
        let state: SaveState = serde_json::from_str(json)?;
        Self::from_state(state, rng)
    }
}

impl Game<StdRng> {
    /// Deserialize a game from JSON with an entropy-seeded generator.
    pub fn load(json: &str) -> Result<Self, SaveError> {
        Self::load_with_rng(json, StdRng::from_entropy())
    }
}
