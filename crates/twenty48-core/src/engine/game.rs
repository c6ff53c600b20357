use std::fmt;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tile_grid::Grid;

use super::config::{ConfigError, GameConfig};
use super::slide::{slide_line, SlideDirection};
use super::spawn::{self, spawn_tiles};
use super::tile::Tile;

/// Classification of a played turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideResult {
    Normal,
    /// The board is full after the slide; no spawn was attempted.
    BoardFull,
    /// A spawned tile could not be placed and the config treats that as
    /// game-ending.
    SpawnKill,
    /// A spawned tile could not be placed; the game continues with the
    /// shortfall dropped.
    SpawnFill,
}

/// All the logic and state for one game.
///
/// The generator is owned by the game so every draw it makes is local to the
/// instance; seed it for reproducible runs.
pub struct Game<R: Rng = StdRng> {
    pub(crate) config: GameConfig,
    pub(crate) grid: Grid<Tile>,
    pub(crate) score: u64,
    /// True only until the initial spawn completes.
    pub(crate) init_mode: bool,
    pub(crate) movement_matrix: Grid<i32>,
    pub(crate) latest_spawn_result: Option<bool>,
    pub(crate) latest_spawn_locations: Vec<(usize, usize)>,
    pub(crate) rng: R,
}

impl Game<StdRng> {
    /// Create a game with an entropy-seeded generator and run the initial
    /// spawn.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game with the provided generator and run the initial spawn.
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use twenty48_core::engine::{Game, GameConfig};
    /// let rng = StdRng::seed_from_u64(123);
    /// let game = Game::with_rng(GameConfig::default(), rng).unwrap();
    /// assert_eq!(game.get_empty_tiles().len(), 14);
    /// ```
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = config.grid_size;
        let mut game = Game {
            grid: Grid::new(size, Tile::EMPTY),
            movement_matrix: Grid::new(size, 0),
            score: 0,
            init_mode: true,
            latest_spawn_result: None,
            latest_spawn_locations: Vec::new(),
            config,
            rng,
        };
        game.initial_spawn();
        Ok(game)
    }

    /// Spawn the starting tiles and leave init mode.
    fn initial_spawn(&mut self) {
        let count = self.config.starting_tile_count;
        let outcome = spawn_tiles(&mut self.grid, &mut self.rng, &self.config, true, count);
        self.init_mode = false;
        self.latest_spawn_locations = outcome.placed;
    }

    /// Play a turn: slide, then spawn, then classify the outcome.
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use twenty48_core::engine::{Game, GameConfig, SlideDirection, SlideResult};
    /// let rng = StdRng::seed_from_u64(7);
    /// let mut game = Game::with_rng(GameConfig::default(), rng).unwrap();
    /// assert_eq!(game.play_turn(SlideDirection::Left), SlideResult::Normal);
    /// ```
    pub fn play_turn(&mut self, direction: SlideDirection) -> SlideResult {
        if direction == SlideDirection::None {
            warn!("play_turn called without a direction; ignoring");
            return SlideResult::Normal;
        }
        self.slide_tiles(direction);

        if self.board_full() {
            return SlideResult::BoardFull;
        }

        let all_placed = self.spawn_new_tiles();
        self.latest_spawn_result = Some(all_placed);
        if !all_placed {
            if self.config.spawn_kill {
                return SlideResult::SpawnKill;
            }
            return SlideResult::SpawnFill;
        }
        SlideResult::Normal
    }

    /// Slide every line in `direction`, updating grid, score, and the
    /// movement matrix. `None` slides nothing.
    pub fn slide_tiles(&mut self, direction: SlideDirection) {
        if direction == SlideDirection::None {
            return;
        }
        let size = self.config.grid_size;
        let root = self.config.root_tile_value;
        if direction.is_vertical() {
            for col in 0..size {
                let line: Vec<u64> = self.grid.column(col).map(|t| t.value()).collect();
                let slid = slide_line(&line, direction, root);
                self.score += slid.score_delta;
                for row in 0..size {
                    self.grid.set(col, row, Tile::new(slid.cells[row]));
                    self.movement_matrix.set(col, row, slid.movement[row]);
                }
            }
        } else {
            for row in 0..size {
                let line: Vec<u64> = self.grid.row(row).map(|t| t.value()).collect();
                let slid = slide_line(&line, direction, root);
                self.score += slid.score_delta;
                for col in 0..size {
                    self.grid.set(col, row, Tile::new(slid.cells[col]));
                    self.movement_matrix.set(col, row, slid.movement[col]);
                }
            }
        }
        debug!("slid {:?}, score now {}", direction, self.score);
    }

    /// Spawn `spawn_tile_count` tiles, recording where they landed.
    /// Returns true when every requested tile was placed.
    pub fn spawn_new_tiles(&mut self) -> bool {
        let count = self.config.spawn_tile_count;
        let outcome = spawn_tiles(
            &mut self.grid,
            &mut self.rng,
            &self.config,
            self.init_mode,
            count,
        );
        self.latest_spawn_locations = outcome.placed;
        outcome.all_placed
    }

    /// True while a legal move remains: an empty cell, or two equal
    /// 4-adjacent tiles.
    pub fn can_play(&self) -> bool {
        self.grid.iter().any(|(col, row, tile)| {
            tile.is_empty()
                || self
                    .grid
                    .adjacent(col, row)
                    .iter()
                    .any(|neighbor| neighbor.value() == tile.value())
        })
    }

    /// True when no cell holds the empty value.
    pub fn board_full(&self) -> bool {
        !self.grid.iter().any(|(_, _, tile)| tile.is_empty())
    }

    /// Empty cells as `(column, row)` in row-major order.
    pub fn get_empty_tiles(&self) -> Vec<(usize, usize)> {
        spawn::empty_cells(&self.grid)
    }

    /// The highest tile value on the board.
    pub fn get_highest_tile(&self) -> u64 {
        self.grid
            .iter()
            .map(|(_, _, tile)| tile.value())
            .max()
            .unwrap_or(0)
    }

    /// Whether the board has reached the configured win threshold.
    pub fn reached_win_tile(&self) -> bool {
        self.get_highest_tile() >= self.config.win_tile_value
    }

    /// Replace the whole board. Test/debug access; rows are top to bottom.
    ///
    /// Panics unless `rows` is exactly `grid_size x grid_size`.
    pub fn set_tiles(&mut self, rows: &[Vec<Tile>]) {
        let size = self.config.grid_size;
        assert!(
            rows.len() == size && rows.iter().all(|row| row.len() == size),
            "expected a {0}x{0} tile matrix",
            size
        );
        for (row, tiles) in rows.iter().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                self.grid.set(col, row, tile);
            }
        }
    }

    /// The fixed configuration this game was created with.
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current board.
    #[inline]
    pub fn grid(&self) -> &Grid<Tile> {
        &self.grid
    }

    /// The accumulated score.
    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Per-cell offsets from the most recent slide; 0 means unmoved.
    #[inline]
    pub fn movement_matrix(&self) -> &Grid<i32> {
        &self.movement_matrix
    }

    /// Whether the most recent spawn request placed every tile.
    /// `None` before the first post-slide spawn.
    #[inline]
    pub fn latest_spawn_result(&self) -> Option<bool> {
        self.latest_spawn_result
    }

    /// `(column, row)` of the most recently spawned tiles.
    #[inline]
    pub fn latest_spawn_locations(&self) -> &[(usize, usize)] {
        &self.latest_spawn_locations
    }
}

impl<R: Rng> fmt::Display for Game<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.config.grid_size {
            if row > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = self.grid.row(row).map(Tile::to_string).collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
