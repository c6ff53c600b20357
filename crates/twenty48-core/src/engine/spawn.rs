use log::{debug, warn};
use rand::Rng;
use tile_grid::Grid;

use super::config::GameConfig;
use super::tile::Tile;

/// Locations filled by one spawn request, and whether all of it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnOutcome {
    /// `(column, row)` of each tile placed, in placement order.
    pub placed: Vec<(usize, usize)>,
    /// True when every requested tile found an empty cell.
    pub all_placed: bool,
}

/// Place up to `count` new tiles on random empty cells.
///
/// Each attempt draws uniformly over the empty cells remaining at that
/// moment, so earlier placements shrink the candidate list for later ones.
/// The first attempt that finds no empty cell stops the request early; the
/// remainder is dropped, not carried over to a later turn.
///
/// The uniform cell draw and the mutation draw here are the only two points
/// of nondeterminism in the engine.
pub fn spawn_tiles<R: Rng + ?Sized>(
    grid: &mut Grid<Tile>,
    rng: &mut R,
    config: &GameConfig,
    init_mode: bool,
    count: usize,
) -> SpawnOutcome {
    let mut placed = Vec::with_capacity(count);
    for _ in 0..count {
        let empty = empty_cells(grid);
        if empty.is_empty() {
            warn!("spawn shortfall: placed {} of {} tiles", placed.len(), count);
            return SpawnOutcome {
                placed,
                all_placed: false,
            };
        }
        let (col, row) = empty[rng.gen_range(0..empty.len())];
        let value = new_tile_value(rng, config, init_mode);
        grid.set(col, row, Tile::new(value));
        debug!("spawned {} at ({}, {})", value, col, row);
        placed.push((col, row));
    }
    SpawnOutcome {
        placed,
        all_placed: true,
    }
}

/// Empty cells in row-major order: the deterministic candidate ordering the
/// uniform draw indexes into.
pub(crate) fn empty_cells(grid: &Grid<Tile>) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|(_, _, tile)| tile.is_empty())
        .map(|(col, row, _)| (col, row))
        .collect()
}

/// The root value, or its square when the mutation draw fires.
///
/// The draw itself always happens so the generator advances identically
/// whether or not init mode suppresses mutation.
fn new_tile_value<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig, init_mode: bool) -> u64 {
    let should_mutate = rng.gen::<f64>() < config.mutation_probability;
    if init_mode && !config.mutation_at_start {
        return config.root_tile_value;
    }
    if should_mutate {
        config.mutated_tile_value()
    } else {
        config.root_tile_value
    }
}
