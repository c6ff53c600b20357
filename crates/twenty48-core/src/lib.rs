//! Rules engine for a generalized "2048"-style tile-merging game.
//!
//! A square grid of numeric tiles slides and merges on directional input,
//! spawns new tiles, and tracks score and terminal conditions. The grid
//! container itself lives in the `tile-grid` crate; this crate holds the
//! rules: the slide/merge algorithm, the turn state machine, the spawn
//! policy, and full-state snapshots.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use twenty48_core::engine::{Game, GameConfig, SlideDirection, SlideResult};
//!
//! let rng = StdRng::seed_from_u64(2048);
//! let mut game = Game::with_rng(GameConfig::default(), rng).unwrap();
//! while game.can_play() {
//!     if game.play_turn(SlideDirection::Left) != SlideResult::Normal {
//!         break;
//!     }
//!     if game.play_turn(SlideDirection::Down) != SlideResult::Normal {
//!         break;
//!     }
//! }
//! let snapshot = game.save().unwrap();
//! let restored = twenty48_core::engine::Game::load(&snapshot).unwrap();
//! assert_eq!(restored.score(), game.score());
//! ```

pub mod engine;
pub mod save;
