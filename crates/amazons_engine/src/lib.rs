//! # Amazons Engine
//!
//! Rules engine and move generation core for the Game of the Amazons on a
//! 10×10 board.
//!
//! ## Module Organization
//!
//! - `types` - Cell states, colors, squares and moves
//! - `board` - The 10×10 grid, setups and queries
//! - `hash` - Zobrist fingerprints
//! - `move_gen` - Legal move enumeration, one worker thread per amazon
//! - `make_unmake` - Move application, reversal and validation
//! - `state` - Game-over detection
//! - `evaluation` - Pluggable scoring and the default territory evaluator
//! - `adapter` - The [`SearchGame`] surface a search engine consumes
//! - `search` - Depth-limited alpha-beta over any [`SearchGame`]
//!
//! ## Example
//!
//! ```rust
//! use amazons_engine::{find_best_move, AmazonsGame, Board, SearchOptions};
//!
//! let mut game = AmazonsGame::new(Board::initial());
//! let outcome = find_best_move(
//!     &mut game,
//!     &SearchOptions { depth: 1, step: 1, is_max_player: true },
//! );
//! assert!(outcome.best_move.is_some());
//! ```

pub mod adapter;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod hash;
pub mod make_unmake;
pub mod move_gen;
pub mod search;
pub mod state;
pub mod types;

pub use adapter::{AmazonsGame, EvalOptions, SearchGame};
pub use board::Board;
pub use error::{AmazonsError, AmazonsResult};
pub use evaluation::{Evaluator, TerritoryEvaluator};
pub use hash::position_hash;
pub use move_gen::{generate_moves, generate_moves_sequential};
pub use search::{find_best_move, SearchOptions, SearchOutcome};
pub use types::{CellState, Color, Move, Position};
