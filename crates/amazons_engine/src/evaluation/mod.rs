//! Position evaluation
//!
//! The search adapter scores leaves through an [`Evaluator`]. Scores are
//! from Black's (the maximising player's) point of view: positive favours
//! Black. An evaluator must be a pure function of the board and its two
//! parameters so the search can cache and compare scores.
//!
//! ## Module Organization
//!
//! - `distance` - Queen and king move distance maps
//! - `territory` - Default territory/mobility evaluator

mod distance;
mod territory;

pub use distance::{king_distances, queen_distances, DistanceMap, UNREACHABLE};
pub use territory::{PhaseWeights, TerritoryEvaluator};

use crate::board::Board;

/// Scores a board for the search
pub trait Evaluator {
    /// `step` is the ply number of the position, `is_max_player` is true
    /// when Black is to move
    fn evaluate(&self, board: &Board, step: u32, is_max_player: bool) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, u32, bool) -> f64,
{
    fn evaluate(&self, board: &Board, step: u32, is_max_player: bool) -> f64 {
        self(board, step, is_max_player)
    }
}
