//! Depth-limited alpha-beta search over any [`SearchGame`]
//!
//! This is the engine the line protocol drives. It knows nothing about
//! Amazons beyond the adapter trait:
//! - Negamax variant of alpha-beta pruning
//! - Transposition table keyed by position fingerprint and side to move
//! - Root move ordering by static evaluation, killer moves below the root
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core negamax recursion
//! - `ordering` - Root ordering and killer moves
//! - `tt` - Transposition table

mod alphabeta;
mod ordering;
mod tt;

pub use tt::{Bound, TranspositionTable, TtEntry};

use crate::adapter::SearchGame;
use crate::constants::AB_INF;
use alphabeta::{loss_score, Searcher};
use ordering::order_moves;
use std::time::Instant;
use tracing::{debug, info};

/// What to search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Plies to look ahead, at least 1
    pub depth: u32,
    /// Ply number of the root position
    pub step: u32,
    /// True when the maximising side is to move at the root
    pub is_max_player: bool,
}

/// Result of a search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<M> {
    /// `None` when the side to move has no legal move
    pub best_move: Option<M>,
    /// Score from the point of view of the side to move
    pub score: f64,
    pub depth: u32,
    pub nodes: u64,
}

/// Find the best move for the side to move.
///
/// The game is explored with apply/undo and left exactly as it was passed in.
pub fn find_best_move<G: SearchGame>(
    game: &mut G,
    options: &SearchOptions,
) -> SearchOutcome<G::Move> {
    let started = Instant::now();
    let depth = options.depth.max(1);
    let mut searcher = Searcher::<G::Move>::new(options.step);

    let mut moves = game.enumerate_moves(options.is_max_player);
    if moves.is_empty() {
        info!("[SEARCH] No legal moves at step {}", options.step);
        return SearchOutcome {
            best_move: None,
            score: loss_score(0),
            depth,
            nodes: 1,
        };
    }

    if depth > 1 {
        order_moves(game, &mut moves, options.step, options.is_max_player);
    }

    let mut alpha = -AB_INF;
    let mut best_move = moves[0];
    let mut best_score = -AB_INF;
    for &mv in &moves {
        game.apply(mv);
        let score = -searcher.negamax(game, depth - 1, -AB_INF, -alpha, !options.is_max_player, 1);
        game.undo(mv);

        if score > best_score {
            best_score = score;
            best_move = mv;
        }
        alpha = alpha.max(score);
    }

    debug!(
        "[SEARCH] tt entries={} stores={} hits={} cutoffs={}",
        searcher.tt.len(),
        searcher.tt.stores,
        searcher.tt.hits,
        searcher.cutoffs
    );
    info!(
        "[SEARCH] step={} depth={} moves={} score={:.3} nodes={} in {:?}",
        options.step,
        depth,
        moves.len(),
        best_score,
        searcher.nodes,
        started.elapsed()
    );

    SearchOutcome {
        best_move: Some(best_move),
        score: best_score,
        depth,
        nodes: searcher.nodes + 1,
    }
}
