//! Negamax alpha-beta
//!
//! Scores are kept from the side to move's point of view inside the tree;
//! leaves flip the evaluator's Black-positive score accordingly. A side
//! with no legal move has lost, and losing later scores better than losing
//! sooner.

use super::ordering::Killers;
use super::tt::{Bound, TranspositionTable, TtEntry};
use crate::adapter::{EvalOptions, SearchGame};
use crate::constants::{AB_INF, WIN_SCORE};

/// Loss score for the side to move at `ply`
#[inline]
pub(crate) fn loss_score(ply: u32) -> f64 {
    -(WIN_SCORE - ply as f64)
}

pub(crate) struct Searcher<M> {
    pub tt: TranspositionTable,
    pub killers: Killers<M>,
    pub nodes: u64,
    pub cutoffs: u64,
    /// Ply number of the root position
    pub root_step: u32,
}

impl<M: Copy + Eq> Searcher<M> {
    pub fn new(root_step: u32) -> Self {
        Self {
            tt: TranspositionTable::new(),
            killers: Killers::default(),
            nodes: 0,
            cutoffs: 0,
            root_step,
        }
    }

    fn leaf<G: SearchGame>(&self, game: &G, is_max_player: bool, ply: u32) -> f64 {
        let score = game.evaluate(EvalOptions {
            step: self.root_step + ply,
            is_max_player,
        });
        if is_max_player {
            score
        } else {
            -score
        }
    }

    pub fn negamax<G: SearchGame<Move = M>>(
        &mut self,
        game: &mut G,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        is_max_player: bool,
        ply: u32,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 {
            return self.leaf(game, is_max_player, ply);
        }

        let hash = game.hash();
        if let Some(entry) = self.tt.probe(hash, is_max_player, depth) {
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }

        let mut moves = game.enumerate_moves(is_max_player);
        if moves.is_empty() {
            return loss_score(ply);
        }
        self.killers.promote(ply, &mut moves);

        let alpha_orig = alpha;
        let mut best = -AB_INF;
        let mut best_move = None;
        for mv in moves {
            game.apply(mv);
            let score = -self.negamax(game, depth - 1, -beta, -alpha, !is_max_player, ply + 1);
            game.undo(mv);

            if score > best {
                best = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                self.cutoffs += 1;
                break;
            }
        }

        let bound = if best <= alpha_orig {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        if bound != Bound::Upper {
            if let Some(mv) = best_move {
                self.killers.record(ply, mv);
            }
        }
        self.tt.store(
            hash,
            is_max_player,
            TtEntry {
                depth,
                score: best,
                bound,
            },
        );

        best
    }
}
