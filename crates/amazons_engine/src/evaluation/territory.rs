//! Territory evaluation
//!
//! Scores a position by who reaches each empty cell first:
//! - `t1` / `t2`: territory under queen and king distance. A cell counts +1
//!   for the side strictly closer; equal finite distance goes to the side to
//!   move by a small tempo bonus.
//! - `c1`: queen-distance closeness, `2^-d` summed per side.
//! - `c2`: king-distance difference per cell, clamped to [-1, 1].
//! - `mobility`: cells one queen slide away, Black minus White.
//!
//! Territory counts decide the endgame while the positional terms steer the
//! opening, so the weights move with the ply number.

use super::distance::{king_distances, queen_distances, DistanceMap, UNREACHABLE};
use super::Evaluator;
use crate::board::Board;
use crate::types::Color;

/// Bonus for a cell both sides reach equally fast, credited to the mover
const TEMPO: f64 = 0.2;

/// Last ply still weighted as opening
const OPENING_END: u32 = 20;

/// Last ply (exclusive) weighted as middle game
const MIDDLE_END: u32 = 50;

/// King distance difference that saturates `c2`
const KING_SPREAD: f64 = 6.0;

/// Unreachable cells count as this far away in `c2`
const KING_CAP: u8 = 12;

/// Weights of the five terms for one game phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWeights {
    pub t1: f64,
    pub t2: f64,
    pub c1: f64,
    pub c2: f64,
    pub mobility: f64,
}

const OPENING: PhaseWeights = PhaseWeights {
    t1: 0.14,
    t2: 0.37,
    c1: 0.13,
    c2: 0.13,
    mobility: 0.20,
};

const MIDDLE: PhaseWeights = PhaseWeights {
    t1: 0.30,
    t2: 0.25,
    c1: 0.20,
    c2: 0.20,
    mobility: 0.05,
};

const ENDGAME: PhaseWeights = PhaseWeights {
    t1: 0.80,
    t2: 0.10,
    c1: 0.05,
    c2: 0.05,
    mobility: 0.0,
};

/// Default evaluator used by the front end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerritoryEvaluator {
    pub opening: PhaseWeights,
    pub middle: PhaseWeights,
    pub endgame: PhaseWeights,
}

impl Default for TerritoryEvaluator {
    fn default() -> Self {
        Self {
            opening: OPENING,
            middle: MIDDLE,
            endgame: ENDGAME,
        }
    }
}

impl TerritoryEvaluator {
    pub fn weights(&self, step: u32) -> &PhaseWeights {
        if step <= OPENING_END {
            &self.opening
        } else if step < MIDDLE_END {
            &self.middle
        } else {
            &self.endgame
        }
    }
}

#[inline]
fn ownership(black: u8, white: u8, tempo: f64) -> f64 {
    match (black, white) {
        (UNREACHABLE, UNREACHABLE) => 0.0,
        (b, w) if b < w => 1.0,
        (b, w) if b > w => -1.0,
        _ => tempo,
    }
}

#[inline]
fn closeness(d: u8) -> f64 {
    if d == UNREACHABLE {
        0.0
    } else {
        2f64.powi(-(d as i32))
    }
}

#[inline]
fn capped(d: u8) -> f64 {
    d.min(KING_CAP) as f64
}

#[derive(Debug, Default)]
struct Terms {
    t1: f64,
    t2: f64,
    c1: f64,
    c2: f64,
    mobility: f64,
}

fn terms(board: &Board, is_max_player: bool) -> Terms {
    let queen = [
        queen_distances(board, Color::Black),
        queen_distances(board, Color::White),
    ];
    let king = [
        king_distances(board, Color::Black),
        king_distances(board, Color::White),
    ];
    let tempo = if is_max_player { TEMPO } else { -TEMPO };

    let mut terms = Terms::default();
    for pos in Board::squares().filter(|&pos| board.is_empty_at(pos)) {
        let (qb, qw) = (queen[0].get(pos), queen[1].get(pos));
        let (kb, kw) = (king[0].get(pos), king[1].get(pos));

        terms.t1 += ownership(qb, qw, tempo);
        terms.t2 += ownership(kb, kw, tempo);
        terms.c1 += 2.0 * (closeness(qb) - closeness(qw));
        if kb != UNREACHABLE || kw != UNREACHABLE {
            terms.c2 += ((capped(kw) - capped(kb)) / KING_SPREAD).clamp(-1.0, 1.0);
        }
    }
    terms.mobility = mobility(&queen[0]) - mobility(&queen[1]);
    terms
}

fn mobility(map: &DistanceMap) -> f64 {
    map.count_at(1) as f64
}

impl Evaluator for TerritoryEvaluator {
    fn evaluate(&self, board: &Board, step: u32, is_max_player: bool) -> f64 {
        let t = terms(board, is_max_player);
        let w = self.weights(step);
        w.t1 * t.t1 + w.t2 * t.t2 + w.c1 * t.c1 + w.c2 * t.c2 + w.mobility * t.mobility
    }
}
