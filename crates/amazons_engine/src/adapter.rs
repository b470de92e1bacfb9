//! Search adapter
//!
//! The capability surface a generic adversarial search needs from a game:
//! enumerate, apply, undo, clone, hash and evaluate. The move type is an
//! associated type, so a search instantiated for Amazons can only ever hand
//! Amazons moves back to the board.

use crate::board::Board;
use crate::evaluation::{Evaluator, TerritoryEvaluator};
use crate::move_gen::generate_moves;
use crate::types::{Color, Move};
use std::fmt::Debug;

/// Parameters passed to leaf evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Ply number of the evaluated position
    pub step: u32,
    /// True when the maximising side is to move
    pub is_max_player: bool,
}

/// A two-player game a search engine can explore
pub trait SearchGame: Clone {
    type Move: Copy + Eq + Debug;

    /// Legal moves of the maximising (`true`) or minimising side
    fn enumerate_moves(&self, is_max_player: bool) -> Vec<Self::Move>;

    fn apply(&mut self, mv: Self::Move);

    /// Reverse `apply(mv)`; must be called on the state `apply` produced
    fn undo(&mut self, mv: Self::Move);

    /// Fingerprint of the position for transposition detection
    fn hash(&self) -> u64;

    /// Score from the maximising side's point of view
    fn evaluate(&self, options: EvalOptions) -> f64;
}

/// An Amazons board paired with the evaluator that scores it
#[derive(Debug, Clone, PartialEq)]
pub struct AmazonsGame<E = TerritoryEvaluator> {
    board: Board,
    evaluator: E,
}

impl AmazonsGame<TerritoryEvaluator> {
    pub fn new(board: Board) -> Self {
        Self::with_evaluator(board, TerritoryEvaluator::default())
    }
}

impl<E> AmazonsGame<E> {
    pub fn with_evaluator(board: Board, evaluator: E) -> Self {
        Self { board, evaluator }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}

impl<E: Evaluator + Clone> SearchGame for AmazonsGame<E> {
    type Move = Move;

    fn enumerate_moves(&self, is_max_player: bool) -> Vec<Move> {
        generate_moves(&self.board, Color::from_max_player(is_max_player))
    }

    #[inline]
    fn apply(&mut self, mv: Move) {
        self.board.apply(mv);
    }

    #[inline]
    fn undo(&mut self, mv: Move) {
        self.board.undo(mv);
    }

    #[inline]
    fn hash(&self) -> u64 {
        self.board.hash()
    }

    fn evaluate(&self, options: EvalOptions) -> f64 {
        self.evaluator
            .evaluate(&self.board, options.step, options.is_max_player)
    }
}
