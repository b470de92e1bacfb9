//! Sliding scans along queen lines
//!
//! Both halves of an Amazons move are queen slides: the amazon travels
//! along one of eight directions until blocked, then the arrow does the
//! same from the landing square.
//!
//! ## Algorithm
//!
//! For each amazon:
//! 1. Walk each direction from the source square while cells are empty.
//!    Every square passed is a candidate destination.
//! 2. From each destination walk all eight directions again. Cells must be
//!    empty or equal to the source square, which the amazon has vacated.
//!    Every square passed is an arrow target.
//! 3. Both walks stop before the first occupied cell or the board edge.
//!
//! The board is only read; the amazon is never lifted off its square.

use crate::board::Board;
use crate::constants::{DIRECTIONS, PIECE_MOVE_HINT};
use crate::types::*;

/// Squares reachable from `start` along one direction, nearest first.
///
/// `vacated` is treated as empty even if the board still shows a piece on
/// it; the arrow scan passes the mover's source square here.
pub struct Ray<'a> {
    board: &'a Board,
    cursor: Position,
    step: (i8, i8),
    vacated: Option<Position>,
}

impl<'a> Ray<'a> {
    pub fn new(
        board: &'a Board,
        start: Position,
        step: (i8, i8),
        vacated: Option<Position>,
    ) -> Self {
        Self {
            board,
            cursor: start,
            step,
            vacated,
        }
    }
}

impl Iterator for Ray<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let next = self.cursor.offset(self.step.0, self.step.1)?;
        if self.board.is_empty_at(next) || Some(next) == self.vacated {
            self.cursor = next;
            Some(next)
        } else {
            None
        }
    }
}

/// Unit step from `from` towards `to`, if the two squares share a rank,
/// file or diagonal
pub fn line_direction(from: Position, to: Position) -> Option<(i8, i8)> {
    let dr = to.row as i32 - from.row as i32;
    let dc = to.col as i32 - from.col as i32;
    if (dr, dc) == (0, 0) {
        return None;
    }
    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return None;
    }
    Some((dr.signum() as i8, dc.signum() as i8))
}

/// Generate every move of the amazon on `from`
pub fn generate_piece_moves(board: &Board, from: Position, moves: &mut Vec<Move>) {
    for &step in &DIRECTIONS {
        for to in Ray::new(board, from, step, None) {
            for &arrow_step in &DIRECTIONS {
                moves.extend(
                    Ray::new(board, to, arrow_step, Some(from))
                        .map(|arrow| Move::new(from, to, arrow)),
                );
            }
        }
    }
}

/// Moves of a single amazon in a fresh buffer
pub fn piece_moves(board: &Board, from: Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(PIECE_MOVE_HINT);
    generate_piece_moves(board, from, &mut moves);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_stops_before_blocker() {
        let mut board = Board::empty();
        board.set(Position::new(0, 4), CellState::Arrow);
        let squares: Vec<Position> = Ray::new(&board, Position::new(0, 0), (0, 1), None).collect();
        assert_eq!(
            squares,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(0, 3)]
        );
    }

    #[test]
    fn test_ray_passes_vacated_square() {
        let mut board = Board::empty();
        let origin = Position::new(5, 5);
        board.set(origin, CellState::Black);
        let squares: Vec<Position> =
            Ray::new(&board, Position::new(5, 7), (0, -1), Some(origin)).collect();
        assert_eq!(squares.len(), 7);
        assert!(squares.contains(&origin));
    }

    #[test]
    fn test_line_direction() {
        let a = Position::new(4, 4);
        assert_eq!(line_direction(a, Position::new(0, 4)), Some((-1, 0)));
        assert_eq!(line_direction(a, Position::new(7, 7)), Some((1, 1)));
        assert_eq!(line_direction(a, Position::new(2, 6)), Some((-1, 1)));
        assert_eq!(line_direction(a, Position::new(5, 6)), None);
        assert_eq!(line_direction(a, a), None);
    }

    #[test]
    fn test_boxed_in_amazon_has_no_moves() {
        let mut board = Board::empty();
        board.set(Position::new(0, 0), CellState::White);
        board.set(Position::new(0, 1), CellState::Arrow);
        board.set(Position::new(1, 0), CellState::Arrow);
        board.set(Position::new(1, 1), CellState::Black);
        assert!(piece_moves(&board, Position::new(0, 0)).is_empty());
    }
}
