//! Move making and unmaking
//!
//! `apply` and `undo` are the unit of work the search repeats millions of
//! times, so they trust their input: three cell writes each, no history.
//! Moves that come from outside the engine go through [`Board::play`],
//! which validates first.

use crate::board::Board;
use crate::error::{AmazonsError, AmazonsResult};
use crate::move_gen::sliding::{line_direction, Ray};
use crate::types::*;

impl Board {
    /// Make a move on the board.
    ///
    /// `mv.from` must hold an amazon; moves produced by the generator always
    /// satisfy this.
    pub fn apply(&mut self, mv: Move) {
        let piece = self.cell_at(mv.from);
        debug_assert!(piece.is_piece(), "apply: no amazon on {}", mv.from);
        self.set(mv.to, piece);
        self.set(mv.from, CellState::Empty);
        self.set(mv.arrow, CellState::Arrow);
    }

    /// Unmake a move previously made with [`Board::apply`].
    ///
    /// The board must be exactly in the state `apply(mv)` left it in.
    pub fn undo(&mut self, mv: Move) {
        let piece = self.cell_at(mv.to);
        debug_assert!(piece.is_piece(), "undo: no amazon on {}", mv.to);
        self.set(mv.from, piece);
        self.set(mv.to, CellState::Empty);
        // An arrow shot back onto the source square was just overwritten by the piece
        if mv.arrow != mv.from {
            self.set(mv.arrow, CellState::Empty);
        }
    }

    /// Check that `mv` is legal for `color` on this board
    pub fn validate_move(&self, mv: Move, color: Color) -> AmazonsResult<()> {
        for pos in [mv.from, mv.to, mv.arrow] {
            if !pos.is_on_board() {
                return Err(AmazonsError::OutOfBounds {
                    row: pos.row,
                    col: pos.col,
                });
            }
        }

        match self.cell_at(mv.from).color() {
            None => return Err(AmazonsError::NoPieceAtSquare { square: mv.from }),
            Some(owner) if owner != color => {
                return Err(AmazonsError::WrongPieceColor {
                    square: mv.from,
                    color,
                })
            }
            Some(_) => {}
        }

        let step = line_direction(mv.from, mv.to).ok_or(AmazonsError::NotQueenLine {
            from: mv.from,
            to: mv.to,
        })?;
        if !Ray::new(self, mv.from, step, None).any(|pos| pos == mv.to) {
            return Err(AmazonsError::BlockedPath {
                from: mv.from,
                to: mv.to,
            });
        }

        let illegal_arrow = AmazonsError::IllegalArrow {
            to: mv.to,
            arrow: mv.arrow,
        };
        let arrow_step = line_direction(mv.to, mv.arrow).ok_or(illegal_arrow.clone())?;
        if !Ray::new(self, mv.to, arrow_step, Some(mv.from)).any(|pos| pos == mv.arrow) {
            return Err(illegal_arrow);
        }

        Ok(())
    }

    /// Validate `mv` for `color`, then apply it
    pub fn play(&mut self, mv: Move, color: Color) -> AmazonsResult<()> {
        self.validate_move(mv, color)?;
        self.apply(mv);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (u8, u8), to: (u8, u8), arrow: (u8, u8)) -> Move {
        Move::new(
            Position::new(from.0, from.1),
            Position::new(to.0, to.1),
            Position::new(arrow.0, arrow.1),
        )
    }

    #[test]
    fn test_apply_writes_three_cells() {
        let mut board = Board::initial();
        let m = mv((9, 3), (5, 3), (5, 7));
        board.apply(m);
        assert_eq!(board.cell_at(m.from), CellState::Empty);
        assert_eq!(board.cell_at(m.to), CellState::Black);
        assert_eq!(board.cell_at(m.arrow), CellState::Arrow);
        assert_eq!(board.arrow_count(), 1);
    }

    #[test]
    fn test_undo_restores_board() {
        let original = Board::initial();
        let mut board = original.clone();
        let m = mv((0, 6), (4, 6), (4, 2));
        board.apply(m);
        board.undo(m);
        assert_eq!(board, original);
    }

    #[test]
    fn test_undo_with_arrow_on_origin() {
        let original = Board::initial();
        let mut board = original.clone();
        let m = mv((6, 0), (7, 0), (6, 0));
        board.apply(m);
        assert_eq!(board.cell_at(Position::new(6, 0)), CellState::Arrow);
        board.undo(m);
        assert_eq!(board.cell_at(Position::new(6, 0)), CellState::Black);
        assert_eq!(board.cell_at(Position::new(7, 0)), CellState::Empty);
        assert_eq!(board, original);
    }

    #[test]
    fn test_validate_accepts_generated_moves() {
        let board = Board::initial();
        for m in board.enumerate(Color::White) {
            assert_eq!(board.validate_move(m, Color::White), Ok(()));
        }
    }

    #[test]
    fn test_validate_rejects_bad_moves() {
        let board = Board::initial();
        assert_eq!(
            board.validate_move(mv((5, 5), (5, 6), (5, 7)), Color::Black),
            Err(AmazonsError::NoPieceAtSquare {
                square: Position::new(5, 5)
            })
        );
        assert!(matches!(
            board.validate_move(mv((0, 3), (1, 3), (2, 3)), Color::Black),
            Err(AmazonsError::WrongPieceColor { .. })
        ));
        assert!(matches!(
            board.validate_move(mv((9, 3), (7, 4), (6, 4)), Color::Black),
            Err(AmazonsError::NotQueenLine { .. })
        ));
        // (9,3) -> (9,8) passes the black amazon on (9,6)
        assert!(matches!(
            board.validate_move(mv((9, 3), (9, 8), (8, 8)), Color::Black),
            Err(AmazonsError::BlockedPath { .. })
        ));
        // arrow from (5,0) upward is stopped by the white amazon on (3,0)
        assert!(matches!(
            board.validate_move(mv((6, 0), (5, 0), (2, 0)), Color::Black),
            Err(AmazonsError::IllegalArrow { .. })
        ));
        assert!(matches!(
            board.validate_move(mv((9, 3), (10, 3), (8, 3)), Color::Black),
            Err(AmazonsError::OutOfBounds { row: 10, col: 3 })
        ));
    }

    #[test]
    fn test_play_leaves_board_untouched_on_error() {
        let mut board = Board::initial();
        let before = board.clone();
        assert!(board.play(mv((9, 3), (9, 8), (8, 8)), Color::Black).is_err());
        assert_eq!(board, before);
        assert!(board.play(mv((9, 3), (9, 4), (9, 3)), Color::Black).is_ok());
        assert_eq!(board.cell_at(Position::new(9, 3)), CellState::Arrow);
    }
}
