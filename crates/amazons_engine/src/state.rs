//! Game state queries
//!
//! Termination is decided by running full move generation for both sides,
//! so it costs two complete enumerations. Call it once per ply, not inside
//! the search.
//!
//! The game counts as over as soon as *either* side is immobilised, not
//! only the side to move. Front ends built on this engine rely on that rule.

use crate::board::Board;
use crate::move_gen::generate_moves;
use crate::types::Color;

impl Board {
    /// True iff Black or White has no legal move
    pub fn is_over(&self) -> bool {
        self.immobilized().is_some()
    }

    /// First side found without a legal move, Black checked first
    pub fn immobilized(&self) -> Option<Color> {
        [Color::Black, Color::White]
            .into_iter()
            .find(|&color| generate_moves(self, color).is_empty())
    }

    /// Winner of a finished game: the side that can still move.
    /// `None` while both sides have moves.
    pub fn winner(&self) -> Option<Color> {
        self.immobilized().map(Color::opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellState, Position};

    /// White amazon in the corner walled in by arrows, black amazon free
    fn trapped_white() -> Board {
        let mut board = Board::empty();
        board.set(Position::new(0, 0), CellState::White);
        board.set(Position::new(0, 1), CellState::Arrow);
        board.set(Position::new(1, 0), CellState::Arrow);
        board.set(Position::new(1, 1), CellState::Arrow);
        board.set(Position::new(5, 5), CellState::Black);
        board
    }

    #[test]
    fn test_initial_position_not_over() {
        let board = Board::initial();
        assert!(!board.is_over());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_over_when_white_immobilized() {
        let board = trapped_white();
        assert!(board.is_over());
        assert_eq!(board.immobilized(), Some(Color::White));
        assert_eq!(board.winner(), Some(Color::Black));
    }

    #[test]
    fn test_over_regardless_of_side_to_move() {
        let mut board = trapped_white();
        // swap colours: now Black is stuck, White roams
        board.set(Position::new(0, 0), CellState::Black);
        board.set(Position::new(5, 5), CellState::White);
        assert!(board.is_over());
        assert_eq!(board.immobilized(), Some(Color::Black));
    }
}
