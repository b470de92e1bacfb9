//! Board state and helper functions
//!
//! Provides fundamental board operations used throughout the engine:
//! - Bounds checking and cell queries
//! - Standard and empty setups
//! - Piece lookup per color
//! - Plain-text rendering for diagnostics

use crate::constants::*;
use crate::types::*;
use std::fmt;

/// The 10×10 grid of cell states.
///
/// A board owns its cells outright. `clone()` is a deep copy: the search can
/// explore a cloned board freely without affecting the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// A board with every cell `Empty`
    pub fn empty() -> Self {
        Self {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting position
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for &(row, col) in &WHITE_SETUP {
            board.set(Position::new(row, col), CellState::White);
        }
        for &(row, col) in &BLACK_SETUP {
            board.set(Position::new(row, col), CellState::Black);
        }
        board
    }

    /// Check if square coordinates are valid
    #[inline]
    pub fn bounds_check(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Get cell at position
    #[inline]
    pub fn cell_at(&self, pos: Position) -> CellState {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if square is empty
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cell_at(pos) == CellState::Empty
    }

    /// Overwrite a single cell.
    ///
    /// Meant for building test positions and for the move applier; it does
    /// not keep the piece-count invariant by itself.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: CellState) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Iterate over every square in row-major order
    pub fn squares() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position::new(row, col)))
    }

    /// Squares holding an amazon of `color`, in row-major order
    pub fn pieces(&self, color: Color) -> Vec<Position> {
        let wanted = color.cell();
        Self::squares().filter(|&pos| self.cell_at(pos) == wanted).collect()
    }

    /// Number of amazons of `color`
    pub fn piece_count(&self, color: Color) -> usize {
        let wanted = color.cell();
        self.cells.iter().flatten().filter(|&&cell| cell == wanted).count()
    }

    /// Number of burnt squares
    pub fn arrow_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == CellState::Arrow)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|cell| cell.glyph().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
