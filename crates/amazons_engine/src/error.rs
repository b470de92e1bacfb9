//! Error types for the Amazons engine
//!
//! Provides custom error types for move text parsing and checked move
//! application. The search hot path works on moves the generator produced
//! and never constructs these.

use crate::types::{Color, Position};
use thiserror::Error;

/// Errors that can occur when validating or playing a move
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmazonsError {
    /// Coordinates outside the 10×10 board
    #[error("Square ({row}, {col}) is off the board (must be 0-9)")]
    OutOfBounds { row: u8, col: u8 },

    /// No amazon on the source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Position },

    /// Amazon belongs to the other side
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: Position, color: Color },

    /// Two squares do not share a rank, file or diagonal
    #[error("{from} and {to} are not on a queen line")]
    NotQueenLine { from: Position, to: Position },

    /// Something stands between source and destination
    #[error("Path from {from} to {to} is blocked")]
    BlockedPath { from: Position, to: Position },

    /// Arrow target not reachable from the landing square
    #[error("Arrow from {to} cannot reach {arrow}")]
    IllegalArrow { to: Position, arrow: Position },

    /// Text that is not six letters `A`-`J`
    #[error("Malformed move '{text}': {reason}")]
    MalformedMove { text: String, reason: &'static str },

    /// Side has no legal move left
    #[error("{color} has no legal moves")]
    NoLegalMoves { color: Color },
}

/// Result type alias for engine operations
pub type AmazonsResult<T> = Result<T, AmazonsError>;
