//! # Core Types - Cells, Colors, Squares and Moves
//!
//! ## Cell Encoding
//!
//! Every cell holds one of four states, fitting in two bits:
//!
//! | State   | Value | Meaning                         |
//! |---------|-------|---------------------------------|
//! | `Empty` | 0     | free square                     |
//! | `Black` | 1     | black amazon                    |
//! | `White` | 2     | white amazon                    |
//! | `Arrow` | 3     | burnt square, never freed again |
//!
//! The numeric value doubles as the third index of the Zobrist key table
//! (see [`crate::hash`]).
//!
//! ## Moves
//!
//! An Amazons move is always a triple: the amazon slides from `from` to
//! `to`, then shoots an arrow from `to` to `arrow`. Because the source square
//! is vacated first, `arrow == from` is legal and common. `Move` derives
//! `Ord` on `(from, to, arrow)` so generated move lists can be sorted into a
//! stable order.
//!
//! ## Notation
//!
//! | Form     | Example    | Produced by                 | Parsed by        |
//! |----------|------------|-----------------------------|------------------|
//! | Protocol | `DJDFGF`   | [`Move::to_protocol`]       | [`str::parse`]   |
//! | Record   | `d1d5(g5)` | `Display`                   | -                |
//!
//! Protocol text is six letters, `A` = 0, in the order from.col, from.row,
//! to.col, to.row, arrow.col, arrow.row. Record squares are a lowercase
//! column letter followed by `10 - row`, so row 9 prints as `1`.

use crate::constants::BOARD_SIZE;
use crate::error::AmazonsError;
use std::fmt;
use std::str::FromStr;

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
    Arrow = 3,
}

impl CellState {
    /// Number of distinct cell states
    pub const COUNT: usize = 4;

    /// Index into per-state tables
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// True for cells holding an amazon of either color
    #[inline]
    pub fn is_piece(self) -> bool {
        matches!(self, CellState::Black | CellState::White)
    }

    /// Glyph used by the board renderer
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Black => 'B',
            CellState::White => 'W',
            CellState::Arrow => 'X',
        }
    }

    /// Color of the amazon in this cell, if any
    pub fn color(self) -> Option<Color> {
        match self {
            CellState::Black => Some(Color::Black),
            CellState::White => Some(Color::White),
            _ => None,
        }
    }
}

/// Side to move. Black moves first and is the maximising player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Cell state of this side's amazons
    #[inline]
    pub fn cell(self) -> CellState {
        match self {
            Color::Black => CellState::Black,
            Color::White => CellState::White,
        }
    }

    /// Black maximises, White minimises
    #[inline]
    pub fn is_max_player(self) -> bool {
        self == Color::Black
    }

    #[inline]
    pub fn from_max_player(is_max_player: bool) -> Color {
        if is_max_player {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A square on the board, `row` and `col` both in `0..10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the engine
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if crate::board::Board::bounds_check(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Neighbouring square one step along `(dr, dc)`, or `None` past the edge
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Self::try_new(self.row as i32 + dr as i32, self.col as i32 + dc as i32)
    }

    /// True when both coordinates lie on the board
    #[inline]
    pub fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, BOARD_SIZE - self.row as usize)
    }
}

/// One complete Amazons move: slide `from` → `to`, shoot `to` → `arrow`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub arrow: Position,
}

impl Move {
    /// Length of a move in protocol text
    pub const PROTOCOL_LEN: usize = 6;

    #[inline]
    pub const fn new(from: Position, to: Position, arrow: Position) -> Self {
        Self { from, to, arrow }
    }

    /// Six-letter protocol text, e.g. `DJDFGF`
    pub fn to_protocol(&self) -> String {
        [self.from, self.to, self.arrow]
            .iter()
            .flat_map(|pos| [pos.col, pos.row])
            .map(|c| (b'A' + c) as char)
            .collect()
    }
}

fn protocol_coordinate(text: &str, byte: u8) -> Result<u8, AmazonsError> {
    let malformed = |reason| AmazonsError::MalformedMove {
        text: text.to_string(),
        reason,
    };
    let upper = byte.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return Err(malformed("expected letters only"));
    }
    let value = upper - b'A';
    if value as usize >= BOARD_SIZE {
        return Err(malformed("coordinate past J"));
    }
    Ok(value)
}

/// Parses protocol text. Lowercase letters are accepted.
impl FromStr for Move {
    type Err = AmazonsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let bytes = text.as_bytes();
        if bytes.len() != Self::PROTOCOL_LEN {
            return Err(AmazonsError::MalformedMove {
                text: text.to_string(),
                reason: "expected exactly 6 letters",
            });
        }

        let mut coords = [0u8; Self::PROTOCOL_LEN];
        for (slot, &byte) in coords.iter_mut().zip(bytes) {
            *slot = protocol_coordinate(text, byte)?;
        }

        Ok(Move::new(
            Position::new(coords[1], coords[0]),
            Position::new(coords[3], coords[2]),
            Position::new(coords[5], coords[4]),
        ))
    }
}

/// Record notation, e.g. `d1d5(g5)`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}({})", self.from, self.to, self.arrow)
    }
}
