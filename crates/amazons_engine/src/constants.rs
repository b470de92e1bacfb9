//! # Engine Constants - Board Geometry, Setup & Search Parameters
//!
//! ## Board Geometry
//!
//! The Amazons board is a fixed 10×10 grid addressed by `(row, col)` with
//! row 0 at the top. Every piece moves like a chess queen, so both the
//! piece slide and the arrow shot walk one of the eight compass directions
//! stored in [`DIRECTIONS`] until the first blocker.
//!
//! ## Starting Position
//!
//! Each side has four amazons on the edge-midpoint squares of its half:
//!
//! ```text
//! . . . W . . W . . .     row 0
//! . . . . . . . . . .
//! . . . . . . . . . .
//! W . . . . . . . . W     row 3
//! . . . . . . . . . .
//! . . . . . . . . . .
//! B . . . . . . . . B     row 6
//! . . . . . . . . . .
//! . . . . . . . . . .
//! . . . B . . B . . .     row 9
//! ```
//!
//! Black moves first and is the maximising player of the search.

/// Width and height of the board
pub const BOARD_SIZE: usize = 10;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Amazons per side
pub const PIECES_PER_SIDE: usize = 4;

/// Compass directions as `(row delta, col delta)`:
/// up-left, up, up-right, right, down-right, down, down-left, left
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Starting squares of the white amazons
pub const WHITE_SETUP: [(u8, u8); PIECES_PER_SIDE] = [(0, 3), (0, 6), (3, 0), (3, 9)];

/// Starting squares of the black amazons
pub const BLACK_SETUP: [(u8, u8); PIECES_PER_SIDE] = [(6, 0), (6, 9), (9, 3), (9, 6)];

/// Seed of the Zobrist key generator. Fixed so fingerprints are stable
/// across runs, which keeps logged hashes comparable.
pub const ZOBRIST_SEED: u64 = 0x00A3_A205_5EED_2024;

/// Rough number of moves a single amazon produces in an open position,
/// used to presize per-piece buffers
pub const PIECE_MOVE_HINT: usize = 640;

/// Score of a won position, from the winner's point of view
pub const WIN_SCORE: f64 = 1.0e6;

/// Upper bound for alpha-beta windows
pub const AB_INF: f64 = f64::INFINITY;
