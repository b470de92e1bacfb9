//! Zobrist hashing
//!
//! Implements position fingerprints for transposition detection. The key
//! table holds one random `u64` per `(row, col, cell state)` and is built
//! once, on first use, from a fixed seed. After that it is never written,
//! so any number of threads may read it without synchronisation.

use crate::board::Board;
use crate::constants::{BOARD_SIZE, ZOBRIST_SEED};
use crate::types::{CellState, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::LazyLock;

/// Random keys indexed by `[row][col][cell state]`
pub struct ZobristTable {
    keys: [[[u64; CellState::COUNT]; BOARD_SIZE]; BOARD_SIZE],
}

impl ZobristTable {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut keys = [[[0u64; CellState::COUNT]; BOARD_SIZE]; BOARD_SIZE];
        for row in keys.iter_mut() {
            for cell in row.iter_mut() {
                for key in cell.iter_mut() {
                    *key = rng.random();
                }
            }
        }
        Self { keys }
    }

    /// Key contributed by `state` sitting on `pos`
    #[inline]
    pub fn key(&self, pos: Position, state: CellState) -> u64 {
        self.keys[pos.row as usize][pos.col as usize][state.index()]
    }
}

static ZOBRIST: LazyLock<ZobristTable> = LazyLock::new(ZobristTable::new);

/// Process-wide key table
pub fn zobrist() -> &'static ZobristTable {
    &ZOBRIST
}

/// XOR of the keys of all 100 cells
pub fn position_hash(board: &Board) -> u64 {
    let table = zobrist();
    Board::squares().fold(0u64, |hash, pos| hash ^ table.key(pos, board.cell_at(pos)))
}

impl Board {
    /// 64-bit fingerprint of the cell contents
    #[inline]
    pub fn hash(&self) -> u64 {
        position_hash(self)
    }
}
