//! Legal move generation
//!
//! Enumerates every legal move of one color. Each amazon is scanned on its
//! own worker thread; workers only read the board and hand their batch to a
//! bounded channel sized to the number of amazons, so no worker ever waits
//! on a full channel. The caller drains the channel once every worker has
//! dropped its sender, then sorts the merged list so the result does not
//! depend on thread scheduling.
//!
//! The board must not be mutated while generation is in flight. The shared
//! borrow held by the scoped threads enforces this at compile time.

pub mod sliding;

use crate::board::Board;
use crate::types::*;
use crossbeam_channel::bounded;
use std::thread;
use tracing::{trace, warn};

pub use sliding::{line_direction, piece_moves, Ray};

/// Generate all legal moves for `color`, sorted by `(from, to, arrow)`
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    let pieces = board.pieces(color);
    if pieces.is_empty() {
        return Vec::new();
    }

    let (tx, rx) = bounded::<Vec<Move>>(pieces.len());

    let mut moves: Vec<Move> = thread::scope(|scope| {
        for &piece in &pieces {
            let tx = tx.clone();
            scope.spawn(move || {
                let batch = piece_moves(board, piece);
                if tx.send(batch).is_err() {
                    warn!("[MOVEGEN] Collector gone before {} finished", piece);
                }
            });
        }
        // Only worker senders remain, so the drain ends when the last one finishes
        drop(tx);
        rx.iter().flatten().collect()
    });

    moves.sort_unstable();
    trace!("[MOVEGEN] {} has {} moves", color, moves.len());
    moves
}

/// Single-threaded variant, same output as [`generate_moves`]
pub fn generate_moves_sequential(board: &Board, color: Color) -> Vec<Move> {
    let mut moves: Vec<Move> = board
        .pieces(color)
        .into_iter()
        .flat_map(|piece| piece_moves(board, piece))
        .collect();
    moves.sort_unstable();
    moves
}

impl Board {
    /// All legal moves for `color`, sorted
    pub fn enumerate(&self, color: Color) -> Vec<Move> {
        generate_moves(self, color)
    }
}
