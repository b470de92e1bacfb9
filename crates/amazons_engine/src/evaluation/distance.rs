//! Move distance maps
//!
//! For every cell, the least number of moves one side needs to bring any of
//! its amazons there, walking through empty cells only. Queen distance
//! counts queen slides, king distance counts single steps. Both are plain
//! multi-source breadth-first searches.

use crate::board::Board;
use crate::constants::{BOARD_SIZE, DIRECTIONS};
use crate::move_gen::Ray;
use crate::types::{Color, Position};
use std::collections::VecDeque;

/// Distance of a cell no amazon of the side can reach
pub const UNREACHABLE: u8 = u8::MAX;

/// Per-cell move distances for one side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    dist: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl DistanceMap {
    fn unreached() -> Self {
        Self {
            dist: [[UNREACHABLE; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub fn get(&self, pos: Position) -> u8 {
        self.dist[pos.row as usize][pos.col as usize]
    }

    #[inline]
    fn set(&mut self, pos: Position, d: u8) {
        self.dist[pos.row as usize][pos.col as usize] = d;
    }

    /// Count of cells at exactly distance `d`
    pub fn count_at(&self, d: u8) -> usize {
        self.dist.iter().flatten().filter(|&&x| x == d).count()
    }
}

fn breadth_first<F, I>(board: &Board, color: Color, neighbours: F) -> DistanceMap
where
    F: Fn(Position) -> I,
    I: Iterator<Item = Position>,
{
    let mut map = DistanceMap::unreached();
    let mut queue = VecDeque::new();
    for piece in board.pieces(color) {
        map.set(piece, 0);
        queue.push_back(piece);
    }

    while let Some(pos) = queue.pop_front() {
        let next = map.get(pos) + 1;
        for cell in neighbours(pos) {
            if map.get(cell) == UNREACHABLE {
                map.set(cell, next);
                queue.push_back(cell);
            }
        }
    }
    map
}

/// Queen-move distances for `color`
pub fn queen_distances(board: &Board, color: Color) -> DistanceMap {
    breadth_first(board, color, move |pos| {
        DIRECTIONS
            .iter()
            .flat_map(move |&step| Ray::new(board, pos, step, None))
    })
}

/// King-move distances for `color`
pub fn king_distances(board: &Board, color: Color) -> DistanceMap {
    breadth_first(board, color, move |pos| {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| pos.offset(dr, dc))
            .filter(move |&cell| board.is_empty_at(cell))
    })
}
