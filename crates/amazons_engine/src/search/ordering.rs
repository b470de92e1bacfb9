//! Move ordering for better alpha-beta pruning
//!
//! Root moves are sorted by the static score of the position they lead to,
//! best first for the side to move. Scoring thousands of children at every
//! interior node costs more than it saves, so interior nodes use killer
//! moves instead: the last two moves that refuted a sibling at the same ply
//! are tried first when they are legal.

use crate::adapter::{EvalOptions, SearchGame};

/// Sort `moves` best-first for the side to move at `step`
pub(crate) fn order_moves<G: SearchGame>(
    game: &mut G,
    moves: &mut Vec<G::Move>,
    step: u32,
    is_max_player: bool,
) {
    let sign = if is_max_player { 1.0 } else { -1.0 };
    let child = EvalOptions {
        step: step + 1,
        is_max_player: !is_max_player,
    };

    let mut scored: Vec<(f64, G::Move)> = moves
        .iter()
        .map(|&mv| {
            game.apply(mv);
            let score = sign * game.evaluate(child);
            game.undo(mv);
            (score, mv)
        })
        .collect();

    // Stable sort keeps generator order among equal scores
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    *moves = scored.into_iter().map(|(_, mv)| mv).collect();
}

/// Two killer slots per ply, newest first
#[derive(Debug)]
pub(crate) struct Killers<M> {
    slots: Vec<[Option<M>; 2]>,
}

impl<M> Default for Killers<M> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<M: Copy + Eq> Killers<M> {
    /// Remember `mv` as the latest refutation at `ply`
    pub fn record(&mut self, ply: u32, mv: M) {
        let ply = ply as usize;
        if self.slots.len() <= ply {
            self.slots.resize(ply + 1, [None, None]);
        }
        let slot = &mut self.slots[ply];
        if slot[0] != Some(mv) {
            slot[1] = slot[0];
            slot[0] = Some(mv);
        }
    }

    /// Move the killers of `ply` that appear in `moves` to the front
    pub fn promote(&self, ply: u32, moves: &mut [M]) {
        let Some(slot) = self.slots.get(ply as usize) else {
            return;
        };
        let mut front = 0;
        for killer in slot.iter().flatten() {
            if let Some(i) = moves[front..].iter().position(|mv| mv == killer) {
                moves.swap(front, front + i);
                front += 1;
            }
        }
    }
}
