//! Transposition table
//!
//! Caches negamax results keyed by `(fingerprint, side to move)`. One table
//! lives for one search call; nothing is shared across threads.

use std::collections::HashMap;

/// How a stored score relates to the true value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Fail-high: true score is at least this
    Lower,
    /// Fail-low: true score is at most this
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TtEntry {
    pub depth: u32,
    pub score: f64,
    pub bound: Bound,
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<(u64, bool), TtEntry>,
    pub hits: u64,
    pub stores: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry searched at least `depth` plies deep
    pub fn probe(&mut self, hash: u64, is_max_player: bool, depth: u32) -> Option<TtEntry> {
        let entry = self
            .entries
            .get(&(hash, is_max_player))
            .filter(|entry| entry.depth >= depth)
            .copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    /// Store, keeping the deeper of old and new
    pub fn store(&mut self, hash: u64, is_max_player: bool, entry: TtEntry) {
        self.stores += 1;
        self.entries
            .entry((hash, is_max_player))
            .and_modify(|old| {
                if entry.depth >= old.depth {
                    *old = entry;
                }
            })
            .or_insert(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_respects_depth() {
        let mut tt = TranspositionTable::new();
        assert!(tt.is_empty());
        tt.store(
            42,
            true,
            TtEntry {
                depth: 2,
                score: 1.5,
                bound: Bound::Exact,
            },
        );
        assert!(tt.probe(42, true, 2).is_some());
        assert!(tt.probe(42, true, 3).is_none());
        assert!(tt.probe(42, false, 1).is_none());
        assert_eq!(tt.hits, 1);
    }

    #[test]
    fn test_shallow_store_does_not_replace_deep() {
        let mut tt = TranspositionTable::new();
        let deep = TtEntry {
            depth: 4,
            score: 3.0,
            bound: Bound::Lower,
        };
        tt.store(7, false, deep);
        tt.store(
            7,
            false,
            TtEntry {
                depth: 1,
                score: -1.0,
                bound: Bound::Exact,
            },
        );
        assert_eq!(tt.probe(7, false, 1), Some(deep));
        assert_eq!(tt.len(), 1);
        assert_eq!(tt.stores, 2);
    }
}
