//! What the AI has seen.
//!
//! Every reveal, by either seat, is recorded as `coord -> symbol`. The
//! memory only grows until a penalty reshuffle scrambles the board, at which
//! point it is wiped.
//!
//! Iteration follows first-observation order. Re-observing a coordinate
//! updates its symbol without moving it, so "the first remembered pair" is
//! well defined.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::board::{Coord, Symbol};
use crate::core::CELL_COUNT;

/// Remembered faces by position.
#[derive(Clone, Debug, Default)]
pub struct AiMemory {
    symbols: FxHashMap<Coord, Symbol>,
    order: SmallVec<[Coord; CELL_COUNT]>,
}

impl AiMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the face seen at `coord`.
    pub fn observe(&mut self, coord: Coord, symbol: Symbol) {
        if self.symbols.insert(coord, symbol).is_none() {
            self.order.push(coord);
        }
    }

    /// The face remembered at `coord`, if any.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Symbol> {
        self.symbols.get(&coord).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.symbols.clear();
        self.order.clear();
    }

    /// Iterate in first-observation order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Symbol)> + '_ {
        self.order.iter().map(|coord| (*coord, self.symbols[coord]))
    }

    /// First pair of distinct remembered positions with equal faces, both
    /// still available (neither rejected by `skip`).
    pub fn known_pair(&self, skip: impl Fn(Coord) -> bool) -> Option<(Coord, Coord)> {
        for (first, symbol) in self.iter() {
            if skip(first) {
                continue;
            }
            let partner = self
                .iter()
                .find(|&(other, s)| other != first && s == symbol && !skip(other));
            if let Some((second, _)) = partner {
                return Some((first, second));
            }
        }
        None
    }
}
