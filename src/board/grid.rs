//! The 4×4 board.
//!
//! Cells are stored row-major. The symbol multiset (every face exactly
//! twice) never changes after dealing; the penalty reshuffle only moves
//! faces between unmatched cells.

use super::{Cell, Coord, Symbol};
use crate::core::{PlayerId, RandomSource, CELL_COUNT, PAIR_COUNT};

/// The playing grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Deal a fresh board: every face twice, shuffled, all cells face down.
    pub fn deal<R: RandomSource>(rng: &mut R) -> Self {
        let mut symbols: Vec<Symbol> = Symbol::ALL.iter().chain(Symbol::ALL.iter()).copied().collect();
        rng.shuffle(&mut symbols);

        let board = Self {
            cells: std::array::from_fn(|i| Cell::new(symbols[i])),
        };
        board.assert_pairs_intact();
        board
    }

    /// Get a cell.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[coord.index()]
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        &mut self.cells[coord.index()]
    }

    /// Iterate over (Coord, &Cell) pairs, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Coord::from_index(i), cell))
    }

    /// How many cells carry each face, indexed by [`Symbol::index`].
    #[must_use]
    pub fn symbol_counts(&self) -> [usize; PAIR_COUNT] {
        let mut counts = [0; PAIR_COUNT];
        for cell in &self.cells {
            counts[cell.symbol.index()] += 1;
        }
        counts
    }

    /// All cells matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.matched)
    }

    /// Matched cells owned by `player`, row-major.
    pub fn matched_by(&self, player: PlayerId) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(move |(_, cell)| cell.matched && cell.owner == Some(player))
            .map(|(coord, _)| coord)
    }

    /// Unmatched cells that are face down, row-major.
    #[must_use]
    pub fn hidden_unmatched(&self) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| !cell.matched && !cell.visible)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Turn every cell face down.
    pub(crate) fn hide_all(&mut self) {
        for cell in &mut self.cells {
            cell.visible = false;
        }
    }

    /// Shuffle the faces of all unmatched cells among those same cells.
    ///
    /// Matched cells keep their faces and positions.
    pub(crate) fn redistribute_unmatched<R: RandomSource>(&mut self, rng: &mut R) {
        let positions: Vec<usize> = (0..CELL_COUNT).filter(|&i| !self.cells[i].matched).collect();
        let mut symbols: Vec<Symbol> = positions.iter().map(|&i| self.cells[i].symbol).collect();
        rng.shuffle(&mut symbols);

        for (i, symbol) in positions.into_iter().zip(symbols) {
            self.cells[i].symbol = symbol;
        }
        self.assert_pairs_intact();
    }

    /// Panics unless every face appears exactly twice.
    pub(crate) fn assert_pairs_intact(&self) {
        let counts = self.symbol_counts();
        assert!(
            counts.iter().all(|&n| n == 2),
            "symbol multiset corrupted: {counts:?}"
        );
    }

    #[cfg(test)]
    pub(crate) fn from_symbols(symbols: [Symbol; CELL_COUNT]) -> Self {
        Self {
            cells: symbols.map(Cell::new),
        }
    }
}
