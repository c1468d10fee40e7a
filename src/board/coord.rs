//! Board coordinates.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, MoveRejection, BOARD_SIZE, CELL_COUNT};

/// A validated position on the board.
///
/// Rows and columns are 0-based. A `Coord` can only be built in bounds,
/// so every holder may index the board with it directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, rejecting positions off the board.
    ///
    /// ```
    /// use purble_pairs::board::Coord;
    ///
    /// let c = Coord::new(2, 3).unwrap();
    /// assert_eq!((c.row(), c.col()), (2, 3));
    /// assert!(Coord::new(4, 0).is_err());
    /// ```
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(GameError::invalid_move(row, col, MoveRejection::OutOfBounds))
        }
    }

    /// Coordinate for a row-major cell index.
    ///
    /// Panics if `index >= CELL_COUNT`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "cell index {index} out of range");
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Every coordinate, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).map(Coord::from_index)
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = GameError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row(), coord.col())
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
