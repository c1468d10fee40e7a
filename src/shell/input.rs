//! Parsing typed moves.

use thiserror::Error;

use crate::board::Coord;
use crate::core::GameError;

/// A line of input that could not be used as a move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected `row col`, got {0:?}")]
    Malformed(String),
    #[error(transparent)]
    Move(#[from] GameError),
}

/// Parse `"row col"` into a coordinate.
///
/// ```
/// use purble_pairs::shell::parse_coord;
///
/// let c = parse_coord(" 1 3 ").unwrap();
/// assert_eq!((c.row(), c.col()), (1, 3));
/// assert!(parse_coord("1,3").is_err());
/// ```
pub fn parse_coord(line: &str) -> Result<Coord, InputError> {
    let malformed = || InputError::Malformed(line.trim().to_string());

    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let row: usize = row.parse().map_err(|_| malformed())?;
    let col: usize = col.parse().map_err(|_| malformed())?;

    Ok(Coord::new(row, col)?)
}
