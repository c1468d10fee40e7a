//! Board model: coordinates, faces, cells and the grid itself.

pub mod coord;
pub mod symbol;
pub mod cell;
pub mod grid;

pub use coord::Coord;
pub use symbol::Symbol;
pub use cell::Cell;
pub use grid::Board;
