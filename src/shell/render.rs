//! Text rendering of the board.
//!
//! ```text
//!     0   1   2   3
//!   +-----+-----+-----+-----+
//! 0 | 🍎 | ■ | ■ | ■ |
//!   +-----+-----+-----+-----+
//! ```
//!
//! Face-up cells (revealed this turn or matched) show their glyph,
//! everything else shows `■`.

use std::fmt::{self, Write};

use crate::board::{Board, Coord};
use crate::core::BOARD_SIZE;

const HIDDEN: &str = "■";

/// Write the board grid, one line per row plus separators.
pub fn write_board(out: &mut impl Write, board: &Board) -> fmt::Result {
    let header: Vec<String> = (0..BOARD_SIZE).map(|c| c.to_string()).collect();
    writeln!(out, "    {}", header.join("   "))?;
    let separator = format!("  +{}+", vec!["-----"; BOARD_SIZE].join("+"));
    writeln!(out, "{separator}")?;

    for row in 0..BOARD_SIZE {
        write!(out, "{row} |")?;
        for col in 0..BOARD_SIZE {
            let cell = board.cell(Coord::from_index(row * BOARD_SIZE + col));
            if cell.is_face_up() {
                write!(out, " {} |", cell.symbol)?;
            } else {
                write!(out, " {HIDDEN} |")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{separator}")?;
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(f, self)
    }
}
