//! AI move selection.
//!
//! Greedy: take a remembered pair when one exists, otherwise flip two
//! face-down cells at random.

use tracing::debug;

use super::AiMemory;
use crate::board::{Board, Coord};
use crate::core::RandomSource;

/// Choose the two cells the AI will reveal.
///
/// Both cells are unmatched and face down, so the choice can be revealed
/// even while a reveal of this turn is still pending. Returns `None` only
/// when fewer than two such cells are left. Reads the board and memory
/// without changing them.
pub fn select_pair<R: RandomSource>(
    board: &Board,
    memory: &AiMemory,
    rng: &mut R,
) -> Option<(Coord, Coord)> {
    let face_up = |coord: Coord| {
        let cell = board.cell(coord);
        cell.matched || cell.visible
    };
    if let Some(pair) = memory.known_pair(face_up) {
        debug!(first = %pair.0, second = %pair.1, "AI recalls a pair");
        return Some(pair);
    }

    let mut candidates = board.hidden_unmatched();
    if candidates.len() < 2 {
        return None;
    }
    rng.shuffle(&mut candidates);
    debug!(first = %candidates[0], second = %candidates[1], "AI guesses");
    Some((candidates[0], candidates[1]))
}
