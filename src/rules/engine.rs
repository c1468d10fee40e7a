//! The game state machine.
//!
//! A turn is two reveals followed by a resolve:
//! - Match: both cells are claimed by the current player, who goes again.
//! - Miss: both cells turn face down and the turn passes. The third miss in
//!   a row triggers a penalty reshuffle and resets both streaks.
//!
//! The engine owns the board, the AI's memory, scores and streaks. It never
//! renders or reads input; a controller drives it through the methods
//! below.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info};

use super::outcome::{GameResult, MatchOutcome, ReshuffleOutcome, TurnRecord};
use crate::ai::{self, AiMemory};
use crate::board::{Board, Coord, Symbol};
use crate::core::{
    GameError, GameRng, MoveRejection, PlayerId, PlayerMap, RandomSource, MISS_STREAK_PENALTY,
};

/// Complete game state plus the randomness it consumes.
#[derive(Clone, Debug)]
pub struct GameEngine<R = GameRng> {
    board: Board,
    memory: AiMemory,
    scores: PlayerMap<u32>,
    misses: PlayerMap<u32>,
    current: PlayerId,
    /// Cells revealed in the unresolved turn, in reveal order.
    pending: SmallVec<[Coord; 2]>,
    history: Vector<TurnRecord>,
    rng: R,
}

impl<R: RandomSource> GameEngine<R> {
    /// Deal a new game. The human moves first.
    pub fn new(mut rng: R) -> Self {
        let board = Board::deal(&mut rng);
        Self {
            board,
            memory: AiMemory::new(),
            scores: PlayerMap::with_value(0),
            misses: PlayerMap::with_value(0),
            current: PlayerId::Human,
            pending: SmallVec::new(),
            history: Vector::new(),
            rng,
        }
    }

    // === Moves ===

    /// Turn a cell face up for the current turn.
    ///
    /// The face is recorded in the AI's memory whoever reveals it.
    pub fn reveal_cell(&mut self, coord: Coord) -> Result<(), GameError> {
        self.check_revealable(coord)?;
        if self.pending.len() == 2 {
            return Err(reject(coord, MoveRejection::TurnFull));
        }

        let cell = self.board.cell_mut(coord);
        cell.visible = true;
        let symbol = cell.symbol;
        self.memory.observe(coord, symbol);
        self.pending.push(coord);

        debug!(player = %self.current, %coord, %symbol, "revealed");
        Ok(())
    }

    /// Settle the turn whose two reveals were `first` and `second`.
    ///
    /// Fails without touching state unless exactly these two cells were
    /// revealed this turn (in either order).
    pub fn resolve_turn(&mut self, first: Coord, second: Coord) -> Result<MatchOutcome, GameError> {
        if let Some(stray) = [first, second].into_iter().find(|c| !self.pending.contains(c)) {
            return Err(reject(stray, MoveRejection::NotRevealed));
        }
        if self.pending.len() != 2 || first == second {
            return Err(reject(second, MoveRejection::NotRevealed));
        }
        self.pending.clear();

        let player = self.current;
        let first_symbol = self.board.cell(first).symbol;
        let second_symbol = self.board.cell(second).symbol;

        let outcome = if first_symbol == second_symbol {
            self.board.cell_mut(first).claim(player);
            self.board.cell_mut(second).claim(player);
            self.scores[player] += 1;
            self.misses[player] = 0;
            info!(%player, symbol = %first_symbol, score = self.scores[player], "match");
            MatchOutcome::matched()
        } else {
            self.board.cell_mut(first).visible = false;
            self.board.cell_mut(second).visible = false;
            self.misses[player] += 1;
            info!(%player, streak = self.misses[player], "miss");

            let penalty = if self.misses[player] == MISS_STREAK_PENALTY {
                let result = self.penalty_reshuffle(player);
                // Both streaks restart even when no pair could be returned.
                self.misses.fill(0);
                Some(result)
            } else {
                None
            };
            self.current = player.opponent();
            MatchOutcome::missed(penalty)
        };

        self.history.push_back(TurnRecord {
            turn: self.history.len() as u32 + 1,
            player,
            cells: [(first, first_symbol), (second, second_symbol)],
            outcome,
        });
        Ok(outcome)
    }

    /// Reveal both cells and resolve, or change nothing.
    pub fn play_turn(&mut self, first: Coord, second: Coord) -> Result<MatchOutcome, GameError> {
        if !self.pending.is_empty() {
            return Err(reject(first, MoveRejection::TurnFull));
        }
        self.check_revealable(first)?;
        self.check_revealable(second)?;
        if first == second {
            return Err(reject(second, MoveRejection::AlreadyVisible));
        }

        self.reveal_cell(first)?;
        self.reveal_cell(second)?;
        self.resolve_turn(first, second)
    }

    /// Return one of `player`'s claimed pairs to play and scramble the
    /// unclaimed cells.
    ///
    /// The pair is chosen uniformly among the complete pairs `player`
    /// owns. The player keeps the point it scored for that pair. Afterwards
    /// every cell is face down and the AI's memory is empty. Without a
    /// complete pair this is a no-op.
    pub fn penalty_reshuffle(&mut self, player: PlayerId) -> ReshuffleOutcome {
        let mut groups: Vec<(Symbol, SmallVec<[Coord; 2]>)> = Vec::new();
        for coord in self.board.matched_by(player) {
            let symbol = self.board.cell(coord).symbol;
            match groups.iter_mut().find(|(s, _)| *s == symbol) {
                Some((_, coords)) => coords.push(coord),
                None => groups.push((symbol, SmallVec::from_elem(coord, 1))),
            }
        }
        groups.retain(|(_, coords)| coords.len() == 2);

        if groups.is_empty() {
            info!(%player, "penalty reshuffle: no matched pair to return");
            return ReshuffleOutcome::NoRemovablePair;
        }

        let (symbol, coords) = &groups[self.rng.pick(groups.len())];
        let symbol = *symbol;
        for &coord in coords {
            self.board.cell_mut(coord).release();
        }

        self.board.redistribute_unmatched(&mut self.rng);
        self.board.hide_all();
        self.pending.clear();
        self.memory.clear();

        info!(%player, %symbol, "penalty reshuffle: pair returned to the board");
        ReshuffleOutcome::Returned(symbol)
    }

    /// Pick the AI's two cells without revealing them.
    ///
    /// Returns `None` once fewer than two face-down unmatched cells remain.
    pub fn ai_turn(&mut self) -> Option<(Coord, Coord)> {
        ai::select_pair(&self.board, &self.memory, &mut self.rng)
    }

    fn check_revealable(&self, coord: Coord) -> Result<(), GameError> {
        if self.is_over() {
            return Err(reject(coord, MoveRejection::GameOver));
        }
        let cell = self.board.cell(coord);
        if cell.matched {
            Err(reject(coord, MoveRejection::AlreadyMatched))
        } else if cell.visible {
            Err(reject(coord, MoveRejection::AlreadyVisible))
        } else {
            Ok(())
        }
    }
}

impl<R> GameEngine<R> {
    // === Queries ===

    /// True once every cell is matched.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_cleared()
    }

    /// Winner or draw once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let (human, ai) = self.scores();
        Some(match human.cmp(&ai) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::Human),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Ai),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    /// `(human, ai)` pair counts.
    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        (self.scores[PlayerId::Human], self.scores[PlayerId::Ai])
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Current miss streak of `player`.
    #[must_use]
    pub fn misses(&self, player: PlayerId) -> u32 {
        self.misses[player]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn memory(&self) -> &AiMemory {
        &self.memory
    }

    /// Resolved turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Cells revealed in the unresolved turn.
    #[must_use]
    pub fn pending(&self) -> &[Coord] {
        &self.pending
    }

    #[must_use]
    pub fn symbol_at(&self, coord: Coord) -> Symbol {
        self.board.cell(coord).symbol
    }

    #[must_use]
    pub fn is_visible(&self, coord: Coord) -> bool {
        self.board.cell(coord).visible
    }

    #[must_use]
    pub fn is_matched(&self, coord: Coord) -> bool {
        self.board.cell(coord).matched
    }

    #[must_use]
    pub fn owner_at(&self, coord: Coord) -> Option<PlayerId> {
        self.board.cell(coord).owner
    }
}

fn reject(coord: Coord, reason: MoveRejection) -> GameError {
    GameError::invalid_move(coord.row(), coord.col(), reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedSource, CELL_COUNT, PAIR_COUNT};

    /// Unshuffled deal: cell `i` and cell `i + 8` share a face.
    fn fixed_game() -> GameEngine<FixedSource> {
        GameEngine::new(FixedSource::new())
    }

    fn at(index: usize) -> Coord {
        Coord::from_index(index)
    }

    /// Apple vs Banana in the unshuffled deal.
    fn miss(game: &mut GameEngine<FixedSource>) -> MatchOutcome {
        game.play_turn(at(0), at(1)).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = GameEngine::new(GameRng::new(42));

        assert_eq!(game.current_player(), PlayerId::Human);
        assert_eq!(game.scores(), (0, 0));
        assert_eq!(game.misses(PlayerId::Human), 0);
        assert!(game.memory().is_empty());
        assert!(!game.is_over());
        assert_eq!(game.result(), None);
        assert_eq!(game.board().symbol_counts(), [2; PAIR_COUNT]);
        for coord in Coord::all() {
            assert!(!game.is_visible(coord));
            assert!(!game.is_matched(coord));
            assert_eq!(game.owner_at(coord), None);
        }
    }

    #[test]
    fn test_reveal_records_memory() {
        let mut game = fixed_game();
        game.reveal_cell(at(5)).unwrap();

        assert!(game.is_visible(at(5)));
        assert_eq!(game.memory().get(at(5)), Some(game.symbol_at(at(5))));
        assert_eq!(game.pending(), &[at(5)]);
    }

    #[test]
    fn test_reveal_rejections() {
        let mut game = fixed_game();
        game.play_turn(at(0), at(8)).unwrap();

        let err = game.reveal_cell(at(0)).unwrap_err();
        assert_eq!(err.reason(), MoveRejection::AlreadyMatched);

        game.reveal_cell(at(1)).unwrap();
        let err = game.reveal_cell(at(1)).unwrap_err();
        assert_eq!(err.reason(), MoveRejection::AlreadyVisible);

        game.reveal_cell(at(2)).unwrap();
        let err = game.reveal_cell(at(3)).unwrap_err();
        assert_eq!(err.reason(), MoveRejection::TurnFull);
        assert!(!game.is_visible(at(3)));
    }

    #[test]
    fn test_resolve_requires_both_reveals() {
        let mut game = fixed_game();
        game.reveal_cell(at(0)).unwrap();

        let err = game.resolve_turn(at(0), at(8)).unwrap_err();
        assert_eq!(err.reason(), MoveRejection::NotRevealed);

        game.reveal_cell(at(8)).unwrap();
        let err = game.resolve_turn(at(0), at(0)).unwrap_err();
        assert_eq!(err.reason(), MoveRejection::NotRevealed);

        // Nothing was consumed by the failed calls.
        let outcome = game.resolve_turn(at(8), at(0)).unwrap();
        assert!(outcome.matched);
    }

    #[test]
    fn test_match_keeps_turn() {
        let mut game = fixed_game();
        let outcome = game.play_turn(at(3), at(11)).unwrap();

        assert_eq!(outcome, MatchOutcome::matched());
        assert_eq!(game.current_player(), PlayerId::Human);
        assert_eq!(game.scores(), (1, 0));
        assert_eq!(game.owner_at(at(3)), Some(PlayerId::Human));
        assert_eq!(game.owner_at(at(11)), Some(PlayerId::Human));
    }

    #[test]
    fn test_miss_passes_turn_and_hides() {
        let mut game = fixed_game();
        let outcome = miss(&mut game);

        assert!(!outcome.matched);
        assert!(!outcome.reshuffled);
        assert_eq!(game.current_player(), PlayerId::Ai);
        assert_eq!(game.misses(PlayerId::Human), 1);
        assert!(!game.is_visible(at(0)));
        assert!(!game.is_visible(at(1)));
        assert_eq!(game.memory().len(), 2);
    }

    #[test]
    fn test_match_resets_own_streak() {
        let mut game = fixed_game();
        miss(&mut game); // human 1
        miss(&mut game); // ai 1
        game.play_turn(at(2), at(10)).unwrap();

        assert_eq!(game.misses(PlayerId::Human), 0);
        assert_eq!(game.misses(PlayerId::Ai), 1);
    }

    #[test]
    fn test_third_miss_without_pair_still_resets() {
        let mut game = fixed_game();
        for _ in 0..4 {
            miss(&mut game);
        }
        assert_eq!(game.misses(PlayerId::Human), 2);
        assert_eq!(game.misses(PlayerId::Ai), 2);

        let outcome = miss(&mut game);
        assert_eq!(outcome.penalty, Some(ReshuffleOutcome::NoRemovablePair));
        assert!(!outcome.reshuffled);
        assert_eq!(game.misses(PlayerId::Human), 0);
        assert_eq!(game.misses(PlayerId::Ai), 0);
        assert_eq!(game.current_player(), PlayerId::Ai);
        // No reshuffle happened, so the AI still remembers.
        assert_eq!(game.memory().len(), 2);
    }

    #[test]
    fn test_penalty_returns_pair() {
        let mut game = fixed_game();
        game.play_turn(at(4), at(12)).unwrap();
        game.reveal_cell(at(5)).unwrap();

        let outcome = game.penalty_reshuffle(PlayerId::Human);

        assert_eq!(outcome, ReshuffleOutcome::Returned(Symbol::Strawberry));
        assert!(!game.is_matched(at(4)));
        assert_eq!(game.owner_at(at(12)), None);
        assert_eq!(game.score(PlayerId::Human), 1);
        assert!(game.memory().is_empty());
        assert!(game.pending().is_empty());
        assert!(Coord::all().all(|c| !game.is_visible(c)));
    }

    #[test]
    fn test_penalty_picks_among_owned_pairs() {
        // Groups in row-major order: Apple (0, 8) then Banana (1, 9).
        let mut game = GameEngine::new(FixedSource::with_picks([1]));
        game.play_turn(at(0), at(8)).unwrap();
        game.play_turn(at(1), at(9)).unwrap();
        assert_eq!(game.scores(), (2, 0));

        let outcome = game.penalty_reshuffle(PlayerId::Human);

        assert_eq!(outcome, ReshuffleOutcome::Returned(Symbol::Banana));
        for c in [at(1), at(9)] {
            assert!(!game.is_matched(c));
            assert_eq!(game.owner_at(c), None);
        }
        for c in [at(0), at(8)] {
            assert!(game.is_matched(c));
            assert_eq!(game.owner_at(c), Some(PlayerId::Human));
            assert_eq!(game.symbol_at(c), Symbol::Apple);
        }
        assert_eq!(game.scores(), (2, 0));
        assert_eq!(game.board().symbol_counts(), [2; PAIR_COUNT]);
    }

    #[test]
    fn test_penalty_ignores_other_player() {
        let mut game = fixed_game();
        game.play_turn(at(4), at(12)).unwrap();

        assert_eq!(game.penalty_reshuffle(PlayerId::Ai), ReshuffleOutcome::NoRemovablePair);
        assert!(game.is_matched(at(4)));
    }

    #[test]
    fn test_history_records_turns() {
        let mut game = fixed_game();
        miss(&mut game);
        game.play_turn(at(6), at(14)).unwrap();

        let history: Vec<_> = game.history().iter().cloned().collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].turn, 1);
        assert_eq!(history[0].player, PlayerId::Human);
        assert_eq!(history[0].cells, [(at(0), Symbol::Apple), (at(1), Symbol::Banana)]);
        assert_eq!(history[1].player, PlayerId::Ai);
        assert!(history[1].outcome.matched);
    }

    #[test]
    fn test_play_turn_is_atomic() {
        let mut game = fixed_game();
        game.play_turn(at(0), at(8)).unwrap();

        let err = game.play_turn(at(1), at(0)).unwrap_err();
        assert_eq!(err.reason(), MoveRejection::AlreadyMatched);
        assert!(!game.is_visible(at(1)));
        assert!(game.pending().is_empty());

        let err = game.play_turn(at(1), at(1)).unwrap_err();
        assert_eq!(err.reason(), MoveRejection::AlreadyVisible);
        assert!(game.pending().is_empty());
    }

    #[test]
    fn test_human_clears_board() {
        let mut game = fixed_game();
        for i in 0..PAIR_COUNT {
            game.play_turn(at(i), at(i + PAIR_COUNT)).unwrap();
        }

        assert!(game.is_over());
        assert_eq!(game.scores(), (PAIR_COUNT as u32, 0));
        assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::Human)));
        assert_eq!(game.ai_turn(), None);

        let err = game.reveal_cell(at(CELL_COUNT - 1)).unwrap_err();
        assert_eq!(err.reason(), MoveRejection::GameOver);
    }
}
