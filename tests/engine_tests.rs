//! End-to-end engine scenarios on scripted boards.
//!
//! `FixedSource` deals the board unshuffled: cell `i` (row-major) holds
//! `Symbol::ALL[i % 8]`, so cells `i` and `i + 8` always form a pair.

use purble_pairs::{
    Coord, FixedSource, GameEngine, GameResult, MoveRejection, PlayerId, ReshuffleOutcome, Symbol,
    PAIR_COUNT,
};

fn at(index: usize) -> Coord {
    Coord::from_index(index)
}

fn fixed_game() -> GameEngine<FixedSource> {
    GameEngine::new(FixedSource::new())
}

/// Reveal both cells and resolve, the way a controller does.
fn turn(game: &mut GameEngine<FixedSource>, a: usize, b: usize) -> purble_pairs::MatchOutcome {
    game.reveal_cell(at(a)).unwrap();
    game.reveal_cell(at(b)).unwrap();
    game.resolve_turn(at(a), at(b)).unwrap()
}

// =============================================================================
// Matching
// =============================================================================

/// Human finds a known pair: scored, claimed, and keeps the turn.
#[test]
fn test_human_match_on_fixed_board() {
    let mut game = fixed_game();
    assert_eq!(game.symbol_at(at(1)), game.symbol_at(at(9)));

    let outcome = turn(&mut game, 1, 9);

    assert!(outcome.matched);
    assert!(!outcome.reshuffled);
    assert_eq!(game.scores(), (1, 0));
    assert_eq!(game.current_player(), PlayerId::Human);
    assert!(game.is_matched(at(1)) && game.is_matched(at(9)));
    assert_eq!(game.owner_at(at(9)), Some(PlayerId::Human));
}

/// Turn passes only on a miss.
#[test]
fn test_turn_alternation() {
    let mut game = fixed_game();

    turn(&mut game, 0, 1);
    assert_eq!(game.current_player(), PlayerId::Ai);

    turn(&mut game, 2, 10);
    assert_eq!(game.current_player(), PlayerId::Ai);

    turn(&mut game, 0, 1);
    assert_eq!(game.current_player(), PlayerId::Human);
}

/// Invalid reveals leave the game untouched.
#[test]
fn test_invalid_moves_are_recoverable() {
    let mut game = fixed_game();
    turn(&mut game, 0, 8);

    let err = game.reveal_cell(at(8)).unwrap_err();
    assert_eq!(err.reason(), MoveRejection::AlreadyMatched);

    game.reveal_cell(at(3)).unwrap();
    let err = game.reveal_cell(at(3)).unwrap_err();
    assert_eq!(err.reason(), MoveRejection::AlreadyVisible);

    // The turn can still be completed normally.
    game.reveal_cell(at(11)).unwrap();
    assert!(game.resolve_turn(at(3), at(11)).unwrap().matched);
    assert_eq!(game.scores(), (2, 0));
}

// =============================================================================
// AI
// =============================================================================

/// Once the AI has seen both halves of a pair it takes exactly that pair.
#[test]
fn test_ai_takes_remembered_pair() {
    let mut game = fixed_game();

    turn(&mut game, 2, 4); // human: Grape, Strawberry
    turn(&mut game, 10, 5); // ai: Grape, Pineapple
    turn(&mut game, 0, 1); // human: Apple, Banana
    assert_eq!(game.current_player(), PlayerId::Ai);

    let (a, b) = game.ai_turn().unwrap();
    assert_eq!((a, b), (at(2), at(10)));
    assert_eq!(game.symbol_at(a), Symbol::Grape);

    // Selecting does not reveal anything.
    assert!(!game.is_visible(a));
    assert!(game.pending().is_empty());

    assert!(turn(&mut game, 2, 10).matched);
    assert_eq!(game.scores(), (0, 1));
}

/// Without a usable memory the AI guesses among face-down unmatched cells.
#[test]
fn test_ai_guess_skips_matched_cells() {
    let mut game = fixed_game();
    turn(&mut game, 0, 8);
    turn(&mut game, 1, 9);
    turn(&mut game, 2, 3); // miss, AI to move

    let (a, b) = game.ai_turn().unwrap();
    for c in [a, b] {
        assert!(!game.is_matched(c));
    }
    assert_eq!((a, b), (at(2), at(3)));
}

// =============================================================================
// Penalty reshuffle
// =============================================================================

/// Three AI misses in a row cost the AI its claimed pair and wipe its memory.
#[test]
fn test_ai_miss_streak_triggers_reshuffle() {
    let mut game = fixed_game();

    turn(&mut game, 0, 1); // human miss (h=1)
    assert!(turn(&mut game, 2, 10).matched); // ai claims Grape
    turn(&mut game, 0, 1); // ai miss (a=1)

    assert!(turn(&mut game, 3, 11).matched); // human match (h=0)
    turn(&mut game, 0, 1); // human miss (h=1)
    turn(&mut game, 0, 1); // ai miss (a=2)

    assert!(turn(&mut game, 4, 12).matched); // human match (h=0)
    turn(&mut game, 0, 1); // human miss (h=1)

    let ai_cells_before = game.board().matched_by(PlayerId::Ai).count();
    assert_eq!(ai_cells_before, 2);
    assert!(!game.memory().is_empty());

    let outcome = turn(&mut game, 0, 1); // ai miss (a=3)

    assert!(outcome.reshuffled);
    assert_eq!(outcome.penalty, Some(ReshuffleOutcome::Returned(Symbol::Grape)));
    assert_eq!(game.board().matched_by(PlayerId::Ai).count(), ai_cells_before - 2);
    assert!(game.memory().is_empty());
    assert_eq!(game.misses(PlayerId::Human), 0);
    assert_eq!(game.misses(PlayerId::Ai), 0);
    assert_eq!(game.current_player(), PlayerId::Human);
    // The returned pair keeps its point.
    assert_eq!(game.scores(), (2, 1));

    // The human's pairs are untouched.
    assert_eq!(game.board().matched_by(PlayerId::Human).count(), 4);
    assert!(game.board().cells().all(|(_, cell)| !cell.visible));
    assert_eq!(game.board().symbol_counts(), [2; PAIR_COUNT]);
}

/// A penalty with nothing to return changes nothing but the streaks.
#[test]
fn test_miss_streak_without_pairs() {
    let mut game = fixed_game();
    for _ in 0..5 {
        turn(&mut game, 0, 1);
    }

    let last = game.history().back().cloned().unwrap();
    assert_eq!(last.player, PlayerId::Human);
    assert_eq!(last.outcome.penalty, Some(ReshuffleOutcome::NoRemovablePair));
    assert!(!last.outcome.reshuffled);
    assert_eq!(game.misses(PlayerId::Human), 0);
    assert_eq!(game.misses(PlayerId::Ai), 0);
}

// =============================================================================
// Termination
// =============================================================================

/// Play every pair; the game ends with all eight pairs scored.
#[test]
fn test_game_to_completion() {
    let mut game = fixed_game();

    // Human takes four pairs, misses, then the AI takes the rest.
    for i in 0..4 {
        turn(&mut game, i, i + PAIR_COUNT);
    }
    turn(&mut game, 4, 5);
    for i in 4..PAIR_COUNT {
        assert!(!game.is_over());
        turn(&mut game, i, i + PAIR_COUNT);
    }

    assert!(game.is_over());
    let (human, ai) = game.scores();
    assert_eq!(human + ai, PAIR_COUNT as u32);
    assert_eq!(game.result(), Some(GameResult::Draw));
}

/// The turn history serializes for replay logs.
#[test]
fn test_history_serializes() {
    let mut game = fixed_game();
    turn(&mut game, 0, 1);
    turn(&mut game, 5, 13);

    let json = serde_json::to_string(game.history()).unwrap();
    let records: Vec<purble_pairs::TurnRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].player, PlayerId::Ai);
    assert!(records[1].outcome.matched);
    assert_eq!(records[1].cells[0], (at(5), Symbol::Pineapple));
}
