//! Rule scenarios and golden board snapshots

use hexreversi_core::{CellColor, GameEngine, GameStatus, Hex, ReversiError, TextView};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn render(engine: &GameEngine) -> String {
    TextView::new(engine).render().unwrap()
}

fn rows(lines: &[&str]) -> String {
    lines.join("\n")
}

fn place(engine: &mut GameEngine, color: CellColor, q: i32, r: i32) {
    engine
        .place_tile(color, Hex::new(q, r))
        .unwrap_or_else(|e| panic!("{} at ({}, {}) rejected: {}", color, q, r, e));
}

// ============================================================================
// PLACEMENT SCENARIOS
// ============================================================================

#[test]
fn test_size_5_opening() {
    let mut engine = GameEngine::new(5).unwrap();
    assert_eq!(engine.contents_of_cell(Hex::new(0, -1)).unwrap(), CellColor::White);
    assert_eq!(engine.contents_of_cell(Hex::new(1, -1)).unwrap(), CellColor::Black);

    place(&mut engine, CellColor::Black, 1, -2);
    assert_eq!(engine.contents_of_cell(Hex::new(1, -2)).unwrap(), CellColor::Black);
    assert_eq!(engine.contents_of_cell(Hex::new(0, -1)).unwrap(), CellColor::Black);

    // (1, -3) lies outside a radius-2 board
    let err = engine.place_tile(CellColor::White, Hex::new(1, -3)).unwrap_err();
    assert!(matches!(err, ReversiError::InvalidArgument(_)));
}

#[test]
fn test_capture_then_recapture() {
    for size in [7, 11] {
        let mut engine = GameEngine::new(size).unwrap();
        assert_eq!(engine.contents_of_cell(Hex::new(1, -2)).unwrap(), CellColor::Empty);
        assert_eq!(engine.contents_of_cell(Hex::new(0, -1)).unwrap(), CellColor::White);

        place(&mut engine, CellColor::Black, 1, -2);
        assert_eq!(engine.contents_of_cell(Hex::new(1, -2)).unwrap(), CellColor::Black);
        assert_eq!(engine.contents_of_cell(Hex::new(0, -1)).unwrap(), CellColor::Black);

        place(&mut engine, CellColor::White, 1, -3);
        assert_eq!(engine.contents_of_cell(Hex::new(1, -2)).unwrap(), CellColor::White);
        assert_eq!(engine.contents_of_cell(Hex::new(0, -1)).unwrap(), CellColor::Black);
    }
}

#[test]
fn test_size_5_black_runs_out_of_moves() {
    let mut engine = GameEngine::new(5).unwrap();
    place(&mut engine, CellColor::Black, -2, 1);
    place(&mut engine, CellColor::White, 2, -1);
    place(&mut engine, CellColor::Black, 1, -2);
    place(&mut engine, CellColor::White, -1, -1);
    place(&mut engine, CellColor::Black, 1, 1);
    place(&mut engine, CellColor::White, -1, 2);
    assert!(!engine.has_valid_move(CellColor::Black).unwrap());
}

#[test]
fn test_full_game_white_wins() {
    let mut engine = GameEngine::new(7).unwrap();
    let moves = [
        (CellColor::Black, -1, -1),
        (CellColor::White, -1, -2),
        (CellColor::Black, -2, -1),
        (CellColor::White, -3, 0),
        (CellColor::Black, -1, 2),
        (CellColor::White, -1, 3),
        (CellColor::Black, -2, 1),
        (CellColor::White, 2, -1),
        (CellColor::Black, 1, -2),
        (CellColor::White, 1, -3),
        (CellColor::Black, -2, 3),
        (CellColor::White, -3, 2),
        (CellColor::Black, -3, 1),
        (CellColor::White, -3, 3),
        (CellColor::Black, 2, -3),
        (CellColor::White, 3, -3),
        (CellColor::Black, 1, 1),
        (CellColor::White, 1, 2),
        (CellColor::Black, 2, 1),
        (CellColor::White, 3, 0),
        (CellColor::Black, 3, -2),
        (CellColor::White, 3, -1),
    ];
    for (color, q, r) in moves {
        place(&mut engine, color, q, r);
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    assert!(!engine.has_valid_move(CellColor::Black).unwrap());
    assert!(!engine.has_valid_move(CellColor::White).unwrap());

    engine.pass(CellColor::Black).unwrap();
    engine.pass(CellColor::White).unwrap();
    assert_eq!(engine.status(), GameStatus::WhiteWon);
    assert!(
        engine.score(CellColor::White).unwrap() > engine.score(CellColor::Black).unwrap()
    );
}

#[test]
fn test_queries() {
    let mut engine = GameEngine::new(7).unwrap();
    assert!(!engine.is_valid_move(Hex::new(-5, -5), CellColor::Black).unwrap());
    assert!(engine.is_valid_move(Hex::new(-1, -1), CellColor::Black).unwrap());
    assert!(engine.is_valid_move(Hex::new(1, -2), CellColor::White).unwrap());
    assert!(!engine.is_valid_move(Hex::new(2, 2), CellColor::White).unwrap());

    assert!(engine.is_valid_coordinate(Hex::new(0, -2)));
    assert!(!engine.is_valid_coordinate(Hex::new(-1, -3)));

    assert_eq!(engine.contents_of_cell(Hex::new(0, 0)).unwrap(), CellColor::Empty);
    assert!(engine.contents_of_cell(Hex::new(100, 100)).unwrap_err().is_invalid_argument());
    assert!(engine.contents_of_cell(Hex::new(-100, -100)).unwrap_err().is_invalid_argument());

    assert_eq!(engine.score(CellColor::Black).unwrap(), 3);
    assert_eq!(engine.score(CellColor::White).unwrap(), 3);
    assert_eq!(engine.num_tiles_captured(Hex::new(-1, -1), CellColor::Black).unwrap(), 1);
    assert_eq!(engine.num_tiles_captured(Hex::new(0, 3), CellColor::White).unwrap(), 0);

    place(&mut engine, CellColor::Black, -1, -1);
    assert_eq!(engine.score(CellColor::Black).unwrap(), 5);
}

// ============================================================================
// GOLDEN SNAPSHOTS
// ============================================================================

#[test]
fn test_render_size_11_sequence() {
    let mut engine = GameEngine::new(11).unwrap();
    assert_eq!(
        render(&engine),
        rows(&[
            "       _ _ _ _ _ _       ",
            "      _ _ _ _ _ _ _      ",
            "     _ _ _ _ _ _ _ _     ",
            "    _ _ _ _ _ _ _ _ _    ",
            "   _ _ _ _ O X _ _ _ _   ",
            "  _ _ _ _ X _ O _ _ _ _  ",
            "   _ _ _ _ O X _ _ _ _   ",
            "    _ _ _ _ _ _ _ _ _    ",
            "     _ _ _ _ _ _ _ _     ",
            "      _ _ _ _ _ _ _      ",
            "       _ _ _ _ _ _       ",
        ])
    );

    place(&mut engine, CellColor::Black, 1, -2);
    place(&mut engine, CellColor::White, 1, -3);
    assert_eq!(
        render(&engine),
        rows(&[
            "       _ _ _ _ _ _       ",
            "      _ _ _ _ _ _ _      ",
            "     _ _ _ O _ _ _ _     ",
            "    _ _ _ _ O _ _ _ _    ",
            "   _ _ _ _ X O _ _ _ _   ",
            "  _ _ _ _ X _ O _ _ _ _  ",
            "   _ _ _ _ O X _ _ _ _   ",
            "    _ _ _ _ _ _ _ _ _    ",
            "     _ _ _ _ _ _ _ _     ",
            "      _ _ _ _ _ _ _      ",
            "       _ _ _ _ _ _       ",
        ])
    );
}

#[test]
fn test_render_size_7_sequence() {
    let mut engine = GameEngine::new(7).unwrap();
    place(&mut engine, CellColor::Black, -2, 1);
    assert_eq!(
        render(&engine),
        rows(&[
            "     _ _ _ _     ",
            "    _ _ _ _ _    ",
            "   _ _ O X _ _   ",
            "  _ _ X _ O _ _  ",
            "   _ X X X _ _   ",
            "    _ _ _ _ _    ",
            "     _ _ _ _     ",
        ])
    );

    place(&mut engine, CellColor::White, -3, 2);
    assert_eq!(
        render(&engine),
        rows(&[
            "     _ _ _ _     ",
            "    _ _ _ _ _    ",
            "   _ _ O X _ _   ",
            "  _ _ O _ O _ _  ",
            "   _ O X X _ _   ",
            "    O _ _ _ _    ",
            "     _ _ _ _     ",
        ])
    );
}

#[test]
fn test_size_5_render_after_move_and_pass() {
    let mut engine = GameEngine::new(5).unwrap();
    place(&mut engine, CellColor::Black, -1, -1);
    assert_eq!(
        render(&engine),
        rows(&[
            "    _ _ _    ",
            "   X X X _   ",
            "  _ X _ O _  ",
            "   _ O X _   ",
            "    _ _ _    ",
        ])
    );

    let before = render(&engine);
    engine.pass(CellColor::White).unwrap();
    assert_eq!(render(&engine), before);
}

#[test]
fn test_rejected_moves_leave_snapshot_unchanged() {
    let mut engine = GameEngine::new(11).unwrap();
    let initial = render(&engine);

    assert!(engine.place_tile(CellColor::White, Hex::new(2, 0)).unwrap_err().is_invalid_state());
    assert!(engine.place_tile(CellColor::Black, Hex::new(-3, -1)).unwrap_err().is_invalid_state());
    assert_eq!(render(&engine), initial);

    place(&mut engine, CellColor::White, 1, -2);
    let after_white = render(&engine);
    assert!(engine.place_tile(CellColor::Black, Hex::new(1, 1)).unwrap_err().is_invalid_state());
    assert_eq!(render(&engine), after_white);
}
