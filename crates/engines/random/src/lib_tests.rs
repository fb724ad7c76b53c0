use super::*;
use checkers_core::{Move, Side};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::starting(8, Side::Black);

    let result = engine.search(&board, SearchLimits::depth(1));

    let mv = result.best_move.unwrap();
    assert!(legal_moves(&board).contains(&mv));
}

#[test]
fn random_engine_respects_mandatory_capture() {
    let mut engine = RandomEngine::with_seed(7);
    let board = Board::from_rows(
        Side::White,
        &[
            "________", "________", "__W_____", "___b____", "________", "________",
            "________", "_w______",
        ],
    )
    .unwrap();

    for _ in 0..10 {
        let result = engine.search(&board, SearchLimits::depth(1));
        assert_eq!(
            result.best_move,
            Some(Move::with_path((2, 2), [(4, 4)], false))
        );
    }
}

#[test]
fn random_engine_is_reproducible_with_seed() {
    let board = Board::starting(8, Side::White);
    let picks = |seed| {
        let mut engine = RandomEngine::with_seed(seed);
        (0..5)
            .map(|_| engine.search(&board, SearchLimits::depth(1)).best_move)
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(42), picks(42));
}

#[test]
fn random_engine_handles_no_moves() {
    let mut engine = RandomEngine::new();
    let board = Board::from_rows(Side::Black, &["____", "____", "____", "b___"]).unwrap();

    let result = engine.search(&board, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}
