//! Material evaluation of a board from its perspective side

use crate::{board::Board, types::*};

/// Utility of a won position.
pub const WIN_SCORE: f32 = 100.0;
/// Utility of a lost position.
pub const LOSS_SCORE: f32 = -100.0;

/// Evaluation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalConfig {
    /// Add a small bonus for keeping the two armies' centroids close.
    pub positional_term: bool,
}

/// Piece counts of a board, split by rank and by self/enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Material {
    pub self_kings: u32,
    pub self_pawns: u32,
    pub enemy_kings: u32,
    pub enemy_pawns: u32,
}

impl Material {
    /// Count pieces with a single scan of the grid.
    pub fn count(board: &Board) -> Self {
        let me = board.perspective();
        let mut m = Material::default();
        for &cell in board.cells() {
            match cell {
                Cell::Empty => {}
                Cell::King(s) if s == me => m.self_kings += 1,
                Cell::Pawn(s) if s == me => m.self_pawns += 1,
                Cell::King(_) => m.enemy_kings += 1,
                Cell::Pawn(_) => m.enemy_pawns += 1,
            }
        }
        m
    }

    pub fn self_count(&self) -> u32 {
        self.self_kings + self.self_pawns
    }

    pub fn enemy_count(&self) -> u32 {
        self.enemy_kings + self.enemy_pawns
    }

    /// Kings count double.
    pub fn score(&self) -> f32 {
        (2.0 * self.self_kings as f32 + self.self_pawns as f32)
            - (2.0 * self.enemy_kings as f32 + self.enemy_pawns as f32)
    }

    pub fn game_over(&self) -> bool {
        self.self_count() == 0 || self.enemy_count() == 0
    }
}

/// True iff either side has no pieces left.
pub fn game_over(board: &Board) -> bool {
    Material::count(board).game_over()
}

/// Utility with the default configuration.
pub fn evaluate(board: &Board) -> f32 {
    evaluate_with(board, &EvalConfig::default())
}

/// Utility of `board` for its perspective side.
///
/// - `LOSS_SCORE` if the perspective side has no pieces
/// - `WIN_SCORE` if the opponent has no pieces
/// - material difference otherwise, plus the positional term if enabled
pub fn evaluate_with(board: &Board, config: &EvalConfig) -> f32 {
    let m = Material::count(board);
    if m.self_count() == 0 {
        return LOSS_SCORE;
    }
    if m.enemy_count() == 0 {
        return WIN_SCORE;
    }

    let mut score = m.score();
    if config.positional_term {
        score += positional_bonus(board);
    }
    score
}

/// `(N - d) / N^2` where `d` is the distance between the two sides'
/// centroids. Zero when either side is missing.
pub fn positional_bonus(board: &Board) -> f32 {
    let me = board.perspective();
    let (Some(mine), Some(theirs)) = (board.centroid(me), board.centroid(me.other())) else {
        return 0.0;
    };
    let n = board.size() as f32;
    let dist = ((mine.0 - theirs.0).powi(2) + (mine.1 - theirs.1).powi(2)).sqrt();
    (n - dist) / n / n
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
