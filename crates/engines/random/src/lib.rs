//! Random Move Checkers Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (the minimax engine should easily beat this)
//! - Stress testing move generation

use checkers_core::{legal_moves, Board, Engine, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

#[cfg(test)]
mod lib_tests;

/// A checkers engine that plays random legal moves.
///
/// Mandatory captures still apply, since it draws from the legal move list.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible move choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> SearchResult {
        let moves = legal_moves(board);
        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).cloned();
        debug!(candidates = moves.len(), "random move picked");

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
