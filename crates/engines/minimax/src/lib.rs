//! Minimax Checkers Engine
//!
//! Depth-bounded minimax with alpha-beta pruning over the full legal move
//! list, scored by material count at the frontier.

mod search;

use checkers_core::{Board, Engine, EvalConfig, SearchLimits, SearchResult, LOSS_SCORE};

/// Checkers engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Plain minimax (root side maximizes, opponent minimizes)
/// - Material evaluation, kings worth two pawns
/// - Decisive +/-100 scores once a side runs out of pieces or moves
/// - Optional move time limit
#[derive(Debug, Clone, Default)]
pub struct MiniMaxEngine {
    eval: EvalConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl MiniMaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_eval(eval: EvalConfig) -> Self {
        Self { eval, nodes: 0 }
    }

    pub fn eval_config(&self) -> &EvalConfig {
        &self.eval
    }
}

impl Engine for MiniMaxEngine {
    fn search(&mut self, board: &Board, mut limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();
        let depth = limits.depth.max(1);

        let outcome = search::pick_best_move(
            board,
            depth,
            &self.eval,
            &mut self.nodes,
            &limits.time_control,
        );

        SearchResult {
            score: outcome
                .best_move
                .as_ref()
                .map(|(_, s)| *s)
                .unwrap_or(LOSS_SCORE),
            best_move: outcome.best_move.map(|(mv, _)| mv),
            depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "MiniMax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name {
            "Positional" => match value.parse::<bool>() {
                Ok(on) => {
                    self.eval.positional_term = on;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

// Re-export for direct use if needed
pub use search::{pick_best_move, SearchOutcome};
