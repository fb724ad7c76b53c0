pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::*;
pub use movegen::*;
pub use moves::*;
pub use notation::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by every checkers player (minimax, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the side to move has no legal move)
    pub best_move: Option<Move>,
    /// Utility of the chosen line from the searching side's perspective
    pub score: f32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Trait that all checkers engines must implement.
///
/// An engine reads one board and produces one move for the board's
/// perspective side. It keeps no game history between calls.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `board` - The position to analyze, seen from the side to move
    /// * `limits` - Search limits (depth, optional time)
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state before an unrelated position.
    fn new_game(&mut self) {}

    /// Optional: Set a named option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
