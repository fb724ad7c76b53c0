//! Depth-bounded minimax search with alpha-beta pruning

use checkers_core::{
    evaluate_with, game_over, legal_moves, Board, EvalConfig, Move, Side, TimeControl,
    LOSS_SCORE, WIN_SCORE,
};
use tracing::{debug, trace};

/// Result from pick_best_move indicating whether search completed or was stopped.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best move found with its utility (None if the side to move has no legal move)
    pub best_move: Option<(Move, f32)>,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Per-search state shared by every node.
struct SearchContext<'a> {
    root: Side,
    max_depth: u8,
    eval: EvalConfig,
    nodes: &'a mut u64,
    tc: &'a TimeControl,
}

struct NodeResult {
    best_move: Option<Move>,
    utility: f32,
    stopped: bool,
}

/// Searches the position and returns the best move for the board's
/// perspective side together with its utility.
///
/// # Arguments
/// * `board` - The position to search, perspective = side to move
/// * `depth` - Number of plies to look ahead, clamped to at least 1
/// * `eval` - Evaluation switches applied at terminal nodes
/// * `nodes` - Counter for nodes searched (for statistics)
/// * `tc` - Time control for aborting search when time expires
///
/// If the search is stopped before any root move is fully examined, the first
/// legal move is returned so the caller always has something to play.
pub fn pick_best_move(
    board: &Board,
    depth: u8,
    eval: &EvalConfig,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome {
    let mut ctx = SearchContext {
        root: board.perspective(),
        max_depth: depth.max(1),
        eval: *eval,
        nodes,
        tc,
    };

    let root = minimax(
        board,
        1,
        true,
        f32::NEG_INFINITY,
        f32::INFINITY,
        &mut ctx,
    );

    let best_move = match root.best_move {
        Some(mv) => Some((mv, root.utility)),
        None if root.stopped => legal_moves(board).into_iter().next().map(|mv| {
            let mut next = board.forecast_move(&mv);
            next.switch_perspective_to(ctx.root);
            let utility = evaluate_with(&next, &ctx.eval);
            (mv, utility)
        }),
        None => None,
    };

    debug!(
        side = %ctx.root,
        depth = ctx.max_depth,
        nodes = *ctx.nodes,
        utility = best_move.as_ref().map(|(_, u)| *u),
        stopped = root.stopped,
        "search finished"
    );

    SearchOutcome {
        best_move,
        stopped: root.stopped,
    }
}

/// One node of the search tree.
///
/// `board` is seen from the side to move at this node. Utilities are always
/// from the root side's perspective: the root side maximizes, its opponent
/// minimizes.
fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    mut alpha: f32,
    mut beta: f32,
    ctx: &mut SearchContext<'_>,
) -> NodeResult {
    assert!(
        depth >= 1 && depth <= ctx.max_depth,
        "search recursed to depth {} past the bound {}",
        depth,
        ctx.max_depth
    );

    let moves = legal_moves(board);
    trace!(depth, maximizing, moves = moves.len(), "node entered");

    // Side to move is stuck: it loses.
    if moves.is_empty() {
        let utility = if maximizing { LOSS_SCORE } else { WIN_SCORE };
        return NodeResult {
            best_move: None,
            utility,
            stopped: false,
        };
    }

    let mut best_move = None;
    let mut best_utility = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };

    for mv in moves {
        if ctx.tc.should_check_time(*ctx.nodes) && ctx.tc.check_time() {
            return NodeResult {
                best_move,
                utility: best_utility,
                stopped: true,
            };
        }
        *ctx.nodes += 1;

        let mut next = board.forecast_move(&mv);
        let utility = if depth >= ctx.max_depth || game_over(&next) {
            next.switch_perspective_to(ctx.root);
            evaluate_with(&next, &ctx.eval)
        } else {
            next.switch_perspective();
            let child = minimax(&next, depth + 1, !maximizing, alpha, beta, ctx);
            if child.stopped {
                return NodeResult {
                    best_move,
                    utility: best_utility,
                    stopped: true,
                };
            }
            child.utility
        };

        trace!(
            depth,
            maximizing,
            utility,
            row = mv.origin.row,
            col = mv.origin.col,
            hops = mv.hops(),
            "move considered"
        );

        // Strict comparison: the first move wins ties.
        let improves = if maximizing {
            utility > best_utility
        } else {
            utility < best_utility
        };
        if improves {
            best_utility = utility;
            best_move = Some(mv);
        }

        if maximizing {
            alpha = alpha.max(utility);
        } else {
            beta = beta.min(utility);
        }
        if alpha >= beta {
            break;
        }
    }

    NodeResult {
        best_move,
        utility: best_utility,
        stopped: false,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
