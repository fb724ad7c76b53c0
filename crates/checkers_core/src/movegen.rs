use tracing::trace;

use crate::{board::Board, moves::*, types::*};

const LATERAL: [isize; 2] = [-1, 1];

/// Generate every legal move for the board's perspective side.
///
/// Captures are mandatory: if any piece can jump, only capture chains are
/// returned. Quiet steps are only generated when no piece can capture.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in board.pieces() {
        let found = capture_moves(board, piece);
        trace!(
            row = piece.square.row,
            col = piece.square.col,
            count = found.len(),
            "capture moves for piece"
        );
        moves = concat_moves(moves, found);
    }

    if moves.is_empty() {
        for piece in board.pieces() {
            let found = quiet_moves(board, piece);
            trace!(
                row = piece.square.row,
                col = piece.square.col,
                count = found.len(),
                "quiet moves for piece"
            );
            moves = concat_moves(moves, found);
        }
    }

    trace!(count = moves.len(), side = %board.perspective(), "legal moves");
    moves
}

impl Board {
    /// See [`legal_moves`].
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }
}

fn row_shifts(piece: &Piece, kinged_in_move: bool) -> &'static [isize] {
    if piece.is_king || kinged_in_move {
        &[1, -1]
    } else if piece.direction > 0 {
        &[1]
    } else {
        &[-1]
    }
}

/// One-cell diagonal steps onto empty cells.
pub fn quiet_moves(board: &Board, piece: &Piece) -> Vec<Move> {
    let n = board.size();
    let mut out = Vec::new();
    for &dr in row_shifts(piece, false) {
        for dc in LATERAL {
            let Some(to) = piece.square.offset(dr, dc, n) else {
                continue;
            };
            if !board.cell(to).is_empty() {
                continue;
            }
            let mut mv = Move::new(piece.square);
            mv.push_step(to);
            if !piece.is_king && to.row == board.king_row(piece.side) {
                mv.grant_king();
            }
            out.push(mv);
        }
    }
    out
}

/// Every maximal capture chain starting at `piece`.
///
/// A chain ends exactly when no further jump is legal from its last landing
/// cell; shorter prefixes of a longer chain are not returned.
pub fn capture_moves(board: &Board, piece: &Piece) -> Vec<Move> {
    let mut out = Vec::new();
    let start = Move::new(piece.square);
    for first in single_jumps(board, piece, piece.square, &start) {
        extend_chain(board, piece, first, &mut out);
    }
    out
}

fn extend_chain(board: &Board, piece: &Piece, chain: Move, out: &mut Vec<Move>) {
    let here = chain.shifted_position(1);
    let next = single_jumps(board, piece, here, &chain);
    if next.is_empty() {
        out.push(chain);
        return;
    }
    for longer in next {
        extend_chain(board, piece, longer, out);
    }
}

/// All one-hop extensions of `chain` jumping from `from`.
fn single_jumps(board: &Board, piece: &Piece, from: Square, chain: &Move) -> Vec<Move> {
    let n = board.size();
    let mut out = Vec::new();
    for &dr in row_shifts(piece, chain.promotes) {
        for dc in LATERAL {
            // Bounds before contents.
            let Some(landing) = from.offset(2 * dr, 2 * dc, n) else {
                continue;
            };
            if !board.cell(landing).is_empty() {
                continue;
            }
            let Some(enemy) = from.offset(dr, dc, n) else {
                continue;
            };
            if !piece.can_attack(board.cell(enemy)) || chain.has_captured(enemy) {
                continue;
            }

            let mut mv = chain.clone();
            mv.push_step(landing);
            mv.capture(enemy);
            if !piece.is_king && landing.row == board.king_row(piece.side) {
                mv.grant_king();
            }
            out.push(mv);
        }
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
