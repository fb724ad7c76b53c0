use crate::{board::Board, movegen::legal_moves};

/// Pure perft node count.
/// Counts the positions reached after exactly `depth` plies, with the two
/// sides alternating.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| {
            let mut next = board.forecast_move(mv);
            next.switch_perspective();
            perft(&next, depth - 1)
        })
        .sum()
}
