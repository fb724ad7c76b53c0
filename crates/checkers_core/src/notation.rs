//! Text adapters: board input and move output.
//!
//! Input is a side symbol, the board size, then `N * N` cell symbols in
//! row-major order. Tokens may be separated by any whitespace, and a row may
//! be written either as `b_b_` or `b _ b _`. Anything after the last cell is
//! rejected.
//!
//! A move is written as its hop count, then one `row col` line for the origin
//! and one per destination.

use crate::{
    board::Board,
    error::{BoardError, BoardResult},
    moves::Move,
    types::Side,
};

pub fn parse_side(token: &str) -> BoardResult<Side> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Side::from_symbol(c).ok_or(BoardError::InvalidSide(c)),
        (Some(c), Some(_)) => Err(BoardError::InvalidSide(c)),
        (None, _) => Err(BoardError::MissingToken("side symbol")),
    }
}

/// Parse a full position: side, size and cells.
pub fn read_input(text: &str) -> BoardResult<Board> {
    let mut tokens = text.split_whitespace();
    let side = parse_side(tokens.next().ok_or(BoardError::MissingToken("side symbol"))?)?;
    let size_token = tokens.next().ok_or(BoardError::MissingToken("board size"))?;
    let n: usize = size_token
        .parse()
        .map_err(|_| BoardError::BadSize(size_token.to_string()))?;

    let mut symbols = tokens.flat_map(str::chars);
    let cells: String = symbols.by_ref().take(n.saturating_mul(n)).collect();
    let rest: String = symbols.collect();
    if !rest.is_empty() {
        return Err(BoardError::TrailingInput(rest));
    }
    Board::from_str(n, side, &cells)
}

pub fn format_move(mv: &Move) -> String {
    let mut s = String::new();
    s.push_str(&format!("{}\n", mv.hops()));
    s.push_str(&format!("{}\n", mv.origin));
    for sq in &mv.path {
        s.push_str(&format!("{}\n", sq));
    }
    s
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
