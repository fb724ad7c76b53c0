//! Error types for reading boards and positions

use thiserror::Error;

/// Errors that can occur while building a board from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Side symbol other than w/W/b/B
    #[error("Invalid side symbol: {0:?} (expected one of w, W, b, B)")]
    InvalidSide(char),

    /// Cell symbol outside the board alphabet
    #[error("Invalid cell symbol {symbol:?} at index {index}")]
    InvalidCell { index: usize, symbol: char },

    /// Board text does not hold N*N cells
    #[error("Expected {expected} cells for the board, found {found}")]
    WrongLength { expected: usize, found: usize },

    /// Board size of zero
    #[error("Invalid board size: {0}")]
    InvalidSize(usize),

    /// Row count or row width disagrees with the board size
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Input ended before a required token
    #[error("Missing {0} in input")]
    MissingToken(&'static str),

    /// Size token is not a number
    #[error("Could not parse board size from {0:?}")]
    BadSize(String),

    /// Symbols left over after the N*N cells
    #[error("Unexpected input after the board: {0:?}")]
    TrailingInput(String),
}

/// Result type alias for board parsing
pub type BoardResult<T> = Result<T, BoardError>;
