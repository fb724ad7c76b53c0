use std::fmt;

use crate::error::{BoardError, BoardResult};
use crate::moves::Move;
use crate::types::*;

/// An N x N checkers grid seen from one side.
///
/// The perspective side owns `pieces`; those are recomputed from the grid
/// every time the board is built or the perspective changes, so they never
/// go stale. Switching perspective never touches the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    perspective: Side,
    pieces: Vec<Piece>,
}

impl Board {
    /// Build from a flat row-major string of `n * n` cell symbols.
    pub fn from_str(n: usize, side: Side, s: &str) -> BoardResult<Self> {
        let expected = match n.checked_mul(n) {
            Some(cells) if n > 0 => cells,
            _ => return Err(BoardError::InvalidSize(n)),
        };
        let found = s.chars().count();
        if found != expected {
            return Err(BoardError::WrongLength { expected, found });
        }
        let grid = s
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                Cell::from_symbol(symbol).ok_or(BoardError::InvalidCell { index, symbol })
            })
            .collect::<BoardResult<Vec<_>>>()?;
        Ok(Self::from_cells(n, side, grid))
    }

    /// Build from one string per row; the row count sets the board size.
    pub fn from_rows(side: Side, rows: &[&str]) -> BoardResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(BoardError::InvalidSize(n));
        }
        for (row, text) in rows.iter().enumerate() {
            let found = text.chars().count();
            if found != n {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: n,
                    found,
                });
            }
        }
        Self::from_str(n, side, &rows.concat())
    }

    /// Standard opening layout: black fills the top rows, white the bottom
    /// rows, both on the dark squares (row + col odd).
    pub fn starting(n: usize, side: Side) -> Self {
        let rows_per_side = n.saturating_sub(2) / 2;
        let mut grid = vec![Cell::Empty; n * n];
        for row in 0..n {
            for col in 0..n {
                if (row + col) % 2 == 0 {
                    continue;
                }
                if row < rows_per_side {
                    grid[row * n + col] = Cell::Pawn(Side::Black);
                } else if row >= n - rows_per_side {
                    grid[row * n + col] = Cell::Pawn(Side::White);
                }
            }
        }
        Self::from_cells(n, side, grid)
    }

    fn from_cells(size: usize, perspective: Side, grid: Vec<Cell>) -> Self {
        let mut board = Board {
            size,
            grid,
            perspective,
            pieces: Vec::new(),
        };
        board.designate_pieces();
        board
    }

    fn designate_pieces(&mut self) {
        self.pieces.clear();
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = self.grid[row * self.size + col];
                if cell.side() == Some(self.perspective) {
                    if let Some(piece) = Piece::new(Square::new(row, col), cell) {
                        self.pieces.push(piece);
                    }
                }
            }
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The side whose pieces count as "self".
    pub fn perspective(&self) -> Side {
        self.perspective
    }

    /// Pieces of the perspective side, row-major.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn player_positions(&self) -> Vec<Square> {
        self.pieces.iter().map(|p| p.square).collect()
    }

    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.grid[sq.row * self.size + sq.col]
    }

    #[inline]
    fn set_cell(&mut self, sq: Square, cell: Cell) {
        self.grid[sq.row * self.size + sq.col] = cell;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.grid
    }

    pub fn self_symbols(&self) -> [char; 2] {
        [
            self.perspective.pawn_symbol(),
            self.perspective.king_symbol(),
        ]
    }

    pub fn enemy_symbols(&self) -> [char; 2] {
        let enemy = self.perspective.other();
        [enemy.pawn_symbol(), enemy.king_symbol()]
    }

    /// Row on which a piece of `side` gets crowned.
    pub fn king_row(&self, side: Side) -> usize {
        match side {
            Side::White => 0,
            Side::Black => self.size - 1,
        }
    }

    /// Flip self/enemy and recompute the piece list.
    pub fn switch_perspective(&mut self) {
        self.switch_perspective_to(self.perspective.other());
    }

    pub fn switch_perspective_to(&mut self, side: Side) {
        self.perspective = side;
        self.designate_pieces();
    }

    /// Copy of this board seen from `side`.
    pub fn with_perspective(&self, side: Side) -> Board {
        let mut b = self.clone();
        b.switch_perspective_to(side);
        b
    }

    /// Copy of this board seen from the opponent.
    pub fn switched(&self) -> Board {
        self.with_perspective(self.perspective.other())
    }

    /// Board after playing `mv`. `self` stays untouched.
    ///
    /// Captured cells are cleared, the moving piece lands on the final
    /// destination, and it is crowned if the move promotes. The result keeps
    /// the mover's perspective.
    ///
    /// # Panics
    /// If `mv` has no destination.
    pub fn forecast_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        for &captured in &mv.captures {
            next.set_cell(captured, Cell::Empty);
        }

        let dest = mv.destination();
        let moving = self.cell(mv.origin);
        next.set_cell(mv.origin, Cell::Empty);
        next.set_cell(dest, moving);

        if mv.promotes {
            let side = moving.side().unwrap_or(self.perspective);
            next.set_cell(dest, Cell::King(side));
        }

        next.designate_pieces();
        next
    }

    /// Mean (row, col) of every piece belonging to `side`, or `None` if that
    /// side has nothing on the board.
    pub fn centroid(&self, side: Side) -> Option<(f32, f32)> {
        let mut count = 0usize;
        let (mut rows, mut cols) = (0.0f32, 0.0f32);
        for row in 0..self.size {
            for col in 0..self.size {
                if self.grid[row * self.size + col].side() == Some(side) {
                    rows += row as f32;
                    cols += col as f32;
                    count += 1;
                }
            }
        }
        if count == 0 {
            return None;
        }
        Some((rows / count as f32, cols / count as f32))
    }

    /// Row-major string of cell symbols, the inverse of [`Board::from_str`].
    pub fn to_board_string(&self) -> String {
        self.grid.iter().map(|c| c.symbol()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.chunks(self.size) {
            for cell in row {
                write!(f, " {} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
