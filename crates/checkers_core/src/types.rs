use std::fmt;

/// Which player a piece belongs to.
///
/// Black starts on the top rows and moves down the grid (row index +1),
/// white starts on the bottom rows and moves up (row index -1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row step of a forward move. Fixed by color, kinging does not change it.
    pub fn direction(self) -> isize {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    pub fn pawn_symbol(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    pub fn king_symbol(self) -> char {
        match self {
            Side::White => 'W',
            Side::Black => 'B',
        }
    }

    pub fn from_symbol(c: char) -> Option<Side> {
        match c {
            'w' | 'W' => Some(Side::White),
            'b' | 'B' => Some(Side::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pawn_symbol())
    }
}

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Pawn(Side),
    King(Side),
}

impl Cell {
    pub const EMPTY_SYMBOL: char = '_';

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            Self::EMPTY_SYMBOL => Some(Cell::Empty),
            'w' => Some(Cell::Pawn(Side::White)),
            'b' => Some(Cell::Pawn(Side::Black)),
            'W' => Some(Cell::King(Side::White)),
            'B' => Some(Cell::King(Side::Black)),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => Self::EMPTY_SYMBOL,
            Cell::Pawn(s) => s.pawn_symbol(),
            Cell::King(s) => s.king_symbol(),
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Pawn(s) | Cell::King(s) => Some(s),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }
}

/// A (row, col) coordinate on the grid. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by (dr, dc); `None` if the result leaves an `n`x`n` grid.
    pub fn offset(self, dr: isize, dc: isize, n: usize) -> Option<Square> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < n && col < n {
            Some(Square { row, col })
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Square { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// A located piece of the perspective side, derived from the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub square: Square,
    pub side: Side,
    pub is_king: bool,
    /// Forward row step, set from color only.
    pub direction: isize,
}

impl Piece {
    pub fn new(square: Square, cell: Cell) -> Option<Piece> {
        let side = cell.side()?;
        Some(Piece {
            square,
            side,
            is_king: cell.is_king(),
            direction: side.direction(),
        })
    }

    /// True if `cell` holds a piece this piece is allowed to jump.
    #[inline]
    pub fn can_attack(&self, cell: Cell) -> bool {
        self.attackable_symbols().contains(&cell.symbol())
    }

    /// Enemy symbols this piece may capture (pawn first, then king).
    pub fn attackable_symbols(&self) -> [char; 2] {
        let enemy = self.side.other();
        [enemy.pawn_symbol(), enemy.king_symbol()]
    }
}
