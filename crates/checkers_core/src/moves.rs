use std::collections::BTreeSet;

use crate::types::Square;

/// One move: an origin, the cells visited in order, whether the piece was
/// promoted on the way, and the enemy cells jumped over.
///
/// A simple step has one destination and no captures. A capture chain has
/// exactly one captured cell per destination.
#[derive(Clone, Debug)]
pub struct Move {
    pub origin: Square,
    pub path: Vec<Square>,
    pub promotes: bool,
    pub captures: BTreeSet<Square>,
}

impl Move {
    pub fn new(origin: Square) -> Self {
        Self {
            origin,
            path: Vec::new(),
            promotes: false,
            captures: BTreeSet::new(),
        }
    }

    /// Build a move from a literal path. Mostly useful for tests and
    /// comparing against generated moves.
    pub fn with_path<I>(origin: (usize, usize), path: I, promotes: bool) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self {
            origin: origin.into(),
            path: path.into_iter().map(Square::from).collect(),
            promotes,
            captures: BTreeSet::new(),
        }
    }

    pub fn push_step(&mut self, to: Square) {
        self.path.push(to);
    }

    pub fn capture(&mut self, enemy: Square) {
        self.captures.insert(enemy);
    }

    pub fn grant_king(&mut self) {
        self.promotes = true;
    }

    pub fn has_captured(&self, enemy: Square) -> bool {
        self.captures.contains(&enemy)
    }

    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Number of destinations (1 for a simple step).
    pub fn hops(&self) -> usize {
        self.path.len()
    }

    /// The cell `shift` hops back from the end of the path: 1 is the last
    /// destination, 2 the one before it, and so on.
    ///
    /// # Panics
    /// If the path has fewer than `shift` destinations or `shift` is zero.
    pub fn shifted_position(&self, shift: usize) -> Square {
        let n = self.path.len();
        assert!(
            shift >= 1 && shift <= n,
            "move from {:?} has {} hops, cannot look back {}",
            self.origin,
            n,
            shift
        );
        self.path[n - shift]
    }

    /// Final landing cell.
    ///
    /// # Panics
    /// If the path is empty.
    pub fn destination(&self) -> Square {
        self.shifted_position(1)
    }
}

// Captures are implied by the path for generated moves.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.path == other.path && self.promotes == other.promotes
    }
}

impl Eq for Move {}

/// Append every move of `more` to `moves`.
pub fn concat_moves(mut moves: Vec<Move>, more: Vec<Move>) -> Vec<Move> {
    moves.extend(more);
    moves
}
