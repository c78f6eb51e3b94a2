//! The fixed piece set and lookup by name.
//!
//! Every seat owns one copy of the same 21 pieces: each free polyomino of
//! one to five cells exactly once. Shapes are authored normalized.
//!
//! `PieceCatalog` indexes the static table by name. It is cheap to build and
//! never changes after construction.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::shape::{Cell, Shape};

/// Piece identifier: the ordinal position in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A static piece definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub name: &'static str,
    cells: &'static [Cell],
}

impl Piece {
    /// Offsets of the piece in its authored orientation.
    #[must_use]
    pub fn cells(&self) -> &'static [Cell] {
        self.cells
    }

    /// Number of cells, which is also the score the piece is worth.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::from_cells(self.cells.iter().copied())
    }
}

macro_rules! piece {
    ($id:literal, $name:literal, [$(($x:literal, $y:literal)),+ $(,)?]) => {
        Piece {
            id: PieceId($id),
            name: $name,
            cells: &[$(Cell { x: $x, y: $y }),+],
        }
    };
}

static PIECES: [Piece; 21] = [
    piece!(0, "1", [(0, 0)]),
    piece!(1, "2", [(0, 0), (1, 0)]),
    piece!(2, "I3", [(0, 0), (1, 0), (2, 0)]),
    piece!(3, "V3", [(0, 0), (0, 1), (1, 0)]),
    piece!(4, "I4", [(0, 0), (1, 0), (2, 0), (3, 0)]),
    piece!(5, "O4", [(0, 0), (1, 0), (0, 1), (1, 1)]),
    piece!(6, "L4", [(0, 0), (0, 1), (0, 2), (1, 0)]),
    piece!(7, "Z4", [(0, 0), (1, 0), (1, 1), (2, 1)]),
    piece!(8, "T4", [(0, 0), (1, 0), (2, 0), (1, 1)]),
    piece!(9, "I5", [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
    piece!(10, "L5", [(0, 0), (0, 1), (0, 2), (0, 3), (1, 0)]),
    piece!(11, "V5", [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)]),
    piece!(12, "T5", [(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)]),
    piece!(13, "N", [(0, 0), (1, 0), (1, 1), (2, 1), (3, 1)]),
    piece!(14, "W", [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]),
    piece!(15, "P", [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]),
    piece!(16, "U", [(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)]),
    piece!(17, "Y", [(0, 0), (1, 0), (2, 0), (3, 0), (1, 1)]),
    piece!(18, "F", [(1, 0), (0, 1), (1, 1), (1, 2), (2, 2)]),
    piece!(19, "X", [(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]),
    piece!(20, "Z5", [(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)]),
];

/// All pieces in catalog order.
#[must_use]
pub fn all_pieces() -> &'static [Piece] {
    &PIECES
}

/// Name index over the static piece table.
///
/// ## Example
///
/// ```
/// use rust_blokus::pieces::PieceCatalog;
///
/// let catalog = PieceCatalog::standard();
/// let x = catalog.by_name("X").unwrap();
/// assert_eq!(x.size(), 5);
/// assert!(catalog.by_name("Q").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct PieceCatalog {
    pieces: &'static [Piece],
    by_name: FxHashMap<&'static str, PieceId>,
}

impl PieceCatalog {
    /// The 21-piece set.
    #[must_use]
    pub fn standard() -> Self {
        let pieces = all_pieces();
        let by_name = pieces.iter().map(|p| (p.name, p.id)).collect();
        Self { pieces, by_name }
    }

    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&'static Piece> {
        self.pieces.get(id.index())
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'static Piece> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterate over pieces in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Piece> {
        self.pieces.iter()
    }

    /// Sum of all piece sizes: the most cells one seat can cover.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.pieces.iter().map(Piece::size).sum()
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Set of piece ids, stored as a bitset over catalog ordinals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSet(u32);

impl PieceSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Insert a piece. Returns `false` if it was already present, or if the
    /// id is too large for the set (32 or more), in which case nothing changes.
    pub fn insert(&mut self, id: PieceId) -> bool {
        let Some(bit) = Self::bit(id) else {
            return false;
        };
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[must_use]
    pub const fn contains(self, id: PieceId) -> bool {
        match Self::bit(id) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    const fn bit(id: PieceId) -> Option<u32> {
        1u32.checked_shl(id.0 as u32)
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate ids in ascending order.
    pub fn iter(self) -> impl Iterator<Item = PieceId> {
        (0..u32::BITS as u8).map(PieceId).filter(move |&id| self.contains(id))
    }
}

impl FromIterator<PieceId> for PieceSet {
    fn from_iter<I: IntoIterator<Item = PieceId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
