//! Square ownership grid.
//!
//! Cells are stored row-major. Only successful placements write to the
//! board; legality checks read it.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::pieces::Cell;

/// Contents of one board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Owned(PlayerId),
}

impl CellState {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    #[must_use]
    pub fn is_owned_by(self, player: PlayerId) -> bool {
        self == CellState::Owned(player)
    }

    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            CellState::Empty => None,
            CellState::Owned(p) => Some(p),
        }
    }
}

/// An N×N board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an empty board with `size` squares per side.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one square");
        Self {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Squares per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        let n = self.size as i64;
        (0..n).contains(&i64::from(cell.x)) && (0..n).contains(&i64::from(cell.y))
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.size + cell.x as usize)
    }

    /// Contents of `cell`, or `None` off the board.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<CellState> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Contents of an on-board `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    #[must_use]
    pub fn occupant_at(&self, cell: Cell) -> CellState {
        match self.get(cell) {
            Some(state) => state,
            None => panic!("{} is outside the {}x{} board", cell, self.size, self.size),
        }
    }

    /// True if `cell` is on the board and owned by `player`.
    #[must_use]
    pub fn is_owned_by(&self, cell: Cell, player: PlayerId) -> bool {
        self.get(cell).is_some_and(|s| s.is_owned_by(player))
    }

    /// Mark every cell as owned by `player`.
    ///
    /// Callers validate first: every cell must be on the board and empty.
    pub fn place(&mut self, cells: &[Cell], player: PlayerId) {
        for &cell in cells {
            let Some(i) = self.index(cell) else {
                debug_assert!(false, "placing off-board cell {}", cell);
                continue;
            };
            debug_assert!(self.cells[i].is_empty(), "placing onto occupied cell {}", cell);
            self.cells[i] = CellState::Owned(player);
        }
    }

    /// Number of squares owned by `player`.
    #[must_use]
    pub fn count_owned(&self, player: PlayerId) -> usize {
        self.cells.iter().filter(|s| s.is_owned_by(player)).count()
    }

    /// Number of empty squares.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|s| s.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    /// One row per line: `.` for empty, the seat digit for owned squares.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for state in row {
                match state {
                    CellState::Empty => write!(f, ".")?,
                    CellState::Owned(p) => write!(f, "{}", p.0)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        let board = Board::new(20);
        assert!(board.in_bounds(Cell::new(0, 0)));
        assert!(board.in_bounds(Cell::new(19, 19)));
        assert!(!board.in_bounds(Cell::new(20, 0)));
        assert!(!board.in_bounds(Cell::new(0, -1)));
        assert!(!board.in_bounds(Cell::new(i32::MIN, i32::MAX)));
    }

    #[test]
    fn test_place_and_query() {
        let mut board = Board::new(5);
        let p1 = PlayerId::new(1);
        board.place(&[Cell::new(1, 2), Cell::new(2, 2)], p1);

        assert_eq!(board.occupant_at(Cell::new(1, 2)), CellState::Owned(p1));
        assert_eq!(board.occupant_at(Cell::new(2, 1)), CellState::Empty);
        assert!(board.is_owned_by(Cell::new(2, 2), p1));
        assert!(!board.is_owned_by(Cell::new(2, 2), PlayerId::new(0)));
        assert!(!board.is_owned_by(Cell::new(-1, 2), p1));
        assert_eq!(board.get(Cell::new(5, 0)), None);
        assert_eq!(board.count_owned(p1), 2);
        assert_eq!(board.count_empty(), 23);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_occupant_at_off_board_panics() {
        let board = Board::new(5);
        let _ = board.occupant_at(Cell::new(5, 5));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.place(&[Cell::new(0, 0)], PlayerId::new(0));
        board.place(&[Cell::new(2, 1)], PlayerId::new(3));
        assert_eq!(format!("{}", board), "0..\n..3\n...");
    }

    #[test]
    fn test_cell_state_owner() {
        assert_eq!(CellState::Empty.owner(), None);
        assert_eq!(CellState::Owned(PlayerId::new(2)).owner(), Some(PlayerId::new(2)));
        assert!(CellState::default().is_empty());
    }

    #[test]
    fn test_board_serialization() {
        let mut board = Board::new(4);
        board.place(&[Cell::new(3, 3)], PlayerId::new(2));
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
