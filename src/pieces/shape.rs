//! Grid cells and polyomino shapes.
//!
//! A `Shape` is a list of cell offsets. It is *normalized* when its bounding
//! box touches the origin: the minimum `x` and minimum `y` are both zero.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline storage for the cells of one piece. No piece exceeds five cells.
pub type Cells = SmallVec<[Cell; 5]>;

/// An integer grid coordinate. `x` is the column, `y` the row.
///
/// Signed so that candidates hanging off the top or left edge are
/// representable (and rejected as out of bounds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by another cell used as a vector.
    ///
    /// Saturates at the `i32` limits, so a far-off anchor stays far off the
    /// board instead of wrapping back onto it.
    #[must_use]
    pub const fn offset(self, by: Cell) -> Self {
        Self::new(self.x.saturating_add(by.x), self.y.saturating_add(by.y))
    }

    /// The four edge-sharing neighbours.
    #[must_use]
    pub const fn edge_neighbors(self) -> [Cell; 4] {
        let Cell { x, y } = self;
        [
            Cell::new(x - 1, y),
            Cell::new(x + 1, y),
            Cell::new(x, y - 1),
            Cell::new(x, y + 1),
        ]
    }

    /// The four vertex-sharing (diagonal) neighbours.
    #[must_use]
    pub const fn corner_neighbors(self) -> [Cell; 4] {
        let Cell { x, y } = self;
        [
            Cell::new(x - 1, y - 1),
            Cell::new(x + 1, y - 1),
            Cell::new(x - 1, y + 1),
            Cell::new(x + 1, y + 1),
        ]
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An ordered list of cell offsets describing a polyomino.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    cells: Cells,
}

impl Shape {
    /// Build a shape from offsets as given, without normalizing.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Minimum x and minimum y, or `None` for an empty shape.
    #[must_use]
    pub fn min_corner(&self) -> Option<Cell> {
        let min_x = self.cells.iter().map(|c| c.x).min()?;
        let min_y = self.cells.iter().map(|c| c.y).min()?;
        Some(Cell::new(min_x, min_y))
    }

    /// Bounding box as `(width, height)`. Empty shapes are `(0, 0)`.
    #[must_use]
    pub fn extent(&self) -> (i32, i32) {
        let Some(min) = self.min_corner() else {
            return (0, 0);
        };
        let max_x = self.cells.iter().map(|c| c.x).max().unwrap_or(min.x);
        let max_y = self.cells.iter().map(|c| c.y).max().unwrap_or(min.y);
        (max_x - min.x + 1, max_y - min.y + 1)
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.min_corner().map_or(true, |c| c == Cell::new(0, 0))
    }

    /// Shift every offset so the bounding box touches `(0, 0)`.
    ///
    /// Order of cells is preserved. Normalizing twice changes nothing.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if let Some(min) = self.min_corner() {
            for cell in &mut self.cells {
                cell.x -= min.x;
                cell.y -= min.y;
            }
        }
        self
    }

    /// Cells sorted, for comparing shapes regardless of authoring order.
    #[must_use]
    pub fn canonical(&self) -> Cells {
        let mut cells = self.cells.clone();
        cells.sort_unstable();
        cells
    }

    /// Translate every offset by `anchor`.
    #[must_use]
    pub fn at(&self, anchor: Cell) -> Cells {
        self.cells.iter().map(|c| c.offset(anchor)).collect()
    }
}

impl std::fmt::Display for Shape {
    /// Draw the shape as rows of `#` and `.`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(min) = self.min_corner() else {
            return Ok(());
        };
        let (w, h) = self.extent();
        for row in 0..h {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..w {
                let here = Cell::new(min.x + col, min.y + row);
                let ch = if self.cells.contains(&here) { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
