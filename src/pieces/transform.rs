//! Piece orientation: quarter-turn rotation and mirror flip.
//!
//! An orientation is applied in a fixed order: mirror across the y-axis
//! (if flipped), then rotate, then normalize back to the origin. Flipping
//! and rotating do not commute, so the order matters for which of the eight
//! orientations a given `Transform` names.

use serde::{Deserialize, Serialize};

use super::shape::{Cell, Cells, Shape};

/// One of the eight orientations of the dihedral group of the square.
///
/// Symmetric pieces produce repeated results for some transforms; nothing
/// here deduplicates them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transform {
    rotation: u8,
    flipped: bool,
}

impl Transform {
    /// No rotation, not flipped.
    pub const IDENTITY: Self = Self {
        rotation: 0,
        flipped: false,
    };

    /// Create a transform. `rotation` counts quarter turns and is taken mod 4.
    #[must_use]
    pub const fn new(rotation: u8, flipped: bool) -> Self {
        Self {
            rotation: rotation % 4,
            flipped,
        }
    }

    /// Quarter turns, in `0..4`.
    #[must_use]
    pub const fn rotation(self) -> u8 {
        self.rotation
    }

    #[must_use]
    pub const fn is_flipped(self) -> bool {
        self.flipped
    }

    /// One more quarter turn.
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self::new(self.rotation + 1, self.flipped)
    }

    /// Toggle the mirror flip, keeping the rotation.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self::new(self.rotation, !self.flipped)
    }

    /// All eight orientations, unflipped first.
    pub fn all() -> impl Iterator<Item = Transform> {
        [false, true]
            .into_iter()
            .flat_map(|flipped| (0..4).map(move |rotation| Transform::new(rotation, flipped)))
    }

    /// Orient `cells` and normalize the result.
    #[must_use]
    pub fn apply(self, cells: &[Cell]) -> Shape {
        transform(cells, u32::from(self.rotation), self.flipped)
    }
}

/// Orient a set of offsets: flip, then `rotation_steps` quarter turns, then
/// normalize so the bounding box touches `(0, 0)`.
///
/// Each quarter turn maps `(x, y)` to `(y, -x)`. Any step count is accepted;
/// four steps are a full turn.
///
/// Offsets are piece-sized. Coordinates must stay within `-2^30..2^30` so
/// that negation and normalization cannot overflow.
#[must_use]
pub fn transform(cells: &[Cell], rotation_steps: u32, flipped: bool) -> Shape {
    let mut out: Cells = cells.iter().copied().collect();

    if flipped {
        for cell in &mut out {
            cell.x = -cell.x;
        }
    }
    for _ in 0..rotation_steps % 4 {
        for cell in &mut out {
            *cell = Cell::new(cell.y, -cell.x);
        }
    }

    Shape::from_cells(out).normalized()
}

/// Absolute board cells for a piece in the given orientation at `anchor`.
///
/// Used both for legality checks and for previewing a placement.
#[must_use]
pub fn candidate_cells(cells: &[Cell], transform: Transform, anchor: Cell) -> Cells {
    transform.apply(cells).at(anchor)
}
