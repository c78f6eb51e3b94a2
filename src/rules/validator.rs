//! Placement legality.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the candidate covers at least one cell;
//! 2. every cell is on the board;
//! 3. every cell is empty;
//! 4. on a seat's first move, some cell is the seat's start corner (and
//!    nothing else is required);
//! 5. otherwise no cell shares an edge with the seat's own colour, and at
//!    least one cell touches the seat's own colour diagonally.
//!
//! Neighbours that fall off the board count as empty.

use crate::board::Board;
use crate::core::error::PlacementError;
use crate::core::player::PlayerId;
use crate::pieces::Cell;

/// Check a candidate against the board without modifying it.
///
/// `first_move` is true until the seat has placed a piece; `start_corner`
/// is the seat's assigned corner.
pub fn check_placement(
    board: &Board,
    player: PlayerId,
    first_move: bool,
    start_corner: Cell,
    cells: &[Cell],
) -> Result<(), PlacementError> {
    if cells.is_empty() {
        return Err(PlacementError::Empty);
    }
    if !cells.iter().all(|&c| board.in_bounds(c)) {
        return Err(PlacementError::OutOfBounds);
    }
    if !cells.iter().all(|&c| board.occupant_at(c).is_empty()) {
        return Err(PlacementError::Occupied);
    }

    if first_move {
        return if cells.contains(&start_corner) {
            Ok(())
        } else {
            Err(PlacementError::NotOnStartCorner)
        };
    }

    let mut corner_touch = false;
    for &cell in cells {
        if cell.edge_neighbors().iter().any(|&n| board.is_owned_by(n, player)) {
            return Err(PlacementError::EdgeAdjacentSameColor);
        }
        if !corner_touch {
            corner_touch = cell.corner_neighbors().iter().any(|&n| board.is_owned_by(n, player));
        }
    }

    if corner_touch {
        Ok(())
    } else {
        Err(PlacementError::NoCornerTouch)
    }
}

/// Boolean form of [`check_placement`].
#[must_use]
pub fn is_legal(
    board: &Board,
    player: PlayerId,
    first_move: bool,
    start_corner: Cell,
    cells: &[Cell],
) -> bool {
    check_placement(board, player, first_move, start_corner, cells).is_ok()
}
