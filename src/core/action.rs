//! Moves and the move log.
//!
//! A seat's turn is either a placement (which piece, which orientation,
//! where) or a pass. Every accepted move is appended to the session log as
//! an `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::pieces::{Cell, PieceId, Transform};

/// One move.
///
/// ## Example
///
/// ```
/// use rust_blokus::core::Action;
/// use rust_blokus::pieces::{Cell, PieceId, Transform};
///
/// let place = Action::place(PieceId::new(0), Transform::IDENTITY, Cell::new(0, 0));
/// assert!(!place.is_pass());
/// assert!(Action::Pass.is_pass());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put `piece`, oriented by `transform`, with its origin at `anchor`.
    Place {
        piece: PieceId,
        transform: Transform,
        anchor: Cell,
    },
    /// Skip this turn.
    Pass,
}

impl Action {
    #[must_use]
    pub const fn place(piece: PieceId, transform: Transform, anchor: Cell) -> Self {
        Action::Place {
            piece,
            transform,
            anchor,
        }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }

    /// The piece placed, if any.
    #[must_use]
    pub const fn piece(&self) -> Option<PieceId> {
        match self {
            Action::Place { piece, .. } => Some(*piece),
            Action::Pass => None,
        }
    }
}

/// An accepted move with the turn it was made on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that moved.
    pub player: PlayerId,

    /// The move.
    pub action: Action,

    /// Turn number (starts at 1, one per accepted move).
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
