//! Legal move enumeration.
//!
//! Lists every placement a seat could make right now. Callers use it to
//! offer a pass when nothing fits, or to drive scripted games.
//!
//! ## Implementation Notes
//!
//! - Orientations that give the same shape (symmetric pieces) are tried once.
//! - Anchors are limited to those that keep the oriented shape on the board.
//! - Pass is always legal for the seat to move and is not listed.

use rustc_hash::FxHashSet;

use super::validator::is_legal;
use crate::core::action::Action;
use crate::core::player::PlayerId;
use crate::core::state::GameSession;
use crate::pieces::{Cell, Piece, Shape, Transform};

/// Distinct orientations of a piece, with the first transform producing each.
#[must_use]
pub fn distinct_orientations(piece: &Piece) -> Vec<(Transform, Shape)> {
    let mut seen = FxHashSet::default();
    Transform::all()
        .map(|t| (t, t.apply(piece.cells())))
        .filter(|(_, shape)| seen.insert(shape.canonical()))
        .collect()
}

/// Every legal placement for `player` on the current board.
///
/// Does not check whose turn it is.
#[must_use]
pub fn legal_placements(session: &GameSession, player: PlayerId) -> Vec<Action> {
    let mut out = Vec::new();
    for_each_legal_placement(session, player, |action| {
        out.push(action);
        true
    });
    out
}

/// True if `player` has at least one legal placement.
#[must_use]
pub fn has_legal_move(session: &GameSession, player: PlayerId) -> bool {
    let mut found = false;
    for_each_legal_placement(session, player, |_| {
        found = true;
        false
    });
    found
}

/// Visit legal placements until `visit` returns false.
fn for_each_legal_placement(
    session: &GameSession,
    player: PlayerId,
    mut visit: impl FnMut(Action) -> bool,
) {
    let board = session.board();
    let state = session.player_state(player);
    let corner = session.config().start_corner(player);
    let n = board.size() as i32;

    for piece in session.available_pieces(player) {
        for (transform, shape) in distinct_orientations(piece) {
            let (w, h) = shape.extent();
            for y in 0..=(n - h) {
                for x in 0..=(n - w) {
                    let anchor = Cell::new(x, y);
                    let cells = shape.at(anchor);
                    if is_legal(board, player, !state.first_done, corner, &cells)
                        && !visit(Action::place(piece.id, transform, anchor))
                    {
                        return;
                    }
                }
            }
        }
    }
}

impl GameSession {
    /// Every legal placement for `player` on the current board.
    #[must_use]
    pub fn legal_placements(&self, player: PlayerId) -> Vec<Action> {
        legal_placements(self, player)
    }

    /// True if `player` has at least one legal placement.
    #[must_use]
    pub fn has_legal_move(&self, player: PlayerId) -> bool {
        has_legal_move(self, player)
    }
}
