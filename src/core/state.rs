//! Session state and turn control.
//!
//! ## PlayerState
//!
//! Per-seat progress: which pieces are used, whether the seat has made its
//! first placement, and whether it passed on its latest turn.
//!
//! ## GameSession
//!
//! Everything one game needs: configuration, catalog, board, seats, whose
//! turn it is, and the log of accepted moves. A caller owns the session and
//! passes it by reference; there is no shared global game.
//!
//! ## Turn order
//!
//! After every accepted move the turn passes to the next seat in order that
//! still holds a piece. The scan looks at inventories only, so a seat that
//! passed with pieces left gets the turn again when it comes round. The game
//! is over once every seat's pass flag is set at the same time.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::error::GameError;
use super::player::{PlayerId, PlayerMap, PLAYER_COUNT};
use crate::board::Board;
use crate::pieces::{candidate_cells, Cell, Cells, Piece, PieceCatalog, PieceSet, Transform};
use crate::rules::validator::check_placement;

/// Per-seat progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Pieces already on the board. Only grows.
    pub used: PieceSet,

    /// Set by the seat's first successful placement.
    pub first_done: bool,

    /// Set by passing, cleared by placing.
    pub passed: bool,
}

impl PlayerState {
    /// True once every catalog piece has been placed.
    #[must_use]
    pub fn is_exhausted(&self, catalog: &PieceCatalog) -> bool {
        self.used.len() >= catalog.len()
    }
}

/// One game in progress.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    catalog: PieceCatalog,
    board: Board,
    players: PlayerMap<PlayerState>,
    current: PlayerId,
    turn_number: u32,
    history: Vector<ActionRecord>,
}

impl GameSession {
    /// Start a game: empty board, full inventories, seat 0 to move.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            config,
            catalog: PieceCatalog::standard(),
            players: PlayerMap::with_default(),
            current: PlayerId::new(0),
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Start a standard 20×20 game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(GameConfig::standard())
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The seat to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player_state(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Turn number, starting at 1 and advancing with every accepted move.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The seat's unplaced pieces, in catalog order.
    pub fn available_pieces(&self, player: PlayerId) -> impl Iterator<Item = &'static Piece> + '_ {
        let used = self.players[player].used;
        self.catalog.iter().filter(move |p| !used.contains(p.id))
    }

    /// True when every seat has passed and none has placed since.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.values().all(|s| s.passed)
    }

    // === Moves ===

    /// Place `piece_name` for `player`, oriented by `transform`, at `anchor`.
    ///
    /// Returns the board cells covered. On rejection nothing changes.
    pub fn attempt_placement(
        &mut self,
        player: PlayerId,
        piece_name: &str,
        transform: Transform,
        anchor: Cell,
    ) -> Result<Cells, GameError> {
        self.check_can_move(player)?;

        let piece = self
            .catalog
            .by_name(piece_name)
            .ok_or_else(|| GameError::UnknownPiece(piece_name.to_string()))?;

        self.place_piece(player, piece, transform, anchor)
    }

    /// Give up this turn. The board is untouched.
    pub fn pass(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.check_can_move(player)?;

        self.players[player].passed = true;
        self.record(player, Action::Pass);
        debug!(%player, turn = self.turn_number, "player passed");

        self.advance_turn();
        Ok(())
    }

    /// Apply a move in `Action` form.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<(), GameError> {
        match *action {
            Action::Pass => self.pass(player),
            Action::Place {
                piece,
                transform,
                anchor,
            } => {
                self.check_can_move(player)?;
                let piece = self
                    .catalog
                    .get(piece)
                    .ok_or_else(|| GameError::UnknownPiece(piece.to_string()))?;
                self.place_piece(player, piece, transform, anchor).map(|_| ())
            }
        }
    }

    /// Hand the turn to the next seat, in order, that still holds a piece.
    ///
    /// Checks at most one full round. Pass flags are not consulted. If every
    /// seat is out of pieces the turn comes back to the current seat.
    pub fn advance_turn(&mut self) -> PlayerId {
        let mut next = self.current;
        for _ in 0..PLAYER_COUNT {
            next = next.next();
            if !self.players[next].is_exhausted(&self.catalog) {
                break;
            }
        }
        self.current = next;
        trace!(player = %next, "turn advanced");

        if self.is_game_over() {
            info!(turn = self.turn_number, "all players passed, game over");
        }
        next
    }

    fn check_can_move(&self, player: PlayerId) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if player != self.current {
            return Err(GameError::NotYourTurn {
                expected: self.current,
                actual: player,
            });
        }
        Ok(())
    }

    fn place_piece(
        &mut self,
        player: PlayerId,
        piece: &'static Piece,
        transform: Transform,
        anchor: Cell,
    ) -> Result<Cells, GameError> {
        let state = self.players[player];
        if state.used.contains(piece.id) {
            return Err(GameError::PieceAlreadyUsed(piece.name.to_string()));
        }

        let cells = candidate_cells(piece.cells(), transform, anchor);
        let corner = self.config.start_corner(player);
        if let Err(reason) = check_placement(&self.board, player, !state.first_done, corner, &cells) {
            trace!(%player, piece = piece.name, %anchor, %reason, "placement rejected");
            return Err(reason.into());
        }

        self.board.place(&cells, player);

        let auto_pass = self.config.auto_pass_exhausted;
        let catalog_len = self.catalog.len();
        let state = &mut self.players[player];
        state.first_done = true;
        state.used.insert(piece.id);
        state.passed = false;
        if auto_pass && state.used.len() >= catalog_len {
            state.passed = true;
            debug!(%player, "last piece placed, passing automatically");
        }

        self.record(player, Action::place(piece.id, transform, anchor));
        debug!(%player, piece = piece.name, %anchor, turn = self.turn_number, "piece placed");

        self.advance_turn();
        Ok(cells)
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number));
        self.turn_number += 1;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::standard()
    }
}
