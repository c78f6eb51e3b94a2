//! # rust-blokus
//!
//! Placement rule engine for a four-seat polyomino territory game played on
//! a square grid.
//!
//! ## Design Principles
//!
//! 1. **Explicit session**: All state lives in a `GameSession` the caller
//!    owns and passes by reference. There is no global game.
//!
//! 2. **Rejections are values**: An illegal move returns a `GameError`
//!    naming the broken rule. The session is unchanged.
//!
//! 3. **Pure geometry**: Orientation and legality checks never touch the
//!    board; only accepted placements write to it.
//!
//! ## Modules
//!
//! - `core`: Seats, configuration, moves, errors, session and turn order
//! - `pieces`: Cells, shapes, orientation, the 21-piece catalog
//! - `board`: The ownership grid
//! - `rules`: Legality, scoring, legal move enumeration
//!
//! ## Example
//!
//! ```
//! use rust_blokus::{Cell, GameSession, PlayerId, Transform};
//!
//! let mut session = GameSession::standard();
//! let p0 = PlayerId::new(0);
//!
//! session.attempt_placement(p0, "1", Transform::IDENTITY, Cell::new(0, 0)).unwrap();
//!
//! assert_eq!(session.score_for(p0), 1);
//! assert_eq!(session.current_player(), PlayerId::new(1));
//! ```

pub mod core;
pub mod pieces;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Color, ConfigError, GameConfig, GameError, GameSession, PlacementError,
    PlayerId, PlayerMap, PlayerState, PLAYER_COUNT,
};

pub use crate::pieces::{
    all_pieces, candidate_cells, transform, Cell, Cells, Piece, PieceCatalog, PieceId,
    PieceSet, Shape, Transform,
};

pub use crate::board::{Board, CellState};

pub use crate::rules::{check_placement, is_legal, GameResult};
