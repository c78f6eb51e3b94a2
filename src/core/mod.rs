//! Core engine types: seats, configuration, moves, errors, session state.
//!
//! `GameSession` is the aggregate callers hold; everything else here is
//! plain data it is built from.

pub mod player;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use player::{Color, PlayerId, PlayerMap, PLAYER_COUNT};
pub use config::{GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE, STANDARD_BOARD_SIZE};
pub use error::{ConfigError, GameError, PlacementError};
pub use action::{Action, ActionRecord};
pub use state::{GameSession, PlayerState};
