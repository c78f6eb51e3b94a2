//! Rejection reasons.
//!
//! Illegal moves are an ordinary part of play, so every rejection is a
//! value the caller can show to the user. Nothing here is fatal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use super::player::PlayerId;

/// Why a candidate placement breaks the placement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum PlacementError {
    #[error("placement covers no cells")]
    Empty,
    #[error("placement extends off the board")]
    OutOfBounds,
    #[error("placement overlaps an occupied square")]
    Occupied,
    #[error("first piece must cover the starting corner")]
    NotOnStartCorner,
    #[error("piece shares an edge with a piece of the same colour")]
    EdgeAdjacentSameColor,
    #[error("piece must touch a piece of the same colour at a corner")]
    NoCornerTouch,
}

/// Why a placement or pass request was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid placement: {0}")]
    InvalidPlacement(#[from] PlacementError),
    #[error("unknown piece {0:?}")]
    UnknownPiece(String),
    #[error("piece {0:?} has already been placed")]
    PieceAlreadyUsed(String),
    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: PlayerId, actual: PlayerId },
    #[error("the game is over")]
    GameOver,
}

/// Why a `GameConfig` is unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    BoardSize(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_error_converts() {
        let err: GameError = PlacementError::NoCornerTouch.into();
        assert_eq!(err, GameError::InvalidPlacement(PlacementError::NoCornerTouch));
        assert_eq!(
            err.to_string(),
            "invalid placement: piece must touch a piece of the same colour at a corner"
        );
    }

    #[test]
    fn test_turn_message() {
        let err = GameError::NotYourTurn {
            expected: PlayerId::new(1),
            actual: PlayerId::new(2),
        };
        assert_eq!(err.to_string(), "it is Player 1 (Yellow)'s turn, not Player 2 (Red)'s");
    }

    #[test]
    fn test_config_error_message() {
        assert_eq!(ConfigError::BoardSize(3).to_string(), "board size 3 is outside 5..=255");
    }
}
