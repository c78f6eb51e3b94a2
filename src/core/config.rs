//! Game configuration.
//!
//! A `GameConfig` is fixed when a session starts. The standard game is a
//! 20×20 board; smaller boards are useful for tests and puzzles.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;
use crate::pieces::Cell;

/// Side length of the standard board.
pub const STANDARD_BOARD_SIZE: usize = 20;

/// Smallest board that still fits the longest piece.
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest supported board.
pub const MAX_BOARD_SIZE: usize = 255;

/// Complete game configuration.
///
/// Deserialization applies the same board size limits as the builder and
/// fails with a `ConfigError` message instead of panicking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    /// Squares per board side.
    pub board_size: usize,

    /// Mark a seat as passed when it places its last piece.
    ///
    /// Without this a seat that runs out of pieces is skipped forever but
    /// never passes, so the all-passed end condition can't be reached.
    pub auto_pass_exhausted: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZE,
            auto_pass_exhausted: true,
        }
    }
}

impl GameConfig {
    /// The 20×20 four-seat game.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Set the board side length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        assert!(size >= MIN_BOARD_SIZE, "Board size must be at least {}", MIN_BOARD_SIZE);
        assert!(size <= MAX_BOARD_SIZE, "Board size must be at most {}", MAX_BOARD_SIZE);
        self.board_size = size;
        self
    }

    /// Enable or disable passing automatically on an empty inventory.
    #[must_use]
    pub fn with_auto_pass_exhausted(mut self, enabled: bool) -> Self {
        self.auto_pass_exhausted = enabled;
        self
    }

    /// Check the configuration without panicking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            Ok(())
        } else {
            Err(ConfigError::BoardSize(self.board_size))
        }
    }

    /// The board corner a seat must cover with its first piece.
    ///
    /// Seats go clockwise from the top-left: 0 top-left, 1 top-right,
    /// 2 bottom-right, 3 bottom-left.
    #[must_use]
    pub fn start_corner(&self, player: PlayerId) -> Cell {
        let far = self.board_size as i32 - 1;
        match player.index() % 4 {
            0 => Cell::new(0, 0),
            1 => Cell::new(far, 0),
            2 => Cell::new(far, far),
            _ => Cell::new(0, far),
        }
    }
}

impl<'de> Deserialize<'de> for GameConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            board_size: usize,
            auto_pass_exhausted: bool,
        }

        let fields = Fields::deserialize(deserializer)?;
        let config = GameConfig {
            board_size: fields.board_size,
            auto_pass_exhausted: fields.auto_pass_exhausted,
        };
        config.validate().map_err(serde::de::Error::custom)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::standard();
        assert_eq!(config.board_size, 20);
        assert!(config.auto_pass_exhausted);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_board_size(7)
            .with_auto_pass_exhausted(false);

        assert_eq!(config.board_size, 7);
        assert!(!config.auto_pass_exhausted);
    }

    #[test]
    fn test_start_corners() {
        let config = GameConfig::standard();
        assert_eq!(config.start_corner(PlayerId::new(0)), Cell::new(0, 0));
        assert_eq!(config.start_corner(PlayerId::new(1)), Cell::new(19, 0));
        assert_eq!(config.start_corner(PlayerId::new(2)), Cell::new(19, 19));
        assert_eq!(config.start_corner(PlayerId::new(3)), Cell::new(0, 19));

        let small = GameConfig::standard().with_board_size(5);
        assert_eq!(small.start_corner(PlayerId::new(2)), Cell::new(4, 4));
    }

    #[test]
    #[should_panic(expected = "at least 5")]
    fn test_board_too_small() {
        let _ = GameConfig::standard().with_board_size(4);
    }

    #[test]
    fn test_deserialize_rejects_bad_board_size() {
        for size in [0, 4, 256] {
            let json = format!(r#"{{"board_size":{size},"auto_pass_exhausted":true}}"#);
            let err = serde_json::from_str::<GameConfig>(&json).unwrap_err();
            assert!(err.to_string().contains("outside 5..=255"), "{err}");
        }

        let config: GameConfig =
            serde_json::from_str(r#"{"board_size":5,"auto_pass_exhausted":false}"#).unwrap();
        assert_eq!(config, GameConfig::standard().with_board_size(5).with_auto_pass_exhausted(false));
    }

    #[test]
    fn test_validate() {
        assert_eq!(GameConfig::standard().validate(), Ok(()));
        let bad = GameConfig { board_size: 0, ..GameConfig::standard() };
        assert_eq!(bad.validate(), Err(ConfigError::BoardSize(0)));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::standard().with_board_size(14);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
