//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! One of the four seats at the table, `PlayerId(0)` through `PlayerId(3)`.
//! Each seat has a fixed colour and plays from its own board corner.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a game.
pub const PLAYER_COUNT: usize = 4;

/// Seat colour, used for display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Yellow,
    Red,
    Green,
}

/// Seat identifier.
///
/// Indices are 0-based and turn order follows them: 0, 1, 2, 3, 0, ...
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 % PLAYER_COUNT as u8 + 1) % PLAYER_COUNT as u8)
    }

    /// Seat colour.
    #[must_use]
    pub const fn color(self) -> Color {
        match self.0 % PLAYER_COUNT as u8 {
            0 => Color::Blue,
            1 => Color::Yellow,
            2 => Color::Red,
            _ => Color::Green,
        }
    }

    /// Iterate over all seats in turn order.
    ///
    /// ```
    /// use rust_blokus::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} ({:?})", self.0, self.color())
    }
}

/// Per-seat data storage with O(1) access.
///
/// Always holds exactly one entry per seat.
///
/// ## Example
///
/// ```
/// use rust_blokus::core::{PlayerId, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// score[PlayerId::new(1)] = 15;
///
/// assert_eq!(score[PlayerId::new(0)], 0);
/// assert_eq!(score[PlayerId::new(1)], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p2 = PlayerId::new(2);

        assert_eq!(p0.index(), 0);
        assert_eq!(p2.index(), 2);
        assert_eq!(p0.color(), Color::Blue);
        assert_eq!(p2.color(), Color::Red);
        assert_eq!(format!("{}", p0), "Player 0 (Blue)");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(PlayerId::new(0).next(), PlayerId::new(1));
        assert_eq!(PlayerId::new(3).next(), PlayerId::new(0));
        // Out-of-range ids fold into the four seats.
        assert_eq!(PlayerId::new(255).next(), PlayerId::new(0));
        assert_eq!(PlayerId::new(6).next(), PlayerId::new(3));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
    }

    #[test]
    fn test_player_map_mutation_and_iter() {
        let mut map: PlayerMap<bool> = PlayerMap::with_default();
        map[PlayerId::new(2)] = true;

        let flagged: Vec<_> = map.iter().filter(|(_, v)| **v).map(|(p, _)| p).collect();
        assert_eq!(flagged, vec![PlayerId::new(2)]);
        assert_eq!(map.values().count(), PLAYER_COUNT);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
