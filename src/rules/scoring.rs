//! Cell-count scoring and the final result.
//!
//! A seat's score is the number of squares it owns. Scores are recounted
//! from the board on every call.

use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::GameSession;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// One seat has the highest score.
    Winner(PlayerId),
    /// Several seats share the highest score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a seat won or shared the win.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Squares owned by `player`.
#[must_use]
pub fn score_for(session: &GameSession, player: PlayerId) -> u32 {
    session.board().count_owned(player) as u32
}

/// Every seat's score.
#[must_use]
pub fn scores(session: &GameSession) -> PlayerMap<u32> {
    PlayerMap::new(|p| score_for(session, p))
}

/// The winner(s), or `None` while the game is still running.
#[must_use]
pub fn result(session: &GameSession) -> Option<GameResult> {
    if !session.is_game_over() {
        return None;
    }

    let scores = scores(session);
    let best = scores.values().copied().max()?;
    let mut leaders: Vec<_> = scores
        .iter()
        .filter(|(_, s)| **s == best)
        .map(|(p, _)| p)
        .collect();

    Some(if leaders.len() == 1 {
        GameResult::Winner(leaders.remove(0))
    } else {
        GameResult::Winners(leaders)
    })
}

impl GameSession {
    /// Squares owned by `player`.
    #[must_use]
    pub fn score_for(&self, player: PlayerId) -> u32 {
        score_for(self, player)
    }

    /// Every seat's score.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        scores(self)
    }

    /// The winner(s), or `None` while the game is still running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        result(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Cell, Transform};

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);
    const P3: PlayerId = PlayerId::new(3);

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(P1);
        assert!(!result.is_winner(P0));
        assert!(result.is_winner(P1));

        let tie = GameResult::Winners(vec![P0, P2]);
        assert!(tie.is_winner(P0));
        assert!(!tie.is_winner(P1));
        assert!(tie.is_winner(P2));
    }

    #[test]
    fn test_scores_follow_board() {
        let mut session = GameSession::standard();
        assert_eq!(session.scores(), PlayerMap::with_default());

        session
            .attempt_placement(P0, "I3", Transform::IDENTITY, Cell::new(0, 0))
            .unwrap();
        session
            .attempt_placement(P1, "2", Transform::IDENTITY, Cell::new(18, 0))
            .unwrap();

        assert_eq!(session.score_for(P0), 3);
        assert_eq!(session.score_for(P1), 2);
        assert_eq!(session.score_for(P2), 0);
    }

    #[test]
    fn test_result_none_while_running() {
        let session = GameSession::standard();
        assert_eq!(session.result(), None);
    }

    #[test]
    fn test_single_winner() {
        let mut session = GameSession::standard();
        session
            .attempt_placement(P0, "I5", Transform::IDENTITY, Cell::new(0, 0))
            .unwrap();
        session
            .attempt_placement(P1, "2", Transform::IDENTITY, Cell::new(18, 0))
            .unwrap();
        for player in [P2, P3, P0, P1] {
            session.pass(player).unwrap();
        }

        assert_eq!(session.result(), Some(GameResult::Winner(P0)));
    }

    #[test]
    fn test_tie_when_nobody_placed() {
        let mut session = GameSession::standard();
        for player in PlayerId::all() {
            session.pass(player).unwrap();
        }

        assert_eq!(session.result(), Some(GameResult::Winners(vec![P0, P1, P2, P3])));
    }
}
