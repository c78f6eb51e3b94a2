//! Game rules over a `GameSession`.
//!
//! - `validator`: whether a candidate placement is legal, and why not
//! - `scoring`: cell counts and the final result
//! - `engine`: enumeration of legal placements
//!
//! Turn order lives with the session in `core::state`.

pub mod validator;
pub mod scoring;
pub mod engine;

pub use validator::{check_placement, is_legal};
pub use scoring::{result, score_for, scores, GameResult};
pub use engine::{distinct_orientations, has_legal_move, legal_placements};
