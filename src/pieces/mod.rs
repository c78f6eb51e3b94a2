//! Piece geometry: cells, shapes, orientation, and the fixed piece set.
//!
//! ## Key Types
//!
//! - `Cell`: integer grid coordinate
//! - `Shape`: list of cell offsets, normalized to the origin
//! - `Transform`: one of eight rotation/flip orientations
//! - `Piece` / `PieceCatalog`: the 21 static piece definitions
//! - `PieceSet`: bitset of piece ids

pub mod shape;
pub mod transform;
pub mod catalog;

pub use shape::{Cell, Cells, Shape};
pub use transform::{candidate_cells, transform, Transform};
pub use catalog::{all_pieces, Piece, PieceCatalog, PieceId, PieceSet};
