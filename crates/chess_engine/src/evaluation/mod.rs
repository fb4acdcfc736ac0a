//! Position evaluation with piece-square tables
//!
//! Scores a side of a [`Position`](crate::Position) using:
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables)
//! - Mobility (number of legal moves)
//! - Checkmate and stalemate sentinels
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material count of one side
//! - `position` - Full side score and the relative score the search maximizes

mod material;
mod position;
mod pst;

pub use material::material;
pub use pst::pst_value;
