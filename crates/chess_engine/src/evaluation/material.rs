//! Material evaluation
//!
//! Counts the piece values of one side.

use crate::constants::figure_value;
use crate::position::Position;
use crate::types::Color;

/// Sum of the values of `side`'s live pieces
pub fn material(position: &Position, side: Color) -> i32 {
    position
        .pieces(side)
        .iter()
        .map(|&id| figure_value(position.piece(id).kind()))
        .sum()
}
