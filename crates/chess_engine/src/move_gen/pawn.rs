//! Pawn move generation
//!
//! Handles pawn-specific move generation:
//! - Single push onto an empty tile
//! - Double push from an unmoved pawn when both tiles ahead are empty
//! - Diagonal captures onto enemy pieces only
//!
//! En passant is not supported. Promotion happens when the move is applied,
//! see [`Position::apply_move`](crate::Position::apply_move); a pawn reaching
//! the far rank always becomes a queen.

use super::{MoveSink, Target};
use crate::piece::Piece;
use crate::position::Position;

pub(crate) fn generate_pawn_moves(position: &Position, piece: &Piece, sink: &mut MoveSink) {
    if let Some(one) = piece.relative(0, 1) {
        if sink.target(position, one) == Target::Empty {
            sink.quiet(one);
            if let Some(two) = piece.relative(0, 2) {
                if !piece.has_moved() && sink.target(position, two) == Target::Empty {
                    sink.quiet(two);
                }
            }
        }
    }

    for df in [1, -1] {
        if let Some(diagonal) = piece.relative(df, 1) {
            if sink.target(position, diagonal) == Target::Enemy {
                sink.capture(diagonal);
            }
        }
    }
}
