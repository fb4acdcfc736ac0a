//! Rook move generation
//!
//! Rooks slide along ranks and files. The castling rook relocation lives in
//! [`Position::apply_move`](crate::Position::apply_move), not here.

use super::sliding::generate_sliding_moves;
use super::MoveSink;
use crate::constants::ORTHOGONALS;
use crate::piece::Piece;
use crate::position::Position;

pub(crate) fn generate_rook_moves(position: &Position, piece: &Piece, sink: &mut MoveSink) {
    generate_sliding_moves(position, piece, &ORTHOGONALS, sink);
}

#[cfg(test)]
mod tests {
    use super::super::{pseudo_legal_moves, CastlingScan};
    use crate::position::Position;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_corner_rook() {
        let mut pos = Position::empty();
        let rook = pos.place(PieceKind::Rook, Color::White, "a1".parse().unwrap());
        assert_eq!(pseudo_legal_moves(&pos, rook, CastlingScan::Skip).len(), 14);
    }
}
