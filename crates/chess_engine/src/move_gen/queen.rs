//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks: diagonal rays
//! are walked first, then orthogonal ones.

use super::sliding::generate_sliding_moves;
use super::MoveSink;
use crate::constants::{DIAGONALS, ORTHOGONALS};
use crate::piece::Piece;
use crate::position::Position;

pub(crate) fn generate_queen_moves(position: &Position, piece: &Piece, sink: &mut MoveSink) {
    generate_sliding_moves(position, piece, &DIAGONALS, sink);
    generate_sliding_moves(position, piece, &ORTHOGONALS, sink);
}

#[cfg(test)]
mod tests {
    use super::super::{pseudo_legal_moves, CastlingScan};
    use crate::position::Position;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_centre_queen() {
        let mut pos = Position::empty();
        let queen = pos.place(PieceKind::Queen, Color::White, "d4".parse().unwrap());
        assert_eq!(pseudo_legal_moves(&pos, queen, CastlingScan::Skip).len(), 27);
    }
}
