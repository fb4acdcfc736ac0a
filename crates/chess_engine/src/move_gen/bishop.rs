//! Bishop move generation
//!
//! Bishops slide along the four diagonals.

use super::sliding::generate_sliding_moves;
use super::MoveSink;
use crate::constants::DIAGONALS;
use crate::piece::Piece;
use crate::position::Position;

pub(crate) fn generate_bishop_moves(position: &Position, piece: &Piece, sink: &mut MoveSink) {
    generate_sliding_moves(position, piece, &DIAGONALS, sink);
}

#[cfg(test)]
mod tests {
    use super::super::{pseudo_legal_moves, CastlingScan};
    use crate::position::Position;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_open_board_bishop() {
        let mut pos = Position::empty();
        let bishop = pos.place(PieceKind::Bishop, Color::Black, "d4".parse().unwrap());
        assert_eq!(pseudo_legal_moves(&pos, bishop, CastlingScan::Skip).len(), 13);
    }
}
