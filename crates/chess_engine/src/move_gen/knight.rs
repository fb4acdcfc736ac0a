//! Knight move generation
//!
//! Knights jump in an L-shape and ignore anything standing in between. A
//! destination is usable when it is empty or holds an enemy piece.

use super::MoveSink;
use crate::constants::KNIGHT_OFFSETS;
use crate::piece::Piece;
use crate::position::Position;

pub(crate) fn generate_knight_moves(position: &Position, piece: &Piece, sink: &mut MoveSink) {
    for &(df, dr) in &KNIGHT_OFFSETS {
        if let Some(to) = piece.relative(df, dr) {
            sink.step(position, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{pseudo_legal_moves, CastlingScan};
    use crate::position::Position;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_knight_jumps_over_pieces() {
        let mut pos = Position::empty();
        let knight = pos.place(PieceKind::Knight, Color::White, "b1".parse().unwrap());
        for name in ["a2", "b2", "c2", "a1", "c1"] {
            pos.place(PieceKind::Pawn, Color::White, name.parse().unwrap());
        }
        pos.place(PieceKind::Pawn, Color::Black, "c3".parse().unwrap());
        pos.place(PieceKind::Pawn, Color::White, "d2".parse().unwrap());

        let moves = pseudo_legal_moves(&pos, knight, CastlingScan::Skip);
        let targets: Vec<String> = moves.iter().map(|mv| mv.to.to_string()).collect();
        assert_eq!(targets, vec!["c3", "a3"]);
        assert!(moves[0].capture);
    }
}
