//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces move any number of tiles along a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction the ray is walked one tile at a time from the piece:
//! 1. An empty tile is a quiet move and the walk continues
//! 2. An enemy piece is a capture and the walk stops
//! 3. An ally stops the walk without adding a move
//! 4. The board edge stops the walk
//!
//! Directions are mirrored for black, see [`super`].

use super::{MoveSink, Target};
use crate::piece::Piece;
use crate::position::Position;

/// Walk every ray in `directions` from `piece` and add the reachable tiles
pub(crate) fn generate_sliding_moves(
    position: &Position,
    piece: &Piece,
    directions: &[(i8, i8)],
    sink: &mut MoveSink,
) {
    let sign = piece.color().forward();
    for &(df, dr) in directions {
        let mut current = piece.tile();
        while let Some(next) = current.offset(df * sign, dr * sign) {
            if sink.step(position, next) != Target::Empty {
                break;
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{pseudo_legal_moves, CastlingScan};
    use crate::position::Position;
    use crate::tile::Tile;
    use crate::types::{Color, PieceKind};

    fn tile(name: &str) -> Tile {
        name.parse().unwrap()
    }

    #[test]
    fn test_rays_never_jump_occupied_tiles() {
        let mut pos = Position::empty();
        let queen = pos.place(PieceKind::Queen, Color::White, tile("d1"));
        pos.place(PieceKind::Pawn, Color::White, tile("d2"));
        pos.place(PieceKind::Knight, Color::Black, tile("f3"));
        pos.place(PieceKind::Pawn, Color::White, tile("c2"));

        let moves = pseudo_legal_moves(&pos, queen, CastlingScan::Consider);
        let targets: Vec<String> = moves.iter().map(|mv| mv.to.to_string()).collect();

        assert!(!targets.contains(&"d3".to_string()));
        assert!(!targets.contains(&"b3".to_string()));
        assert!(!targets.contains(&"g4".to_string()));
        assert!(targets.contains(&"e2".to_string()));
        assert_eq!(targets[0], "f3");
        assert!(moves[0].capture);
        // e2, f3 on the diagonal plus a1..c1 and e1..h1 on the rank
        assert_eq!(moves.len(), 2 + 3 + 4);
    }
}
