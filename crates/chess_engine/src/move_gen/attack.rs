//! Attack detection and check
//!
//! A side is in check when any pseudo-legal move of the opposing side lands
//! on its king's tile. The opponent's moves are generated with
//! [`CastlingScan::Skip`]: a castling move never captures, and considering it
//! would need check detection again.
//!
//! The stale-tile filter does not apply here. A piece that avoids a tile for
//! repetition's sake still attacks it.

use super::{pseudo_legal_moves, CastlingScan};
use crate::position::Position;
use crate::tile::Tile;
use crate::types::Color;

impl Position {
    /// True when a piece of `by` could move onto `tile`
    pub fn is_attacked(&self, tile: Tile, by: Color) -> bool {
        self.pieces(by).iter().any(|&id| {
            pseudo_legal_moves(self, id, CastlingScan::Skip)
                .iter()
                .any(|mv| mv.to == tile)
        })
    }

    /// True when `side`'s king stands on an attacked tile; false without a king
    pub fn is_in_check(&self, side: Color) -> bool {
        self.king(side)
            .map(|king| self.is_attacked(self.piece(king).tile(), side.opponent()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::moves::Move;
    use crate::position::Position;
    use crate::tile::Tile;
    use crate::types::{Color, PieceKind};

    fn tile(name: &str) -> Tile {
        name.parse().unwrap()
    }

    #[test]
    fn test_start_position_is_quiet() {
        let pos = Position::new();
        assert!(!pos.is_in_check(Color::White));
        assert!(!pos.is_in_check(Color::Black));
    }

    #[test]
    fn test_blocked_ray_does_not_check() {
        let mut pos = Position::empty();
        pos.place(PieceKind::King, Color::White, tile("e1"));
        pos.place(PieceKind::Rook, Color::Black, tile("e8"));
        assert!(pos.is_in_check(Color::White));
        pos.place(PieceKind::Bishop, Color::White, tile("e4"));
        assert!(!pos.is_in_check(Color::White));
    }

    #[test]
    fn test_pawn_attacks_diagonally_only() {
        let mut pos = Position::empty();
        pos.place(PieceKind::King, Color::Black, tile("e5"));
        pos.place(PieceKind::Pawn, Color::White, tile("e4"));
        assert!(!pos.is_in_check(Color::Black));
        pos.place(PieceKind::Pawn, Color::White, tile("d4"));
        assert!(pos.is_in_check(Color::Black));
    }

    #[test]
    fn test_no_king_no_check() {
        let mut pos = Position::empty();
        pos.place(PieceKind::Queen, Color::Black, tile("d8"));
        assert!(!pos.is_in_check(Color::White));
    }

    #[test]
    fn test_check_after_move() {
        let mut pos = Position::new();
        for (from, to) in [("e2", "e4"), ("f7", "f6"), ("d1", "h5")] {
            assert!(pos.apply_move(Move::quiet(tile(from), tile(to)), false));
        }
        assert!(pos.is_in_check(Color::Black));
        assert!(!pos.is_in_check(Color::White));
    }
}
