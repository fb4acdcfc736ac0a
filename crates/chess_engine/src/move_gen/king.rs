//! King move generation
//!
//! Handles king-specific move generation. Kings step one tile in any
//! direction onto an empty tile or an enemy piece.
//!
//! ## Castling
//!
//! With [`CastlingScan::Consider`] a king that has never moved, stands on the
//! e-file and is not in check may also move two files toward an unmoved rook
//! of its own color, provided every tile between them is empty:
//!
//! - kingside: f and g empty, rook on h, king lands on g
//! - queenside: d, c and b empty, rook on a, king lands on c
//!
//! The tiles the king crosses are not tested for attacks. The rook is moved by
//! [`Position::apply_move`](crate::Position::apply_move) in the same step.

use super::{CastlingScan, MoveSink, Target};
use crate::constants::KING_OFFSETS;
use crate::piece::Piece;
use crate::position::Position;
use crate::tile::Tile;
use crate::types::PieceKind;

const KING_FILE: u8 = 5;

pub(crate) fn generate_king_moves(
    position: &Position,
    piece: &Piece,
    castling: CastlingScan,
    sink: &mut MoveSink,
) {
    for &(df, dr) in &KING_OFFSETS {
        if let Some(to) = piece.relative(df, dr) {
            sink.step(position, to);
        }
    }

    if castling == CastlingScan::Skip || piece.has_moved() || piece.tile().file() != KING_FILE {
        return;
    }

    // Own right first, mirrored for black
    let destinations: Vec<Tile> = [2, -2]
        .into_iter()
        .filter_map(|df| piece.relative(df, 0))
        .filter(|&to| castling_path_clear(position, piece, to, sink))
        .collect();
    if destinations.is_empty() || position.is_in_check(piece.color()) {
        return;
    }
    for to in destinations {
        sink.quiet(to);
    }
}

/// Rook in place and nothing between it and the king
fn castling_path_clear(position: &Position, king: &Piece, to: Tile, sink: &MoveSink) -> bool {
    let rank = king.tile().rank() as i8;
    let (rook_file, between) = if to.file() > king.tile().file() {
        (8, 6..=7)
    } else {
        (1, 2..=4)
    };

    let rook_ready = Tile::new(rook_file, rank)
        .and_then(|tile| position.occupant(tile))
        .is_some_and(|rook| rook.kind() == PieceKind::Rook && rook.color() == king.color() && !rook.has_moved());

    rook_ready
        && between
            .filter_map(|file| Tile::new(file, rank))
            .all(|tile| sink.target(position, tile) == Target::Empty)
}
