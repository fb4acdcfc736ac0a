//! Legal move filtering
//!
//! Turns a piece's pseudo-legal moves into legal ones:
//! 1. Destinations the piece stood on [`STALE_VISITS`] times within its last
//!    [`RECENT_TILES`] tiles are dropped, which keeps the engine from
//!    shuffling a piece back and forth forever
//! 2. Each remaining move is applied, the mover's king is tested for check,
//!    and the move is undone
//!
//! Results are cached per piece and tagged with the position's generation.
//!
//! [`STALE_VISITS`]: crate::constants::STALE_VISITS
//! [`RECENT_TILES`]: crate::constants::RECENT_TILES

use crate::make_unmake::MoveGuard;
use crate::move_gen::{pseudo_legal_moves, CastlingScan};
use crate::moves::Move;
use crate::piece::PieceId;
use crate::position::Position;
use crate::types::Color;

impl Position {
    /// Legal moves of the live piece `id`, captures first
    pub fn legal_moves_for(&mut self, id: PieceId) -> Vec<Move> {
        if let Some(moves) = self.cached_legal_moves(id) {
            return moves.to_vec();
        }

        let piece = self.piece(id);
        let color = piece.color();
        let recent = *piece.recent_tiles();
        let candidates = pseudo_legal_moves(self, id, CastlingScan::Consider);

        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            if recent.is_stale(mv.to) {
                continue;
            }
            let Some(guard) = MoveGuard::apply(self, mv) else {
                continue;
            };
            if !guard.is_in_check(color) {
                legal.push(mv);
            }
        }

        let slot = id.index();
        if self.legal_cache.len() <= slot {
            self.legal_cache.resize(slot + 1, None);
        }
        self.legal_cache[slot] = Some((self.generation(), legal.clone()));
        legal
    }

    /// Number of legal moves of `id`
    pub fn legal_move_count(&mut self, id: PieceId) -> usize {
        match self.cached_legal_moves(id) {
            Some(moves) => moves.len(),
            None => self.legal_moves_for(id).len(),
        }
    }

    /// Every legal move of `side`, piece by piece in list order
    pub fn legal_moves(&mut self, side: Color) -> Vec<Move> {
        let pieces = self.pieces(side).to_vec();
        let mut moves = Vec::new();
        for id in pieces {
            moves.extend(self.legal_moves_for(id));
        }
        moves
    }

    /// True when `side` has at least one legal move
    pub fn has_any_move(&mut self, side: Color) -> bool {
        let pieces = self.pieces(side).to_vec();
        pieces.into_iter().any(|id| self.legal_move_count(id) > 0)
    }

    /// True when the piece on `mv.from` may legally move to `mv.to`
    pub fn is_legal(&mut self, mv: &Move) -> bool {
        match self.piece_at(mv.from) {
            Some(id) => self.legal_moves_for(id).iter().any(|legal| legal.to == mv.to),
            None => false,
        }
    }

    fn cached_legal_moves(&self, id: PieceId) -> Option<&[Move]> {
        match self.legal_cache.get(id.index()) {
            Some(Some((generation, moves))) if *generation == self.generation() => Some(moves),
            _ => None,
        }
    }
}
