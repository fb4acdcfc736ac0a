//! Pseudo-legal move generation
//!
//! Generates every move a piece could make by its movement rules alone,
//! ignoring whether the move leaves its own king attacked. The legality
//! filter in [`crate::legality`] builds on these lists.
//!
//! ## Direction Convention
//!
//! Offsets are written from the moving piece's point of view and mirrored for
//! black on both axes, so "forward" is rank + 1 for white and rank - 1 for
//! black. The set of destinations is the same either way; only the order in
//! which they are discovered differs, which keeps black's lists the mirror
//! image of white's.
//!
//! ## Ordering
//!
//! Captures come first, the most recently discovered capture at the front,
//! followed by quiet moves in discovery order. Search tie-breaks keep the
//! first best move, so this order decides between equally scored moves.
//!
//! ## Module Organization
//!
//! - `sliding` - Ray walking shared by bishops, rooks and queens
//! - `bishop`, `rook`, `queen` - Sliding pieces
//! - `knight` - Knight jumps
//! - `king` - King steps and castling
//! - `pawn` - Pushes, double pushes and diagonal captures
//! - `attack` - Check detection

mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

use crate::moves::Move;
use crate::piece::{Piece, PieceId};
use crate::position::Position;
use crate::tile::Tile;
use crate::types::{Color, PieceKind};

/// Whether king move generation may add castling moves
///
/// Castling requires the king not to be in check, and check detection itself
/// generates the opponent's moves. Check detection passes [`CastlingScan::Skip`]
/// so the two never recurse into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingScan {
    Consider,
    Skip,
}

/// Generate the pseudo-legal moves of the live piece `id`
pub fn pseudo_legal_moves(position: &Position, id: PieceId, castling: CastlingScan) -> Vec<Move> {
    let piece = position.piece(id);
    let mut sink = MoveSink::new(piece);
    match piece.kind() {
        PieceKind::Pawn => pawn::generate_pawn_moves(position, piece, &mut sink),
        PieceKind::Knight => knight::generate_knight_moves(position, piece, &mut sink),
        PieceKind::Bishop => bishop::generate_bishop_moves(position, piece, &mut sink),
        PieceKind::Rook => rook::generate_rook_moves(position, piece, &mut sink),
        PieceKind::Queen => queen::generate_queen_moves(position, piece, &mut sink),
        PieceKind::King => king::generate_king_moves(position, piece, castling, &mut sink),
    }
    sink.finish()
}

/// What stands on a destination tile, as seen by the mover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Empty,
    Enemy,
    Ally,
}

/// Collects one piece's moves in generation order
pub(crate) struct MoveSink {
    from: Tile,
    color: Color,
    captures: Vec<Move>,
    quiet: Vec<Move>,
}

impl MoveSink {
    fn new(piece: &Piece) -> Self {
        Self {
            from: piece.tile(),
            color: piece.color(),
            captures: Vec::new(),
            quiet: Vec::with_capacity(16),
        }
    }

    pub(crate) fn target(&self, position: &Position, tile: Tile) -> Target {
        match position.occupant(tile) {
            None => Target::Empty,
            Some(other) if other.color() == self.color => Target::Ally,
            Some(_) => Target::Enemy,
        }
    }

    pub(crate) fn quiet(&mut self, to: Tile) {
        self.quiet.push(Move::quiet(self.from, to));
    }

    pub(crate) fn capture(&mut self, to: Tile) {
        self.captures.push(Move::capture(self.from, to));
    }

    /// Adds a move onto `to` unless an ally stands there; returns the target
    /// so ray walkers know whether to keep going
    pub(crate) fn step(&mut self, position: &Position, to: Tile) -> Target {
        let target = self.target(position, to);
        match target {
            Target::Empty => self.quiet(to),
            Target::Enemy => self.capture(to),
            Target::Ally => {}
        }
        target
    }

    fn finish(mut self) -> Vec<Move> {
        self.captures.reverse();
        self.captures.append(&mut self.quiet);
        self.captures
    }
}
