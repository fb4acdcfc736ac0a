//! Move descriptors
//!
//! A [`Move`] says which tile a piece leaves and which it lands on. Generators
//! set the capture flag; [`Position::apply_move`](crate::Position::apply_move)
//! fills in the captured piece and the promoted pawn on the copy it keeps in
//! its history, so undo knows exactly what to put back. Applying and undoing
//! are the position's job, never the move's.

use crate::piece::PieceId;
use crate::tile::Tile;
use std::fmt;

#[derive(Debug, Clone, Copy, Eq)]
pub struct Move {
    pub from: Tile,
    pub to: Tile,
    pub capture: bool,
    pub captured: Option<PieceId>,
    pub promoted: Option<PieceId>,
}

impl Move {
    /// A move onto an empty tile
    pub fn quiet(from: Tile, to: Tile) -> Self {
        Self {
            from,
            to,
            capture: false,
            captured: None,
            promoted: None,
        }
    }

    /// A move onto a tile held by an enemy piece
    pub fn capture(from: Tile, to: Tile) -> Self {
        Self {
            capture: true,
            ..Self::quiet(from, to)
        }
    }

    /// Moves are the same when they connect the same tiles and take the same
    /// piece; the promotion marker and flag follow from those
    pub fn same_as(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to && self.captured == other.captured
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
