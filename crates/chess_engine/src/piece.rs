//! Pieces owned by a [`Position`](crate::Position)
//!
//! A piece carries the state its kind's rules depend on: where it stands, how
//! often it has moved (castling rights, pawn double step) and the last few
//! tiles it stood on (stale-tile filter). Pieces live in the position's arena
//! and are referred to by [`PieceId`]; a captured piece keeps its slot so undo
//! can put the very same piece back.

use crate::constants::{RECENT_TILES, STALE_VISITS};
use crate::tile::Tile;
use crate::types::{Color, PieceKind};

/// Handle to a piece inside one position's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Fixed-size window of the most recent tiles a piece landed on, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecentTiles {
    slots: [Option<Tile>; RECENT_TILES],
}

impl RecentTiles {
    /// Record a landing; returns the oldest entry, which falls off the front
    pub fn push(&mut self, tile: Tile) -> Option<Tile> {
        let evicted = self.slots[0];
        self.slots.rotate_left(1);
        self.slots[RECENT_TILES - 1] = Some(tile);
        evicted
    }

    /// Forget the newest landing and put back the entry [`RecentTiles::push`] evicted
    pub fn unpush(&mut self, evicted: Option<Tile>) {
        self.slots.rotate_right(1);
        self.slots[0] = evicted;
    }

    pub fn visits(&self, tile: Tile) -> usize {
        self.slots.iter().filter(|slot| **slot == Some(tile)).count()
    }

    /// True when `tile` was visited often enough to be skipped
    pub fn is_stale(&self, tile: Tile) -> bool {
        self.visits(tile) >= STALE_VISITS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) tile: Tile,
    pub(crate) move_count: u32,
    pub(crate) recent: RecentTiles,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color, tile: Tile) -> Self {
        Self {
            kind,
            color,
            tile,
            move_count: 0,
            recent: RecentTiles::default(),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn tile(&self) -> Tile {
        self.tile
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    pub fn recent_tiles(&self) -> &RecentTiles {
        &self.recent
    }

    /// Bookkeeping shared by every kind after it lands on `to`; returns the
    /// recent tile that dropped out of the window so undo can restore it
    pub(crate) fn record_move(&mut self, to: Tile) -> Option<Tile> {
        self.move_count += 1;
        self.recent.push(to)
    }

    /// Reverse of [`Piece::record_move`]
    pub(crate) fn unrecord_move(&mut self, evicted: Option<Tile>) {
        self.move_count -= 1;
        self.recent.unpush(evicted);
    }

    /// Tile offset by `(df, dr)` as seen from this piece's side of the board:
    /// positive `dr` is toward the opponent for either color
    #[inline]
    pub(crate) fn relative(&self, df: i8, dr: i8) -> Option<Tile> {
        let sign = self.color.forward();
        self.tile.offset(df * sign, dr * sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(name: &str) -> Tile {
        name.parse().unwrap()
    }

    #[test]
    fn test_recent_tiles_push_then_unpush_restores() {
        let mut recent = RecentTiles::default();
        for name in ["a1", "b2", "c3", "d4", "e5", "f6", "g7"] {
            recent.push(tile(name));
        }
        let before = recent;

        let evicted = recent.push(tile("h8"));
        assert_eq!(evicted, Some(tile("b2")));
        assert_ne!(recent, before);

        recent.unpush(evicted);
        assert_eq!(recent, before);
    }

    #[test]
    fn test_stale_after_three_visits() {
        let mut recent = RecentTiles::default();
        let a = tile("a1");
        let b = tile("a2");
        recent.push(a);
        recent.push(b);
        recent.push(a);
        recent.push(b);
        assert!(!recent.is_stale(a));
        recent.push(a);
        assert!(recent.is_stale(a));
        assert!(!recent.is_stale(b));
    }

    #[test]
    fn test_relative_offsets_mirror_for_black() {
        let white = Piece::new(PieceKind::Pawn, Color::White, tile("e2"));
        let black = Piece::new(PieceKind::Pawn, Color::Black, tile("e7"));
        assert_eq!(white.relative(0, 1), Some(tile("e3")));
        assert_eq!(black.relative(0, 1), Some(tile("e6")));
        assert_eq!(white.relative(1, 1), Some(tile("f3")));
        assert_eq!(black.relative(1, 1), Some(tile("d6")));
    }
}
