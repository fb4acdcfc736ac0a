//! Board state with incremental apply/undo
//!
//! [`Position`] owns every piece that ever stood on the board in an arena and
//! refers to them through [`PieceId`] handles. Three views are kept in sync:
//!
//! - the 8x8 grid, indexed `[rank - 1][file - 1]`
//! - one live list per side, in setup order
//! - the history stack of applied moves with the bookkeeping to reverse them
//!
//! ## Apply / undo
//!
//! Search and the legality filter explore the tree by mutating one position in
//! place and undoing each move on the way back up. Every apply stores an
//! [`UndoInfo`] next to the move so the undo is exact: captured pieces return
//! to the very slot of the live list they left, the ring of recent tiles gets
//! its evicted entry back, and a promotion queen is dropped from the arena.
//!
//! ## Generations
//!
//! Each apply assigns a fresh generation id; undo restores the id the
//! position had before. Caches (legal moves per piece, score per side) are
//! tagged with the generation they were computed in, so a state reached again
//! through undo still hits its cache and a state reached through a different
//! move never does.

use crate::config::EvalSettings;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::moves::Move;
use crate::piece::{Piece, PieceId};
use crate::tile::Tile;
use crate::types::{Color, PieceKind};

/// Reversal data for a castling rook
#[derive(Debug, Clone, Copy)]
pub(crate) struct RookShift {
    rook: PieceId,
    from: Tile,
    to: Tile,
    evicted: Option<Tile>,
}

/// Reversal data for a pawn that became a queen
#[derive(Debug, Clone, Copy)]
pub(crate) struct Promotion {
    queen: PieceId,
    slot: usize,
}

/// Information needed to undo a move
#[derive(Debug, Clone, Copy)]
pub(crate) struct UndoInfo {
    mover: PieceId,
    evicted: Option<Tile>,
    captured_slot: Option<usize>,
    rook: Option<RookShift>,
    promotion: Option<Promotion>,
    generation: u64,
}

#[derive(Debug, Clone)]
pub(crate) struct HistoryEntry {
    pub(crate) mv: Move,
    undo: UndoInfo,
}

#[derive(Debug, Clone)]
pub struct Position {
    arena: Vec<Piece>,
    grid: [[Option<PieceId>; 8]; 8],
    live: [Vec<PieceId>; 2],
    history: Vec<HistoryEntry>,
    generation: u64,
    next_generation: u64,
    eval: EvalSettings,
    pub(crate) legal_cache: Vec<Option<(u64, Vec<Move>)>>,
    pub(crate) score_cache: [Option<(u64, i32)>; 2],
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// A board with no pieces
    pub fn empty() -> Self {
        Self {
            arena: Vec::with_capacity(40),
            grid: [[None; 8]; 8],
            live: [Vec::with_capacity(16), Vec::with_capacity(16)],
            history: Vec::new(),
            generation: 0,
            next_generation: 1,
            eval: EvalSettings::default(),
            legal_cache: Vec::new(),
            score_cache: [None; 2],
        }
    }

    /// Put a fresh piece on `tile`, replacing whatever stood there
    ///
    /// Meant for building positions before play starts; the history is left
    /// untouched, so placing pieces between moves makes later undos lie.
    pub fn place(&mut self, kind: PieceKind, color: Color, tile: Tile) -> PieceId {
        if let Some(previous) = self.piece_at(tile) {
            self.remove_live(previous);
        }
        let id = PieceId(self.arena.len() as u16);
        self.arena.push(Piece::new(kind, color, tile));
        self.live[color.index()].push(id);
        self.set_slot(tile, Some(id));
        self.advance_generation();
        id
    }

    #[inline]
    pub fn piece_at(&self, tile: Tile) -> Option<PieceId> {
        let (rank, file) = tile.index();
        self.grid[rank][file]
    }

    /// The piece standing on `tile`, if any
    #[inline]
    pub fn occupant(&self, tile: Tile) -> Option<&Piece> {
        self.piece_at(tile).map(|id| self.piece(id))
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.arena[id.index()]
    }

    /// Live pieces of one side in list order
    #[inline]
    pub fn pieces(&self, color: Color) -> &[PieceId] {
        &self.live[color.index()]
    }

    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.pieces(color)
            .iter()
            .copied()
            .find(|&id| self.piece(id).kind == PieceKind::King)
    }

    /// Applied moves, oldest first, as recorded (captured and promoted ids filled in)
    pub fn history(&self) -> impl Iterator<Item = &Move> + '_ {
        self.history.iter().map(|entry| &entry.mv)
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|entry| &entry.mv)
    }

    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn eval_settings(&self) -> &EvalSettings {
        &self.eval
    }

    /// Swap evaluation settings; cached scores are dropped since they no longer apply
    pub fn set_eval_settings(&mut self, settings: EvalSettings) {
        self.eval = settings;
        self.score_cache = [None; 2];
    }

    /// Apply `mv` to the board
    ///
    /// Returns `false` without touching anything when no piece stands on
    /// `mv.from`, when the destination holds a piece of the mover's own
    /// color, or, with `check_legality`, when `mv.to` is not one of the
    /// mover's legal destinations.
    pub fn apply_move(&mut self, mv: Move, check_legality: bool) -> bool {
        let Some(mover) = self.piece_at(mv.from) else {
            return false;
        };
        let color = self.piece(mover).color;
        let target = self.piece_at(mv.to);
        if mv.from == mv.to || target.is_some_and(|t| self.piece(t).color == color) {
            return false;
        }
        if check_legality && !self.legal_moves_for(mover).iter().any(|m| m.to == mv.to) {
            return false;
        }

        let captured_slot = target.map(|captured| self.remove_live(captured));
        self.set_slot(mv.from, None);
        self.set_slot(mv.to, Some(mover));
        let piece = &mut self.arena[mover.index()];
        piece.tile = mv.to;
        let evicted = piece.record_move(mv.to);
        let kind = piece.kind;

        let rook = match kind {
            PieceKind::King if mv.from.file().abs_diff(mv.to.file()) == 2 => self.shift_castling_rook(mv),
            _ => None,
        };
        let promotion = match kind {
            PieceKind::Pawn if mv.to.rank() == color.promotion_rank() => Some(self.promote(mover, color, mv.to)),
            _ => None,
        };

        let recorded = Move {
            capture: target.is_some(),
            captured: target,
            promoted: promotion.map(|_| mover),
            ..mv
        };
        let undo = UndoInfo {
            mover,
            evicted,
            captured_slot,
            rook,
            promotion,
            generation: self.generation,
        };
        self.history.push(HistoryEntry { mv: recorded, undo });
        self.advance_generation();
        true
    }

    /// Reverse the most recent move and return it as it was recorded
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::EmptyHistory`] when nothing has been applied.
    pub fn undo_move(&mut self) -> ChessEngineResult<Move> {
        let HistoryEntry { mv, undo } = self.history.pop().ok_or(ChessEngineError::EmptyHistory)?;
        let color = self.piece(undo.mover).color;

        if let Some(promotion) = undo.promotion {
            self.live[color.index()][promotion.slot] = undo.mover;
            debug_assert_eq!(promotion.queen.index() + 1, self.arena.len());
            self.arena.pop();
        }

        self.set_slot(mv.to, None);
        self.set_slot(mv.from, Some(undo.mover));
        let piece = &mut self.arena[undo.mover.index()];
        piece.tile = mv.from;
        piece.unrecord_move(undo.evicted);

        if let (Some(captured), Some(slot)) = (mv.captured, undo.captured_slot) {
            let captured_color = self.piece(captured).color;
            self.live[captured_color.index()].insert(slot, captured);
            self.set_slot(mv.to, Some(captured));
        }

        if let Some(shift) = undo.rook {
            self.set_slot(shift.to, None);
            self.set_slot(shift.from, Some(shift.rook));
            let rook = &mut self.arena[shift.rook.index()];
            rook.tile = shift.from;
            rook.unrecord_move(shift.evicted);
        }

        self.generation = undo.generation;
        Ok(mv)
    }

    /// Moves the rook that belongs to a two-file king step
    fn shift_castling_rook(&mut self, mv: Move) -> Option<RookShift> {
        let kingside = mv.to.file() > mv.from.file();
        let rank = mv.from.rank() as i8;
        let (from_file, to_file) = if kingside { (8, 6) } else { (1, 4) };
        let from = Tile::new(from_file, rank)?;
        let to = Tile::new(to_file, rank)?;
        let rook = self.piece_at(from)?;

        self.set_slot(from, None);
        self.set_slot(to, Some(rook));
        let piece = &mut self.arena[rook.index()];
        piece.tile = to;
        let evicted = piece.record_move(to);
        Some(RookShift { rook, from, to, evicted })
    }

    /// Retires the pawn on `tile` and puts a new queen in its place, in the
    /// same slot of the live list
    fn promote(&mut self, pawn: PieceId, color: Color, tile: Tile) -> Promotion {
        let queen = PieceId(self.arena.len() as u16);
        self.arena.push(Piece::new(PieceKind::Queen, color, tile));
        let list = &mut self.live[color.index()];
        let slot = list.iter().position(|&id| id == pawn).unwrap_or(list.len());
        if slot < list.len() {
            list[slot] = queen;
        } else {
            list.push(queen);
        }
        self.set_slot(tile, Some(queen));
        Promotion { queen, slot }
    }

    /// Drops `id` from its side's live list and returns the slot it held
    fn remove_live(&mut self, id: PieceId) -> usize {
        let list = &mut self.live[self.arena[id.index()].color.index()];
        match list.iter().position(|&live| live == id) {
            Some(slot) => {
                list.remove(slot);
                slot
            }
            None => list.len(),
        }
    }

    #[inline]
    fn set_slot(&mut self, tile: Tile, id: Option<PieceId>) {
        let (rank, file) = tile.index();
        self.grid[rank][file] = id;
    }

    fn advance_generation(&mut self) {
        self.generation = self.next_generation;
        self.next_generation += 1;
    }
}
