//! # Chess Engine Constants - Evaluation Values & Search Parameters
//!
//! ## Centipawn Valuation System
//!
//! Scores are integer **centipawns** (1/100th of a pawn). Integer arithmetic keeps
//! the search deterministic: two lines that evaluate equal compare equal, so the
//! first-found tie-break in the search never depends on rounding.
//!
//! - **Pawn**: 100
//! - **Knight**: 300
//! - **Bishop**: 300
//! - **Rook**: 500
//! - **Queen**: 800
//! - **King**: 0 (both kings are always on the board in legal play, so a large
//!   constant would only cancel out; losing the king is scored through
//!   [`CHECKMATE_SCORE`] instead)
//!
//! ## Checkmate Sentinel
//!
//! A side whose opponent has no legal reply scores `+CHECKMATE_SCORE`; a side
//! with no legal move scores `-CHECKMATE_SCORE`. The sentinel is far above any
//! reachable material total (roughly 4,000 centipawns per side), so the search
//! always prefers a forced mate over winning material.
//!
//! ## Depth Accounting
//!
//! Search depth is counted in half-plies so that extensions stay integral. A
//! quiet move consumes [`PLY`]; a capture or a checking move consumes
//! [`EXTENDED_PLY`], which lets forcing lines run twice as deep.
//!
//! ## Further Reading
//!
//! - **Centipawns**: https://www.chessprogramming.org/Centipawns
//! - **Search Extensions**: https://www.chessprogramming.org/Extensions

use crate::types::PieceKind;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 800;
pub const KING_VALUE: i32 = 0;

pub const CHECKMATE_SCORE: i32 = 100_000;

/// Centipawns credited per legal move a piece can make
pub const MOBILITY_WEIGHT: i32 = 5;

/// Tiles remembered per piece for the stale-tile filter
pub const RECENT_TILES: usize = 6;
/// A destination visited this many times within [`RECENT_TILES`] is skipped
pub const STALE_VISITS: usize = 3;

/// Half-plies consumed by a quiet move
pub const PLY: i32 = 2;
/// Half-plies consumed by a capture or a checking move
pub const EXTENDED_PLY: i32 = 1;

pub const DEFAULT_DEPTH: u32 = 3;
/// Deepest search a config or the command line may ask for
pub const MAX_DEPTH: u32 = 64;

/// Knight jumps as (file, rank) offsets
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// King steps as (file, rank) offsets
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Back rank in setup order, file a to file h
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Material value of a piece kind
#[inline]
pub const fn figure_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}
