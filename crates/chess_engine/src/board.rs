//! Board setup and text rendering
//!
//! Provides the standard starting position and the fixed-width text grid the
//! console front end prints between moves:
//!
//! ```text
//!      A   B   C   D   E   F   G   H
//!   ***********************************
//! 8 *|(R)|(N)|(B)|(Q)|(K)|(B)|(N)|(R)|* 8
//! ...
//! 1 *| R | N | B | Q | K | B | N | R |* 1
//!   ***********************************
//!      A   B   C   D   E   F   G   H
//! ```
//!
//! White pieces print as bare initials, black pieces in parentheses.

use crate::constants::BACK_RANK;
use crate::position::Position;
use crate::tile::Tile;
use crate::types::{Color, PieceKind};
use std::fmt;

const FILE_HEADER: &str = "     A   B   C   D   E   F   G   H";
const BORDER: &str = "  ***********************************";

impl Position {
    /// The standard starting position
    ///
    /// Pieces are placed white first, back rank then pawns, so list order is
    /// stable and search tie-breaks are reproducible.
    pub fn new() -> Self {
        let mut position = Position::empty();
        for color in Color::ALL {
            let (back, pawns) = match color {
                Color::White => (1, 2),
                Color::Black => (8, 7),
            };
            for (file, kind) in (1..=8).zip(BACK_RANK) {
                if let Some(tile) = Tile::new(file, back) {
                    position.place(kind, color, tile);
                }
            }
            for file in 1..=8 {
                if let Some(tile) = Tile::new(file, pawns) {
                    position.place(PieceKind::Pawn, color, tile);
                }
            }
        }
        position
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILE_HEADER}")?;
        writeln!(f, "{BORDER}")?;
        for rank in (1..=8).rev() {
            write!(f, "{rank} *")?;
            for file in 1..=8 {
                let occupant = Tile::new(file, rank).and_then(|tile| self.occupant(tile));
                match occupant {
                    Some(piece) if piece.color() == Color::White => write!(f, "| {} ", piece.kind().initial())?,
                    Some(piece) => write!(f, "|({})", piece.kind().initial())?,
                    None => f.write_str("|   ")?,
                }
            }
            writeln!(f, "|* {rank}")?;
        }
        writeln!(f, "{BORDER}")?;
        writeln!(f, "{FILE_HEADER}")
    }
}
