//! Board coordinates
//!
//! A [`Tile`] is a (file, rank) pair, both 1-based: `a1` is `(1, 1)`, `h8` is
//! `(8, 8)`. Construction outside the board yields `None` instead of panicking,
//! which lets move generators walk rays with `?`/`while let` and stop at the
//! edge naturally.

use crate::error::{ChessEngineError, ChessEngineResult};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    file: u8,
    rank: u8,
}

impl Tile {
    /// Tile at `file`, `rank` (1-8 each), or `None` when off the board
    #[inline]
    pub fn new(file: i8, rank: i8) -> Option<Tile> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Tile {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Tile shifted by `df` files and `dr` ranks
    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Tile> {
        Tile::new(self.file as i8 + df, self.rank as i8 + dr)
    }

    /// Grid indices as (rank - 1, file - 1)
    #[inline]
    pub(crate) fn index(self) -> (usize, usize) {
        (self.rank as usize - 1, self.file as usize - 1)
    }

    /// Every tile, rank by rank from a1 to h8
    pub fn all() -> impl Iterator<Item = Tile> {
        (1..=8).flat_map(|rank| (1..=8).map(move |file| Tile { file, rank }))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file - 1) as char, self.rank)
    }
}

impl FromStr for Tile {
    type Err = ChessEngineError;

    /// Parses algebraic notation such as `"e4"`
    fn from_str(input: &str) -> ChessEngineResult<Tile> {
        let invalid = |reason| ChessEngineError::InvalidNotation {
            input: input.to_string(),
            reason,
        };

        let bytes = input.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid("a tile is one file letter and one rank digit"));
        }
        let file = bytes[0].to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) {
            return Err(invalid("file must be a-h"));
        }
        if !(b'1'..=b'8').contains(&bytes[1]) {
            return Err(invalid("rank must be 1-8"));
        }

        Tile::new((file - b'a' + 1) as i8, (bytes[1] - b'0') as i8)
            .ok_or_else(|| invalid("tile is off the board"))
    }
}

/// Parses the four-character move notation `<file><rank><file><rank>`,
/// e.g. `"e2e4"`, into its source and destination tiles
pub fn parse_move_notation(input: &str) -> ChessEngineResult<(Tile, Tile)> {
    let trimmed = input.trim();
    if trimmed.len() != 4 || !trimmed.is_ascii() {
        return Err(ChessEngineError::InvalidNotation {
            input: input.to_string(),
            reason: "expected four characters such as e2e4",
        });
    }
    let from = trimmed[..2].parse()?;
    let to = trimmed[2..].parse()?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_absent() {
        assert!(Tile::new(0, 1).is_none());
        assert!(Tile::new(9, 1).is_none());
        assert!(Tile::new(1, 0).is_none());
        assert!(Tile::new(1, 9).is_none());
        assert!(Tile::new(1, 1).is_some());
        assert!(Tile::new(8, 8).is_some());
    }

    #[test]
    fn test_offset_stops_at_edge() {
        let h8 = Tile::new(8, 8).unwrap();
        assert!(h8.offset(1, 0).is_none());
        assert!(h8.offset(0, 1).is_none());
        assert_eq!(h8.offset(-7, -7), Tile::new(1, 1));
    }

    #[test]
    fn test_display_and_parse_agree() {
        for tile in Tile::all() {
            let text = tile.to_string();
            assert_eq!(text.parse::<Tile>().unwrap(), tile);
        }
        assert_eq!(Tile::all().count(), 64);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("e9".parse::<Tile>().is_err());
        assert!("i1".parse::<Tile>().is_err());
        assert!("e".parse::<Tile>().is_err());
        assert!("e22".parse::<Tile>().is_err());
        assert_eq!("E2".parse::<Tile>().unwrap(), Tile::new(5, 2).unwrap());
    }

    #[test]
    fn test_parse_move_notation() {
        let (from, to) = parse_move_notation("e2e4").unwrap();
        assert_eq!(from, Tile::new(5, 2).unwrap());
        assert_eq!(to, Tile::new(5, 4).unwrap());

        assert!(parse_move_notation(" g1f3\n").is_ok());
        assert!(parse_move_notation("e2e").is_err());
        assert!(parse_move_notation("e2-e4").is_err());
        assert!(parse_move_notation("z2e4").is_err());
        assert!(parse_move_notation("é2e4").is_err());
    }
}
