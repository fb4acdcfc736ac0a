//! Players
//!
//! A [`Player`] picks moves for one color. The engine ships the search-backed
//! [`Cpu`]; front ends implement the trait for human input.

use crate::config::SearchConfig;
use crate::error::ChessEngineResult;
use crate::moves::Move;
use crate::position::Position;
use crate::search::Search;
use crate::types::Color;

pub trait Player {
    fn color(&self) -> Color;

    /// Pick the next move for [`Player::color`], or `None` to give up
    ///
    /// The position is left exactly as it was given; the caller applies the
    /// returned move.
    fn choose_move(&mut self, position: &mut Position) -> ChessEngineResult<Option<Move>>;

    /// Every legal move this player could make
    fn legal_moves(&self, position: &mut Position) -> Vec<Move> {
        position.legal_moves(self.color())
    }

    fn has_any_move(&self, position: &mut Position) -> bool {
        position.has_any_move(self.color())
    }
}

/// Computer player running a fixed-depth search
#[derive(Debug, Clone, Copy)]
pub struct Cpu {
    color: Color,
    search: Search,
}

impl Cpu {
    pub fn new(color: Color, config: SearchConfig) -> Self {
        Self {
            color,
            search: Search::new(config),
        }
    }
}

impl Player for Cpu {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self, position: &mut Position) -> ChessEngineResult<Option<Move>> {
        Ok(self.search.best_move(position, self.color).map(|scored| scored.mv))
    }
}
