//! Full position evaluation
//!
//! [`Position::score`] rates one side on its own:
//!
//! - the opponent has no legal move: `+CHECKMATE_SCORE`
//! - the side itself has no legal move: `-CHECKMATE_SCORE`
//! - otherwise, per live piece: material + positional bonus + legal moves
//!   times the mobility weight
//!
//! With [`StalematePolicy::Draw`] a stuck side that is not in check scores 0
//! instead of a sentinel. Scores are cached per side for the current
//! generation.

use super::pst::pst_value;
use crate::config::StalematePolicy;
use crate::constants::{figure_value, CHECKMATE_SCORE};
use crate::position::Position;
use crate::types::Color;

impl Position {
    /// Score of `side` alone, see the module docs
    pub fn score(&mut self, side: Color) -> i32 {
        if let Some((generation, score)) = self.score_cache[side.index()] {
            if generation == self.generation() {
                return score;
            }
        }
        let score = self.compute_score(side);
        self.score_cache[side.index()] = Some((self.generation(), score));
        score
    }

    /// `side`'s score minus its opponent's; what the search maximizes
    pub fn relative_score(&mut self, side: Color) -> i32 {
        self.score(side) - self.score(side.opponent())
    }

    fn compute_score(&mut self, side: Color) -> i32 {
        let opponent = side.opponent();
        if !self.has_any_move(opponent) {
            return self.stuck_score(opponent, CHECKMATE_SCORE);
        }
        if !self.has_any_move(side) {
            return self.stuck_score(side, -CHECKMATE_SCORE);
        }

        let weight = self.eval_settings().mobility_weight;
        let pieces = self.pieces(side).to_vec();
        let mut score = 0;
        for id in pieces {
            let piece = self.piece(id);
            score += figure_value(piece.kind()) + pst_value(piece.kind(), piece.color(), piece.tile());
            score += self.legal_move_count(id) as i32 * weight;
        }
        score
    }

    /// Sentinel for a side without moves, or 0 for a stalemate scored as a draw
    fn stuck_score(&self, stuck: Color, sentinel: i32) -> i32 {
        match self.eval_settings().stalemate {
            StalematePolicy::Draw if !self.is_in_check(stuck) => 0,
            _ => sentinel,
        }
    }
}
