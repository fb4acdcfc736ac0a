//! Minimax search with alpha-beta pruning and search extensions
//!
//! Scores are always from the point of view of the side the search runs for
//! (the maximizing side): nodes where that side moves take the maximum of
//! their children, nodes where the opponent moves take the minimum.
//!
//! ## Tie-breaks
//!
//! A maximizing node keeps the first child with a strictly greater score, a
//! minimizing node the first with a strictly lower one. Together with the
//! fixed move order from [`crate::move_gen`] this makes the search
//! deterministic, and pruning never changes which move is picked.
//!
//! ## Depth
//!
//! Depth is counted in half-plies. A quiet move costs [`PLY`]; a capture or
//! a move that gives check costs [`EXTENDED_PLY`] when extensions are on.

use super::{ScoredMove, SearchStats};
use crate::config::SearchConfig;
use crate::constants::{EXTENDED_PLY, MAX_DEPTH, PLY};
use crate::make_unmake::MoveGuard;
use crate::moves::Move;
use crate::position::Position;
use crate::types::Color;

/// Lowest score, used as the initial alpha
pub(crate) const SCORE_MIN: i32 = i32::MIN;
/// Highest score, used as the initial beta
pub(crate) const SCORE_MAX: i32 = i32::MAX;

/// One search run for one side; owns its statistics
pub(crate) struct Searcher {
    config: SearchConfig,
    side: Color,
    pub(crate) stats: SearchStats,
}

impl Searcher {
    pub(crate) fn new(config: SearchConfig, side: Color) -> Self {
        Self {
            config,
            side,
            stats: SearchStats::default(),
        }
    }

    /// Half-plies left after the root, with the depth capped at [`MAX_DEPTH`]
    pub(crate) fn root_depth(&self) -> i32 {
        let plies = i32::try_from(self.config.depth.min(MAX_DEPTH)).unwrap_or(i32::MAX);
        plies.saturating_mul(PLY)
    }

    /// Half-plies `mover`'s move just applied to `position` consumes
    pub(crate) fn cost(&self, position: &Position, mover: Color) -> i32 {
        if !self.config.extensions {
            return PLY;
        }
        let capture = position.last_move().is_some_and(|mv| mv.capture);
        if capture || position.is_in_check(mover.opponent()) {
            EXTENDED_PLY
        } else {
            PLY
        }
    }

    /// Scores `root` with `to_move` to play in `position`, searching `depth`
    /// more half-plies inside the `[alpha, beta]` window
    pub(crate) fn alphabeta(
        &mut self,
        position: &mut Position,
        root: Move,
        to_move: Color,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> ScoredMove {
        self.stats.nodes += 1;

        if depth <= 0 || self.is_terminal(position) {
            return ScoredMove {
                mv: root,
                score: position.relative_score(self.side),
            };
        }

        let maximizing = to_move == self.side;
        let mut best: Option<ScoredMove> = None;

        for mv in position.legal_moves(to_move) {
            let Some(mut guard) = MoveGuard::apply(position, mv) else {
                continue;
            };
            let next_depth = depth - self.cost(&guard, to_move);
            let child = self.alphabeta(&mut guard, root, to_move.opponent(), next_depth, alpha, beta);
            drop(guard);

            let improves = match best {
                None => true,
                Some(current) if maximizing => child.score > current.score,
                Some(current) => child.score < current.score,
            };
            if improves {
                best = Some(child);
            }

            if maximizing {
                alpha = alpha.max(child.score);
            } else {
                beta = beta.min(child.score);
            }
            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best.unwrap_or_else(|| ScoredMove {
            mv: root,
            score: position.relative_score(self.side),
        })
    }

    /// A king is gone or one side cannot move
    fn is_terminal(&self, position: &mut Position) -> bool {
        Color::ALL.into_iter().any(|color| position.king(color).is_none())
            || Color::ALL.into_iter().any(|color| !position.has_any_move(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CHECKMATE_SCORE;
    use crate::tile::Tile;
    use crate::types::PieceKind;

    fn tile(name: &str) -> Tile {
        name.parse().unwrap()
    }

    fn config(depth: u32, pruning: bool) -> SearchConfig {
        SearchConfig {
            depth,
            pruning,
            parallel: false,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_depth_zero_returns_static_score() {
        let mut pos = Position::new();
        let root = Move::quiet(tile("e2"), tile("e4"));
        let mut searcher = Searcher::new(config(1, true), Color::White);
        let result = searcher.alphabeta(&mut pos, root, Color::White, 0, SCORE_MIN, SCORE_MAX);
        assert_eq!(result.mv, root);
        assert_eq!(result.score, 0);
        assert_eq!(searcher.stats.nodes, 1);
    }

    #[test]
    fn test_root_move_is_threaded_through() {
        let mut pos = Position::new();
        let root = Move::quiet(tile("a2"), tile("a3"));
        let mut searcher = Searcher::new(config(2, true), Color::White);
        assert!(pos.apply_move(root, false));
        let result = searcher.alphabeta(&mut pos, root, Color::Black, 2, SCORE_MIN, SCORE_MAX);
        assert_eq!(result.mv, root);
        assert_eq!(pos.ply(), 1);
        assert!(searcher.stats.nodes > 20);
    }

    #[test]
    fn test_interior_node_is_not_scored() {
        let mut pos = Position::new();
        let root = Move::quiet(tile("e2"), tile("e4"));
        assert!(pos.apply_move(root, false));
        let interior = pos.generation();

        let mut searcher = Searcher::new(config(1, true), Color::White);
        searcher.alphabeta(&mut pos, root, Color::Black, 2, SCORE_MIN, SCORE_MAX);

        assert_eq!(pos.generation(), interior);
        assert!(pos.score_cache.iter().flatten().all(|&(generation, _)| generation != interior));
    }

    #[test]
    fn test_root_depth_is_capped() {
        let searcher = |depth| Searcher::new(config(depth, true), Color::White);
        assert_eq!(searcher(3).root_depth(), 3 * PLY);
        assert_eq!(searcher(MAX_DEPTH).root_depth(), MAX_DEPTH as i32 * PLY);
        assert_eq!(searcher(MAX_DEPTH + 1).root_depth(), MAX_DEPTH as i32 * PLY);
        assert_eq!(searcher(1 << 30).root_depth(), MAX_DEPTH as i32 * PLY);
        assert_eq!(searcher(u32::MAX).root_depth(), MAX_DEPTH as i32 * PLY);
    }

    #[test]
    fn test_mated_side_to_move_is_terminal() {
        let mut pos = Position::empty();
        pos.place(PieceKind::King, Color::Black, tile("h8"));
        pos.place(PieceKind::King, Color::White, tile("f6"));
        pos.place(PieceKind::Queen, Color::White, tile("g7"));
        let root = Move::quiet(tile("a1"), tile("g7"));
        let mut searcher = Searcher::new(config(3, true), Color::White);
        let result = searcher.alphabeta(&mut pos, root, Color::Black, 4, SCORE_MIN, SCORE_MAX);
        assert_eq!(result.score, 2 * CHECKMATE_SCORE);
        assert_eq!(searcher.stats.nodes, 1);
    }

    #[test]
    fn test_capture_costs_extended_ply() {
        let mut pos = Position::empty();
        pos.place(PieceKind::King, Color::White, tile("a1"));
        pos.place(PieceKind::Rook, Color::White, tile("d1"));
        pos.place(PieceKind::Knight, Color::Black, tile("d5"));
        pos.place(PieceKind::King, Color::Black, tile("h8"));
        let with = Searcher::new(config(2, true), Color::White);
        let without = Searcher::new(
            SearchConfig {
                extensions: false,
                ..config(2, true)
            },
            Color::White,
        );

        assert!(pos.apply_move(Move::quiet(tile("d1"), tile("d5")), false));
        assert_eq!(with.cost(&pos, Color::White), EXTENDED_PLY);
        assert_eq!(without.cost(&pos, Color::White), PLY);
        pos.undo_move().unwrap();

        assert!(pos.apply_move(Move::quiet(tile("d1"), tile("d2")), false));
        assert_eq!(with.cost(&pos, Color::White), PLY);
        pos.undo_move().unwrap();

        assert!(pos.apply_move(Move::quiet(tile("d1"), tile("h1")), false));
        assert_eq!(with.cost(&pos, Color::White), EXTENDED_PLY);
    }

    #[test]
    fn test_pruning_counts_cutoffs_without_changing_result() {
        let root = Move::quiet(tile("e2"), tile("e4"));
        let mut pruned = Searcher::new(config(2, true), Color::White);
        let mut plain = Searcher::new(config(2, false), Color::White);

        let mut pos = Position::new();
        assert!(pos.apply_move(root, false));
        let a = pruned.alphabeta(&mut pos, root, Color::Black, 4, SCORE_MIN, SCORE_MAX);
        let b = plain.alphabeta(&mut pos, root, Color::Black, 4, SCORE_MIN, SCORE_MAX);

        assert_eq!(a.score, b.score);
        assert!(pruned.stats.cutoffs > 0);
        assert_eq!(plain.stats.cutoffs, 0);
        assert!(pruned.stats.nodes < plain.stats.nodes);
    }
}
