//! Root move driver
//!
//! Scores every legal root move and picks the best one for the side to move.
//!
//! Sequentially, root moves share one alpha so later moves are searched in
//! a narrower window. In parallel (the `parallel` feature plus
//! [`SearchConfig::parallel`]), each root move is searched on its own clone
//! of the position with the full window. Both pick the first move with the
//! highest score, so they agree on the move and its score.

use super::alphabeta::{Searcher, SCORE_MAX, SCORE_MIN};
use super::{ScoredMove, SearchStats};
use crate::config::SearchConfig;
use crate::make_unmake::MoveGuard;
use crate::moves::Move;
use crate::position::Position;
use crate::types::Color;
use instant::Instant;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Best-move search with a fixed configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Search {
    config: SearchConfig,
}

impl Search {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for `side` in `position`, or `None` when it has no legal move
    ///
    /// The position is mutated during the search and restored before return.
    pub fn best_move(&self, position: &mut Position, side: Color) -> Option<ScoredMove> {
        self.best_move_with_stats(position, side).0
    }

    /// [`Search::best_move`] plus the node and cutoff counts
    pub fn best_move_with_stats(&self, position: &mut Position, side: Color) -> (Option<ScoredMove>, SearchStats) {
        let start = Instant::now();
        let root_moves = position.legal_moves(side);
        if root_moves.is_empty() {
            debug!("[SEARCH] {} has no legal move", side);
            return (None, SearchStats::default());
        }

        let (best, stats) = if self.use_parallel() {
            self.search_parallel(position, side, &root_moves)
        } else {
            self.search_sequential(position, side, &root_moves)
        };

        if let Some(best) = best {
            info!(
                "[SEARCH] {} plays {} (score {}, {} nodes, {} cutoffs, {:.1?})",
                side,
                best.mv,
                best.score,
                stats.nodes,
                stats.cutoffs,
                start.elapsed()
            );
        }
        (best, stats)
    }

    fn use_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.config.parallel
    }

    fn search_sequential(
        &self,
        position: &mut Position,
        side: Color,
        root_moves: &[Move],
    ) -> (Option<ScoredMove>, SearchStats) {
        let mut searcher = Searcher::new(self.config, side);
        let depth = searcher.root_depth();
        let mut alpha = SCORE_MIN;
        let mut best: Option<ScoredMove> = None;

        for &mv in root_moves {
            let Some(mut guard) = MoveGuard::apply(position, mv) else {
                continue;
            };
            let next_depth = depth - searcher.cost(&guard, side);
            let scored = searcher.alphabeta(&mut guard, mv, side.opponent(), next_depth, alpha, SCORE_MAX);
            drop(guard);

            debug!("[SEARCH] {} ({})", mv, scored.score);
            if best.map_or(true, |current| scored.score > current.score) {
                best = Some(ScoredMove { mv, score: scored.score });
            }
            alpha = alpha.max(scored.score);
        }
        (best, searcher.stats)
    }

    #[cfg(feature = "parallel")]
    fn search_parallel(
        &self,
        position: &Position,
        side: Color,
        root_moves: &[Move],
    ) -> (Option<ScoredMove>, SearchStats) {
        let results: Vec<(Option<ScoredMove>, SearchStats)> = root_moves
            .par_iter()
            .map(|&mv| {
                let mut local = position.clone();
                let mut searcher = Searcher::new(self.config, side);
                let depth = searcher.root_depth();
                let Some(mut guard) = MoveGuard::apply(&mut local, mv) else {
                    return (None, searcher.stats);
                };
                let next_depth = depth - searcher.cost(&guard, side);
                let scored = searcher.alphabeta(&mut guard, mv, side.opponent(), next_depth, SCORE_MIN, SCORE_MAX);
                (Some(ScoredMove { mv, score: scored.score }), searcher.stats)
            })
            .collect();

        let mut stats = SearchStats::default();
        let mut best: Option<ScoredMove> = None;
        for (scored, local_stats) in results {
            stats.merge(local_stats);
            let Some(scored) = scored else {
                continue;
            };
            debug!("[SEARCH] {} ({})", scored.mv, scored.score);
            if best.map_or(true, |current| scored.score > current.score) {
                best = Some(scored);
            }
        }
        (best, stats)
    }

    #[cfg(not(feature = "parallel"))]
    fn search_parallel(
        &self,
        position: &mut Position,
        side: Color,
        root_moves: &[Move],
    ) -> (Option<ScoredMove>, SearchStats) {
        self.search_sequential(position, side, root_moves)
    }
}
