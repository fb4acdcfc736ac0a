//! Game-tree search
//!
//! This module implements the CPU player's move choice using:
//! - Minimax with alpha-beta pruning (recursive, mutate/undo on one position)
//! - Search extensions for captures and checking moves
//! - Optional parallel scoring of root moves on cloned positions
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `root` - Root move driver, sequential or parallel

mod alphabeta;
mod root;

pub use root::Search;

use crate::moves::Move;

/// A root move with the score the search gave it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root children included
    pub nodes: u64,
    /// Sibling lists abandoned after `beta <= alpha`
    pub cutoffs: u64,
}

impl SearchStats {
    pub(crate) fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}
