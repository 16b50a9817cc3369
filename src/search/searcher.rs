//! Fixed-depth search state shared by minimax and alpha-beta
//!
//! A [`Searcher`] is built for one fixed-depth search from one root player's
//! point of view. It borrows the evaluator, the time budget and the PRNG
//! owned by the driver, and counts nodes and cutoffs while it runs.

use rand_pcg::Pcg64;

use crate::board::{GameState, Player, Pos};
use crate::config::{MoveOrdering, SearchMethod};
use crate::error::Cancelled;
use crate::eval::Evaluator;

use super::TimeBudget;

/// Score and best move of one search node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Value for the root player; `+inf`/`-inf` mean won/lost
    pub score: f64,
    /// Best move found at this node, `None` at leaves or when no move
    /// improved on the initial sentinel
    pub best_move: Option<Pos>,
}

impl SearchResult {
    /// Leaf result (terminal or frontier): no move
    #[inline]
    pub fn leaf(score: f64) -> Self {
        Self { score, best_move: None }
    }

    /// Worst possible incumbent for the side to move
    #[inline]
    pub(super) fn initial(maximizing: bool) -> Self {
        Self::leaf(if maximizing { f64::NEG_INFINITY } else { f64::INFINITY })
    }

    /// Replace the incumbent only on a strict improvement, so the first
    /// move reaching the best score is kept.
    #[inline]
    pub(super) fn improve(&mut self, score: f64, mv: Pos, maximizing: bool) {
        let better = if maximizing { score > self.score } else { score < self.score };
        if better {
            self.score = score;
            self.best_move = Some(mv);
        }
    }
}

/// Search statistics for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered (including terminal and frontier nodes)
    pub nodes: u64,
    /// Frontier evaluations
    pub evaluations: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for totals across depths)
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.evaluations += other.evaluations;
        self.cutoffs += other.cutoffs;
    }
}

/// Depth-limited adversarial search over any [`GameState`]
pub struct Searcher<'a, E: ?Sized> {
    /// Player being maximized
    pub(super) player: Player,
    pub(super) evaluator: &'a E,
    pub(super) budget: TimeBudget<'a>,
    pub(super) rng: &'a mut Pcg64,
    pub(super) ordering: MoveOrdering,
    pub(super) stats: SearchStats,
}

impl<'a, E: ?Sized> Searcher<'a, E> {
    pub fn new(
        player: Player,
        evaluator: &'a E,
        budget: TimeBudget<'a>,
        rng: &'a mut Pcg64,
    ) -> Self {
        Self {
            player,
            evaluator,
            budget,
            rng,
            ordering: MoveOrdering::default(),
            stats: SearchStats::default(),
        }
    }

    /// Set how alpha-beta orders moves before expanding them
    #[must_use]
    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run `method` from the root with the full window.
    pub fn search<S>(
        &mut self,
        state: &S,
        depth: u32,
        method: SearchMethod,
    ) -> Result<SearchResult, Cancelled>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        match method {
            SearchMethod::Minimax => self.minimax(state, depth, true),
            SearchMethod::AlphaBeta => {
                self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }

    /// Terminal and frontier cutoffs shared by both algorithms.
    ///
    /// Terminal takes priority over depth. Counts the node.
    #[inline]
    pub(super) fn leaf_value<S>(&mut self, state: &S, depth: u32) -> Option<SearchResult>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.nodes += 1;

        let utility = state.utility(self.player);
        if utility != 0.0 {
            return Some(SearchResult::leaf(utility));
        }
        if depth == 0 {
            self.stats.evaluations += 1;
            return Some(SearchResult::leaf(self.evaluator.score(state, self.player)));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improve_keeps_first_on_tie() {
        let a = Pos::new(0, 0);
        let b = Pos::new(0, 1);

        let mut best = SearchResult::initial(true);
        best.improve(3.0, a, true);
        best.improve(3.0, b, true);
        assert_eq!(best, SearchResult { score: 3.0, best_move: Some(a) });

        let mut best = SearchResult::initial(false);
        best.improve(-1.0, a, false);
        best.improve(-1.0, b, false);
        best.improve(0.0, b, false);
        assert_eq!(best.best_move, Some(a));
    }

    #[test]
    fn test_improve_ignores_sentinel_ties() {
        let mut best = SearchResult::initial(true);
        best.improve(f64::NEG_INFINITY, Pos::new(1, 1), true);
        assert_eq!(best.best_move, None);
        assert_eq!(best.score, f64::NEG_INFINITY);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = SearchStats { nodes: 3, evaluations: 2, cutoffs: 1 };
        total.merge(&SearchStats { nodes: 10, evaluations: 5, cutoffs: 0 });
        assert_eq!(total, SearchStats { nodes: 13, evaluations: 7, cutoffs: 1 });
    }
}
