//! Alpha-beta search
//!
//! Minimax with alpha-beta pruning. Produces the same root score as
//! [`Searcher::minimax`] for the same state and depth while visiting fewer
//! nodes.
//!
//! # Move ordering
//!
//! With [`MoveOrdering::Shuffled`] the legal moves of every node are
//! shuffled with the driver's PRNG before expansion, so an unlucky fixed
//! enumeration order cannot keep degrading pruning across repeated calls.
//! With [`MoveOrdering::Enumeration`] they are expanded in
//! [`GameState::get_legal_moves`] order and the root move matches minimax
//! exactly, ties included.

use rand::seq::SliceRandom;

use crate::board::GameState;
use crate::config::MoveOrdering;
use crate::error::Cancelled;
use crate::eval::Evaluator;

use super::{SearchResult, Searcher};

impl<E: ?Sized> Searcher<'_, E> {
    /// Alpha-beta value of `state` searched `depth` plies deep.
    ///
    /// `alpha` is the best value the maximizing side can already guarantee,
    /// `beta` the best the minimizing side can. Call with `-inf`/`+inf` at
    /// the root.
    pub fn alphabeta<S>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Result<SearchResult, Cancelled>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if let Some(leaf) = self.leaf_value(state, depth) {
            return Ok(leaf);
        }
        self.budget.check()?;

        let mut moves = state.get_legal_moves(state.active_player());
        if self.ordering == MoveOrdering::Shuffled {
            moves.shuffle(&mut *self.rng);
        }

        let mut best = SearchResult::initial(maximizing);
        for mv in moves {
            let child = state.forecast_move(mv);
            let result = self.alphabeta(&child, depth - 1, alpha, beta, !maximizing)?;
            best.improve(result.score, mv, maximizing);

            // Remaining siblings cannot change the parent's choice
            if (maximizing && best.score >= beta) || (!maximizing && best.score <= alpha) {
                self.stats.cutoffs += 1;
                return Ok(best);
            }
            if maximizing {
                alpha = alpha.max(best.score);
            } else {
                beta = beta.min(best.score);
            }
        }
        Ok(best)
    }
}
