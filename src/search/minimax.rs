//! Depth-limited minimax
//!
//! Plain minimax without pruning. Moves are expanded in the order
//! [`GameState::get_legal_moves`] returns them; ties keep the first move.

use crate::board::GameState;
use crate::error::Cancelled;
use crate::eval::Evaluator;

use super::{SearchResult, Searcher};

impl<E: ?Sized> Searcher<'_, E> {
    /// Minimax value of `state` searched `depth` plies deep.
    ///
    /// `maximizing` is true on the root player's plies. The budget is
    /// checked after the terminal and frontier cutoffs, before expanding
    /// children; a [`Cancelled`] error unwinds the whole search.
    pub fn minimax<S>(
        &mut self,
        state: &S,
        depth: u32,
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

        let mut best = SearchResult::initial(maximizing);
        for mv in state.get_legal_moves(state.active_player()) {
            let child = state.forecast_move(mv);
            let result = self.minimax(&child, depth - 1, !maximizing)?;
            best.improve(result.score, mv, maximizing);
        }
        Ok(best)
    }
}
