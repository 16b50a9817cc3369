//! Evaluation module for game positions
//!
//! The search engine only calls an evaluator at the frontier (remaining
//! depth zero) of a non-terminal state. Heuristics here count mobility:
//! - The player's own legal moves
//! - The opponent's legal moves
//! - Blank cells left on the board

pub mod heuristic;

pub use heuristic::Heuristic;

use crate::board::{GameState, Player};

/// Scores a state from the point of view of `player`.
///
/// Contract: `-inf` if `state.is_loser(player)`, `+inf` if
/// `state.is_winner(player)`, a finite comparable value otherwise. Must be
/// free of side effects visible to the search.
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: Player) -> f64;
}

impl<S: GameState, E: Evaluator<S> + ?Sized> Evaluator<S> for &E {
    #[inline]
    fn score(&self, state: &S, player: Player) -> f64 {
        (**self).score(state, player)
    }
}

impl<S: GameState, E: Evaluator<S> + ?Sized> Evaluator<S> for Box<E> {
    #[inline]
    fn score(&self, state: &S, player: Player) -> f64 {
        (**self).score(state, player)
    }
}
