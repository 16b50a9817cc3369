//! Move-selection agent wrapping the fixed-depth searches
//!
//! [`SearchAgent`] is the driver around [`Searcher`]. For each turn it either:
//!
//! 1. **Deepens iteratively**: searches depth 1, 2, 3, ... up to the number
//!    of blank cells, remembering the move of every depth that completes
//! 2. **Searches once**: a single search at the configured fixed depth
//!
//! When the time budget cancels a search, that depth's partial work is
//! dropped and the move of the last completed depth is played. If no depth
//! completed (or the completed search found no move because every move
//! loses), a legal move is drawn uniformly at random with the agent's PRNG,
//! so the agent always answers with a legal move when one exists.
//!
//! # Example
//!
//! ```
//! use isolation::{Board, Deadline, GameState, Heuristic, Pos, SearchAgent, SearchConfig, SearchMethod};
//!
//! let mut board = Board::new(5, 5).unwrap();
//! board.apply_move(Pos::new(2, 2));
//! board.apply_move(Pos::new(0, 0));
//!
//! let config = SearchConfig::default().with_method(SearchMethod::AlphaBeta);
//! let mut agent = SearchAgent::new(config, Heuristic::custom()).unwrap();
//!
//! let legal = board.get_legal_moves(board.active_player());
//! let deadline = Deadline::from_millis(150);
//! let mv = agent.get_move(&board, &legal, &deadline);
//! assert!(mv.is_some_and(|m| legal.contains(&m)));
//! ```

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::debug;

use crate::board::{GameState, Pos};
use crate::config::SearchConfig;
use crate::error::ConfigResult;
use crate::eval::{Evaluator, Heuristic};
use crate::search::{Clock, SearchResult, SearchStats, Searcher, TimeBudget};

/// Where the returned move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Best move of the last completed search
    Search,
    /// Uniformly random legal move (no completed search produced a move)
    RandomFallback,
    /// No legal moves were offered
    NoLegalMoves,
}

/// Result of a move selection with search statistics
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Move to play, `None` only when no legal moves exist
    pub best_move: Option<Pos>,
    /// Score of the last completed search, if any completed
    pub score: Option<f64>,
    /// Deepest fully completed depth (0 if none)
    pub depth: u32,
    /// Nodes visited across all depths, including the cancelled one
    pub nodes: u64,
    /// Whether the time budget cancelled a search
    pub timed_out: bool,
    pub source: MoveSource,
    /// Wall time spent in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    fn no_legal_moves() -> Self {
        Self {
            best_move: None,
            score: None,
            depth: 0,
            nodes: 0,
            timed_out: false,
            source: MoveSource::NoLegalMoves,
            time_ms: 0,
        }
    }
}

/// Game-playing agent: iterative deepening over minimax or alpha-beta.
///
/// Owns its PRNG, seeded from [`SearchConfig::seed`] at construction, so two
/// agents built from the same configuration make the same choices.
pub struct SearchAgent<E = Heuristic> {
    config: SearchConfig,
    evaluator: E,
    rng: Pcg64,
}

impl<E> SearchAgent<E> {
    /// Create an agent, rejecting invalid configurations
    pub fn new(config: SearchConfig, evaluator: E) -> ConfigResult<Self> {
        config.validate()?;
        let rng = Pcg64::seed_from_u64(config.seed);
        Ok(Self {
            config,
            evaluator,
            rng,
        })
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Choose a move for the active player of `state`.
    ///
    /// `legal_moves` are the active player's legal moves and
    /// `time_remaining` reports milliseconds left in the turn. Returns
    /// `None` only if `legal_moves` is empty.
    pub fn get_move<S>(
        &mut self,
        state: &S,
        legal_moves: &[Pos],
        time_remaining: &dyn Clock,
    ) -> Option<Pos>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.get_move_with_stats(state, legal_moves, time_remaining).best_move
    }

    /// Like [`SearchAgent::get_move`], also reporting depth, score and nodes
    pub fn get_move_with_stats<S>(
        &mut self,
        state: &S,
        legal_moves: &[Pos],
        time_remaining: &dyn Clock,
    ) -> MoveResult
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if legal_moves.is_empty() {
            return MoveResult::no_legal_moves();
        }

        let start = Instant::now();
        let player = state.active_player();
        let budget = TimeBudget::new(time_remaining, self.config.timeout_threshold_ms);

        let (first_depth, last_depth) = if self.config.iterative {
            // Searching deeper than the number of blank cells cannot change the outcome
            let blanks = u32::try_from(state.get_blank_spaces().len()).unwrap_or(u32::MAX);
            (1, blanks)
        } else {
            (self.config.search_depth, self.config.search_depth)
        };

        let mut completed: Option<SearchResult> = None;
        let mut depth_reached = 0;
        let mut stats = SearchStats::default();
        let mut timed_out = false;

        for depth in first_depth..=last_depth {
            let mut searcher = Searcher::new(player, &self.evaluator, budget, &mut self.rng)
                .with_ordering(self.config.move_ordering);
            let outcome = searcher.search(state, depth, self.config.method);
            let depth_stats = searcher.stats();
            stats.merge(&depth_stats);

            match outcome {
                Ok(result) => {
                    debug!(
                        depth,
                        score = result.score,
                        best_move = ?result.best_move,
                        nodes = depth_stats.nodes,
                        "depth complete"
                    );
                    completed = Some(result);
                    depth_reached = depth;
                }
                Err(cancelled) => {
                    debug!(
                        depth,
                        remaining_ms = cancelled.remaining_ms,
                        last_completed = depth_reached,
                        "search cancelled"
                    );
                    timed_out = true;
                    break;
                }
            }
        }

        let searched_move = completed.and_then(|result| result.best_move);
        let (best_move, source) = match searched_move {
            Some(mv) => (Some(mv), MoveSource::Search),
            None => {
                let mv = legal_moves.choose(&mut self.rng).copied();
                debug!(?mv, depth_reached, timed_out, "falling back to random legal move");
                (mv, MoveSource::RandomFallback)
            }
        };

        MoveResult {
            best_move,
            score: completed.map(|result| result.score),
            depth: depth_reached,
            nodes: stats.nodes,
            timed_out,
            source,
            time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl Default for SearchAgent<Heuristic> {
    fn default() -> Self {
        let config = SearchConfig::default();
        let rng = Pcg64::seed_from_u64(config.seed);
        Self {
            config,
            evaluator: Heuristic::custom(),
            rng,
        }
    }
}
