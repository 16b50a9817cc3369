//! Isolation game-playing agent
//!
//! An adversarial search engine that picks a move for a deterministic,
//! perfect-information, two-player zero-sum game within a hard time budget:
//! - Depth-limited minimax
//! - Alpha-beta pruning (same decisions, fewer nodes)
//! - Iterative deepening with cooperative cancellation and a random
//!   legal-move fallback
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: [`GameState`] contract plus the reference Isolation board
//! - [`rules`]: Isolation rules (knight moves, win/loss)
//! - [`eval`]: [`Evaluator`] contract and move-counting heuristics
//! - [`search`]: Time budget, minimax and alpha-beta
//! - [`engine`]: [`SearchAgent`], the iterative-deepening driver
//! - [`config`]: Agent configuration
//!
//! # Quick Start
//!
//! ```
//! use isolation::{Board, Deadline, GameState, Pos, SearchAgent};
//!
//! let mut board = Board::new(7, 7).unwrap();
//! board.apply_move(Pos::new(3, 3));
//! board.apply_move(Pos::new(0, 0));
//!
//! let mut agent = SearchAgent::default();
//! let legal = board.get_legal_moves(board.active_player());
//! if let Some(pos) = agent.get_move(&board, &legal, &Deadline::from_millis(100)) {
//!     board.apply_move(pos);
//!     println!("Agent plays {pos}");
//! }
//! ```
//!
//! # Time Management
//!
//! The caller reports the milliseconds left in the turn through a
//! [`Clock`]. Every recursive call checks it, after the terminal and
//! frontier cutoffs; once less than the configured threshold remains the
//! search unwinds with [`Cancelled`] and the agent plays the move of the
//! last completed depth.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GameState, Player, Pos, MAX_SIZE};
pub use config::{MoveOrdering, SearchConfig, SearchMethod};
pub use engine::{MoveResult, MoveSource, SearchAgent};
pub use error::{BoardError, Cancelled, ConfigError};
pub use eval::{Evaluator, Heuristic};
pub use search::{Clock, Deadline, SearchResult, SearchStats, Searcher, TimeBudget};
