//! Search module for the Isolation agent
//!
//! Contains:
//! - Time budget and cooperative cancellation
//! - Fixed-depth minimax
//! - Fixed-depth alpha-beta with optional move shuffling

pub mod alphabeta;
pub mod budget;
pub mod minimax;
pub mod searcher;

pub use budget::{Clock, Deadline, TimeBudget};
pub use searcher::{SearchResult, SearchStats, Searcher};
