//! Game rules for Isolation
//!
//! This module implements the rule set for Isolation:
//! - Knight-move generation (any blank cell for a player's first move)
//! - Win/loss detection (the player to move with no moves loses)

pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use moves::{has_moves, legal_moves, KNIGHT_DIRECTIONS};
pub use outcome::{check_winner, is_loser, is_winner};
