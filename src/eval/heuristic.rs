//! Mobility heuristics for Isolation-style games
//!
//! Every heuristic first checks for a decided game and returns the
//! `-inf`/`+inf` sentinels; otherwise it scores by counting moves:
//! - `MyMoves`: number of moves available to the player
//! - `TheirMoves`: negated number of moves available to the opponent
//! - `MovesDiff`: own moves minus `gamma` times the opponent's moves
//! - `BlanksDiffTheirs`: blank cells minus the opponent's moves

use std::fmt;
use std::str::FromStr;

use crate::board::{GameState, Player};
use crate::error::ConfigError;

use super::Evaluator;

/// Opponent weight of the default heuristic
pub const CUSTOM_GAMMA: f64 = 0.5;

/// Interchangeable move-counting evaluation strategies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Heuristic {
    MyMoves,
    TheirMoves,
    MovesDiff { gamma: f64 },
    BlanksDiffTheirs,
}

impl Heuristic {
    /// The default strategy: `MovesDiff` weighting the opponent by one half
    #[must_use]
    pub fn custom() -> Self {
        Heuristic::MovesDiff { gamma: CUSTOM_GAMMA }
    }

    /// Reject non-finite weights
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Heuristic::MovesDiff { gamma } if !gamma.is_finite() => {
                Err(ConfigError::InvalidWeight { gamma })
            }
            _ => Ok(()),
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::custom()
    }
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn score(&self, state: &S, player: Player) -> f64 {
        if state.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if state.is_winner(player) {
            return f64::INFINITY;
        }

        let opponent = state.get_opponent(player);
        #[allow(clippy::cast_precision_loss)]
        let count = |moves: Vec<_>| moves.len() as f64;

        match *self {
            Heuristic::MyMoves => count(state.get_legal_moves(player)),
            Heuristic::TheirMoves => -count(state.get_legal_moves(opponent)),
            Heuristic::MovesDiff { gamma } => {
                count(state.get_legal_moves(player)) - gamma * count(state.get_legal_moves(opponent))
            }
            Heuristic::BlanksDiffTheirs => {
                count(state.get_blank_spaces()) - count(state.get_legal_moves(opponent))
            }
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::MyMoves => write!(f, "my-moves"),
            Heuristic::TheirMoves => write!(f, "their-moves"),
            Heuristic::MovesDiff { gamma } => write!(f, "moves-diff(gamma={gamma})"),
            Heuristic::BlanksDiffTheirs => write!(f, "blanks-diff-theirs"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    /// Parse a heuristic name. `moves-diff` uses a weight of 1.0;
    /// `custom` is the default weighted difference.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "my-moves" => Ok(Heuristic::MyMoves),
            "their-moves" => Ok(Heuristic::TheirMoves),
            "moves-diff" => Ok(Heuristic::MovesDiff { gamma: 1.0 }),
            "blanks-diff-theirs" => Ok(Heuristic::BlanksDiffTheirs),
            "custom" => Ok(Heuristic::custom()),
            _ => Err(ConfigError::UnknownHeuristic { name: s.to_string() }),
        }
    }
}
