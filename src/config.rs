//! Search configuration
//!
//! A [`SearchConfig`] is built once per agent and stays fixed for every
//! move it selects. Defaults match the agent's tuned settings: iterative
//! deepening with minimax, a 10ms safety threshold and seed 16.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

/// Fixed-depth algorithm run at each depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMethod {
    #[default]
    Minimax,
    AlphaBeta,
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMethod::Minimax => write!(f, "minimax"),
            SearchMethod::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

impl FromStr for SearchMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchMethod::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(SearchMethod::AlphaBeta),
            _ => Err(ConfigError::UnknownMethod { name: s.to_string() }),
        }
    }
}

/// Order in which alpha-beta expands the moves of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrdering {
    /// Shuffle with the agent's PRNG at every node
    #[default]
    Shuffled,
    /// Keep the game's enumeration order
    Enumeration,
}

/// Agent configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Plies searched when `iterative` is off
    pub search_depth: u32,
    /// Deepen 1, 2, 3, ... until time runs out instead of one fixed search
    pub iterative: bool,
    pub method: SearchMethod,
    /// Stop searching once fewer milliseconds than this remain
    pub timeout_threshold_ms: f64,
    /// Seed for move shuffling and the random fallback move
    pub seed: u64,
    pub move_ordering: MoveOrdering,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            iterative: true,
            method: SearchMethod::Minimax,
            timeout_threshold_ms: 10.0,
            seed: 16,
            move_ordering: MoveOrdering::Shuffled,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    #[must_use]
    pub fn with_iterative(mut self, iterative: bool) -> Self {
        self.iterative = iterative;
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: SearchMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold_ms: f64) -> Self {
        self.timeout_threshold_ms = threshold_ms;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.move_ordering = ordering;
        self
    }

    /// Check depth and threshold
    pub fn validate(&self) -> ConfigResult<()> {
        if self.search_depth == 0 {
            return Err(ConfigError::ZeroDepth { depth: self.search_depth });
        }
        if !self.timeout_threshold_ms.is_finite() || self.timeout_threshold_ms < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                threshold_ms: self.timeout_threshold_ms,
            });
        }
        Ok(())
    }
}
