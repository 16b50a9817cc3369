//! Error types for the Isolation search agent
//!
//! Provides the cancellation signal raised by the time budget, plus the
//! errors produced while building boards and search configurations.

use thiserror::Error;

/// Cooperative cancellation raised when the time budget runs low.
///
/// This is not a failure: fixed-depth search propagates it with `?` and the
/// driver in [`crate::engine`] is the only place that handles it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("search cancelled: {remaining_ms:.1}ms left, threshold {threshold_ms:.1}ms")]
pub struct Cancelled {
    /// Milliseconds the clock reported when the check fired
    pub remaining_ms: f64,
    /// Configured cancellation threshold
    pub threshold_ms: f64,
}

/// Errors raised while validating a search configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Fixed search depth must be at least one ply
    #[error("search depth must be at least 1, got {depth}")]
    ZeroDepth { depth: u32 },

    /// Threshold must be a finite, non-negative number of milliseconds
    #[error("timeout threshold must be finite and non-negative, got {threshold_ms}")]
    InvalidThreshold { threshold_ms: f64 },

    /// Heuristic weight must be finite
    #[error("heuristic weight must be finite, got {gamma}")]
    InvalidWeight { gamma: f64 },

    /// Unrecognised search method name
    #[error("unknown search method '{name}' (expected 'minimax' or 'alphabeta')")]
    UnknownMethod { name: String },

    /// Unrecognised heuristic name
    #[error("unknown heuristic '{name}'")]
    UnknownHeuristic { name: String },
}

/// Errors raised while building or editing an Isolation board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height outside the supported range
    #[error("invalid board size {width}x{height} (each side must be 1-{max})")]
    InvalidSize { width: u8, height: u8, max: u8 },

    /// Position does not lie on the board
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    /// Cell is already blocked or occupied
    #[error("cell ({row}, {col}) is not blank")]
    Occupied { row: u8, col: u8 },

    /// More obstacles requested than there are blank cells
    #[error("cannot place {requested} obstacles on a board with {available} blank cells")]
    TooManyObstacles { requested: usize, available: usize },
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
