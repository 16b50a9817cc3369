//! Board representation for Isolation
//!
//! Holds the value types shared by every game the search engine can play
//! ([`Player`], [`Pos`]), the [`GameState`] contract the engine consumes,
//! and the reference Isolation [`Board`].

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Largest supported board side (16x16)
pub const MAX_SIZE: usize = 16;
pub const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE; // 256

/// Player identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// Position on the board.
///
/// A move is an `Option<Pos>`; `None` means no move is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_SIZE && (col as usize) < MAX_SIZE);
        Self { row, col }
    }

    /// Offset by a signed delta, returning `None` when the result leaves
    /// a `width` x `height` board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, width: u8, height: u8) -> Option<Pos> {
        let r = i32::from(self.row) + dr;
        let c = i32::from(self.col) + dc;
        if r < 0 || r >= i32::from(height) || c < 0 || c >= i32::from(width) {
            return None;
        }
        Some(Pos::new(u8::try_from(r).ok()?, u8::try_from(c).ok()?))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Capabilities the search engine needs from a game position.
///
/// Implementations must be immutable snapshots: [`GameState::forecast_move`]
/// returns a new state and leaves `self` untouched. The engine never checks
/// that a move is legal; it only plays moves returned by
/// [`GameState::get_legal_moves`].
pub trait GameState: Clone {
    /// Player whose turn it is
    fn active_player(&self) -> Player;

    /// Legal moves for `player`.
    ///
    /// The order is deterministic and decides ties during search: the first
    /// move reaching the best score wins.
    fn get_legal_moves(&self, player: Player) -> Vec<Pos>;

    /// State after the active player plays `mv`
    fn forecast_move(&self, mv: Pos) -> Self;

    fn is_winner(&self, player: Player) -> bool;

    fn is_loser(&self, player: Player) -> bool;

    /// `+inf` if `player` has won, `-inf` if lost, `0.0` otherwise
    fn utility(&self, player: Player) -> f64 {
        if self.is_winner(player) {
            f64::INFINITY
        } else if self.is_loser(player) {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    }

    /// Unoccupied cells; bounds the useful depth of iterative deepening
    fn get_blank_spaces(&self) -> Vec<Pos>;

    #[inline]
    fn get_opponent(&self, player: Player) -> Player {
        player.opponent()
    }
}
