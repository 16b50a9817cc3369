//! Isolation board with player tracking

use std::fmt;

use super::bitboard::Bitboard;
use super::{GameState, Player, Pos, MAX_SIZE};
use crate::error::BoardError;
use crate::rules;

/// Isolation game board.
///
/// Every cell a player has ever stood on is blocked, as are obstacles placed
/// with [`Board::block`]. Player One moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Visited cells and obstacles
    blocked: Bitboard,
    /// Current location of each player (`None` before their first move)
    locations: [Option<Pos>; 2],
    active: Player,
    move_count: u32,
}

impl Board {
    /// Create an empty `width` x `height` board
    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        let valid = |side: u8| side >= 1 && side as usize <= MAX_SIZE;
        if !valid(width) || !valid(height) {
            return Err(BoardError::InvalidSize {
                width,
                height,
                max: MAX_SIZE as u8,
            });
        }
        Ok(Self {
            width,
            height,
            blocked: Bitboard::new(),
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.width as usize + pos.col as usize
    }

    /// Check if the cell has never been visited or blocked
    #[inline]
    pub fn is_blank(&self, pos: Pos) -> bool {
        self.contains(pos) && !self.blocked.get(self.index(pos))
    }

    /// Block a blank cell as an obstacle (setup only, does not pass the turn)
    pub fn block(&mut self, pos: Pos) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds { row: pos.row, col: pos.col });
        }
        if !self.is_blank(pos) {
            return Err(BoardError::Occupied { row: pos.row, col: pos.col });
        }
        let idx = self.index(pos);
        self.blocked.set(idx);
        Ok(())
    }

    /// Move the active player to `pos` and pass the turn.
    ///
    /// No legality check is made beyond bounds; callers play moves taken
    /// from [`GameState::get_legal_moves`].
    #[inline]
    pub fn apply_move(&mut self, pos: Pos) {
        debug_assert!(self.contains(pos));
        let idx = self.index(pos);
        self.blocked.set(idx);
        self.locations[self.active.index()] = Some(pos);
        self.active = self.active.opponent();
        self.move_count += 1;
    }

    /// Current location of `player`
    #[inline]
    pub fn location(&self, player: Player) -> Option<Pos> {
        self.locations[player.index()]
    }

    #[inline]
    pub fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    /// Total moves played so far
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Number of blocked cells (visited or obstacles)
    #[inline]
    pub fn blocked_count(&self) -> u32 {
        self.blocked.count()
    }
}

impl GameState for Board {
    #[inline]
    fn active_player(&self) -> Player {
        self.active
    }

    fn get_legal_moves(&self, player: Player) -> Vec<Pos> {
        rules::legal_moves(self, player)
    }

    fn forecast_move(&self, mv: Pos) -> Self {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        rules::is_winner(self, player)
    }

    fn is_loser(&self, player: Player) -> bool {
        rules::is_loser(self, player)
    }

    fn get_blank_spaces(&self) -> Vec<Pos> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Pos::new(row, col)))
            .filter(|&pos| self.is_blank(pos))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Pos::new(row, col);
                let cell = if self.location(Player::One) == Some(pos) {
                    '1'
                } else if self.location(Player::Two) == Some(pos) {
                    '2'
                } else if self.is_blank(pos) {
                    '.'
                } else {
                    '-'
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
