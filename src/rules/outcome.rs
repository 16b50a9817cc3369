//! Win/loss detection for Isolation
//!
//! The player to move with no legal moves loses; the other player wins.

use crate::board::{Board, GameState, Player};

use super::moves::has_moves;

/// Check if `player` is to move and stuck
#[inline]
pub fn is_loser(board: &Board, player: Player) -> bool {
    board.active_player() == player && !has_moves(board, player)
}

/// Check if the opponent of `player` is to move and stuck
#[inline]
pub fn is_winner(board: &Board, player: Player) -> bool {
    board.inactive_player() == player && !has_moves(board, board.active_player())
}

/// The player who has won, if the game is over
pub fn check_winner(board: &Board) -> Option<Player> {
    if has_moves(board, board.active_player()) {
        None
    } else {
        Some(board.inactive_player())
    }
}
