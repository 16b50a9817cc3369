//! Move generation for Isolation
//!
//! Players move like chess knights. A player who has not moved yet may
//! start on any blank cell.

use crate::board::{Board, Player, Pos};

/// Knight jump offsets, in the fixed enumeration order
pub const KNIGHT_DIRECTIONS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Legal moves for `player`, regardless of whose turn it is.
///
/// Order is deterministic: blank cells row-major for an unplaced player,
/// otherwise [`KNIGHT_DIRECTIONS`] order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    let Some(from) = board.location(player) else {
        return blank_cells(board).collect();
    };

    KNIGHT_DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc, board.width(), board.height()))
        .filter(|&pos| board.is_blank(pos))
        .collect()
}

/// Check if `player` has at least one legal move (no allocation)
#[inline]
pub fn has_moves(board: &Board, player: Player) -> bool {
    match board.location(player) {
        None => blank_cells(board).next().is_some(),
        Some(from) => KNIGHT_DIRECTIONS.iter().any(|&(dr, dc)| {
            from.offset(dr, dc, board.width(), board.height())
                .is_some_and(|pos| board.is_blank(pos))
        }),
    }
}

fn blank_cells(board: &Board) -> impl Iterator<Item = Pos> + '_ {
    (0..board.height())
        .flat_map(move |row| (0..board.width()).map(move |col| Pos::new(row, col)))
        .filter(move |&pos| board.is_blank(pos))
}
