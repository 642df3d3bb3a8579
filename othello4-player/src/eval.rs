//! Static evaluation of positions at the search horizon.

use othello4::{Board, Cell, Location, Player};

/// Score for each corner held by the evaluated player.
pub const CORNER_BONUS: i32 = 5;

/// Score `board` from `player`'s point of view:
/// material, plus a bonus for held corners, plus relative mobility.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    material(board, player) + corner_bonus(board, player) + mobility(board, player)
}

/// Piece count of `player` minus that of their opponent.
pub fn material(board: &Board, player: Player) -> i32 {
    board.count_pieces(player) as i32 - board.count_pieces(!player) as i32
}

/// [`CORNER_BONUS`] for each corner `player` holds.
/// Corners held by the opponent are not penalized.
pub fn corner_bonus(board: &Board, player: Player) -> i32 {
    let held = Location::CORNERS
        .iter()
        .filter(|&&corner| board.cell(corner) == Cell::Occupied(player))
        .count();
    held as i32 * CORNER_BONUS
}

/// Number of legal moves for `player` minus that of their opponent.
pub fn mobility(board: &Board, player: Player) -> i32 {
    board.legal_moves(player).len() as i32 - board.legal_moves(!player).len() as i32
}
