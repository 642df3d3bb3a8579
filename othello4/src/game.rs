//! Implements game-level Othello logic: players, turns, and the end of the game.
//!
//! [`Board`] only knows about cells and captures. [`Game`] additionally tracks
//! whose turn it is, so it is the interface a turn loop should drive.

use crate::board::{Board, InvalidMove, MoveList};
use crate::location::Location;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl Player {
    /// Gets the other player.
    #[inline]
    pub fn opponent(self) -> Self {
        !self
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Player::Black),
            "white" | "w" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// The complete state of a game: the board and the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
}

impl Default for Game {
    /// Gets the starting position with Black to move.
    fn default() -> Self {
        Self::new(Board::new(), Player::default())
    }
}

impl Game {
    pub fn new(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
        }
    }

    /// Get the legal moves for the active player.
    #[inline]
    pub fn get_moves(&self) -> MoveList {
        self.board.legal_moves(self.active_player)
    }

    /// Hand the turn to the other player without placing a piece.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            board: self.board,
            active_player: !self.active_player,
        }
    }

    /// Place a piece for the active player and hand the turn over.
    pub fn apply_move(self, loc: Location) -> Result<Self, InvalidMove> {
        let mut board = self.board;
        board.apply_move(loc, self.active_player)?;
        Ok(Self {
            board,
            active_player: !self.active_player,
        })
    }

    /// The game is over once the board is full or neither player can move.
    pub fn is_finished(&self) -> bool {
        self.board.is_full()
            || (self.board.legal_moves(Player::Black).is_empty()
                && self.board.legal_moves(Player::White).is_empty())
    }

    /// Piece count of `player` minus that of their opponent.
    pub fn piece_difference(&self, player: Player) -> i8 {
        self.board.count_pieces(player) as i8 - self.board.count_pieces(!player) as i8
    }

    /// The player holding more pieces, or None on a tie.
    /// Meaningful once [`Game::is_finished`] holds.
    pub fn winner(&self) -> Option<Player> {
        match self.piece_difference(Player::Black) {
            d if d > 0 => Some(Player::Black),
            d if d < 0 => Some(Player::White),
            _ => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.active_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(!!Player::Black, Player::Black);
    }

    #[test]
    fn player_from_str() {
        assert_eq!(Player::from_str("Black"), Ok(Player::Black));
        assert_eq!(Player::from_str(" white\n"), Ok(Player::White));
        assert_eq!(Player::from_str("W"), Ok(Player::White));
        assert_eq!(Player::from_str("red"), Err(ParsePlayerError));
    }

    #[test]
    fn player_to_str() {
        assert_eq!(Player::Black.to_string(), "Black");
        assert_eq!(Player::White.to_string(), "White");
    }

    #[test]
    fn starting_game() {
        let game = Game::default();
        assert_eq!(game.active_player, Player::Black);
        assert_eq!(game.board, Board::new());
        assert!(!game.is_finished());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn apply_move_switches_player() {
        let game = Game::default();
        let mv = game.get_moves()[0];
        let next = game.apply_move(mv).unwrap();
        assert_eq!(next.active_player, Player::White);
        assert_eq!(next.board.count_pieces(Player::Black), 4);
        assert_eq!(next.piece_difference(Player::Black), 3);
        assert_eq!(next.winner(), Some(Player::Black));
    }

    #[test]
    fn illegal_move_keeps_game() {
        let game = Game::default();
        let corner = Location::from_coords(0, 0).unwrap();
        assert_eq!(
            game.apply_move(corner),
            Err(InvalidMove {
                location: corner,
                player: Player::Black
            })
        );
    }

    #[test]
    fn pass_keeps_board() {
        let game = Game::default();
        let passed = game.pass();
        assert_eq!(passed.board, game.board);
        assert_eq!(passed.active_player, Player::White);
    }

    #[test]
    fn finished_when_full() {
        let board: Board = "BBBB BBBB WWWW WWWB".parse().unwrap();
        let game = Game::new(board, Player::White);
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Player::Black));
    }

    #[test]
    fn finished_when_nobody_can_move() {
        let board: Board = "B... .... .... ...B".parse().unwrap();
        let game = Game::new(board, Player::Black);
        assert!(game.get_moves().is_empty());
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Player::Black));
    }

    #[test]
    fn tie_has_no_winner() {
        let board: Board = "BBBB BBBB WWWW WWWW".parse().unwrap();
        let game = Game::new(board, Player::Black);
        assert!(game.is_finished());
        assert_eq!(game.winner(), None);
    }
}
