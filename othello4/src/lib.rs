//! `othello4` implements the rules of Othello on a 4x4 board.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds the cells and implements the capture rule: move legality,
//!    legal move enumeration, and move application with flipping. Boards are
//!    small [`Copy`] values, so search code can duplicate them freely.
//!  - [`Game`] pairs a board with the player to move and knows when the game is over.
//!    This is the interface a turn loop should use.

pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of cells on one edge of the board.
pub const EDGE_LENGTH: usize = 4;

/// The number of cells on the board.
pub const NUM_SPACES: usize = 16;
