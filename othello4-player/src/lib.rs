//! `othello4-player` chooses moves for the computer side of a 4x4 Othello game
//! and runs matches between human and computer players.
//!
//!  - [`search`] is a depth-limited minimax search with alpha-beta pruning,
//!    scored by the static evaluator in [`eval`].
//!  - [`connectors`] wrap the search and a terminal as interchangeable players.
//!  - [`driver`] runs the turn loop between two connectors.

pub mod config;
pub mod connectors;
pub mod driver;
pub mod eval;
pub mod search;

pub use search::{best_move, minimax, SearchResult};
