//! Depth-limited minimax search, with and without alpha-beta pruning.
//!
//! Maximizing nodes belong to the player the search was started for and
//! minimizing nodes to the opponent. Leaves are scored by [`eval::evaluate`]
//! for the player to move at that leaf. Each node searches its own copy of the
//! board.

use crate::eval;
use log::{debug, error};
use othello4::{Board, Location, Player};
use std::fmt;

const NEG_INFINITY: i32 = i32::MIN;
const POS_INFINITY: i32 = i32::MAX;

/// The outcome of one search call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// None if the root was already terminal (depth 0 or no legal move).
    pub best_move: Option<Location>,
    pub score: i32,
    /// Nodes entered during this call, leaves included.
    pub nodes: u64,
    pub depth: u8,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.best_move {
            Some(mv) => write!(f, "move {}", mv)?,
            None => f.write_str("no move")?,
        }
        write!(
            f,
            ", score {} ({} nodes at depth {})",
            self.score, self.nodes, self.depth
        )
    }
}

/// Find the best move for `player` with an alpha-beta search `depth` plies deep.
pub fn best_move(board: &Board, player: Player, depth: u8) -> SearchResult {
    run(board, player, depth, true)
}

/// Search the same tree as [`best_move`] without pruning.
/// Returns the same move and score, but visits every node.
pub fn minimax(board: &Board, player: Player, depth: u8) -> SearchResult {
    run(board, player, depth, false)
}

fn run(board: &Board, player: Player, depth: u8, pruning: bool) -> SearchResult {
    let mut search = Search { pruning, nodes: 0 };
    let (best_move, score) =
        search.node(board.duplicate(), depth, NEG_INFINITY, POS_INFINITY, player, true);

    let result = SearchResult {
        best_move,
        score,
        nodes: search.nodes,
        depth,
    };
    debug!("{} search for {}: {}", kind(pruning), player, result);
    result
}

fn kind(pruning: bool) -> &'static str {
    if pruning {
        "Alpha-beta"
    } else {
        "Minimax"
    }
}

/// State for a single search call. The node counter starts at zero for every call.
struct Search {
    pruning: bool,
    nodes: u64,
}

impl Search {
    /// Search `board` with `player` to move and `depth` plies left.
    /// Returns the best move out of this node (None at a leaf) and its score.
    fn node(
        &mut self,
        board: Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        player: Player,
        maximizing: bool,
    ) -> (Option<Location>, i32) {
        self.nodes += 1;

        let moves = board.legal_moves(player);
        if depth == 0 || moves.is_empty() {
            return (None, eval::evaluate(&board, player));
        }

        let mut best_move = None;
        let mut best_score = if maximizing {
            NEG_INFINITY
        } else {
            POS_INFINITY
        };

        for mv in moves {
            let mut child = board.duplicate();
            if let Err(err) = child.apply_move(mv, player) {
                error!("Search generated an illegal move: {}", err);
                continue;
            }

            let (_, score) = self.node(child, depth - 1, alpha, beta, !player, !maximizing);

            // Ties keep the earlier move.
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        (best_move, best_score)
    }
}
