//! [`Connector`] for the computer player, backed by the alpha-beta search.

use super::{Connector, ConnectorError};
use crate::config::SearchConfig;
use crate::search::{self, SearchResult};
use log::info;
use othello4::{Game, Location, Player};

pub struct SearchConnector {
    player: Player,
    depth: u8,
    pruning: bool,
    last_result: Option<SearchResult>,
}

impl SearchConnector {
    pub fn new(player: Player, config: &SearchConfig) -> Self {
        Self {
            player,
            depth: config.depth,
            pruning: config.pruning,
            last_result: None,
        }
    }

    /// The result of the most recent search, if any.
    pub fn last_result(&self) -> Option<SearchResult> {
        self.last_result
    }
}

impl Connector for SearchConnector {
    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, game: &Game) -> Result<Location, ConnectorError> {
        let result = if self.pruning {
            search::best_move(&game.board, game.active_player, self.depth)
        } else {
            search::minimax(&game.board, game.active_player, self.depth)
        };
        self.last_result = Some(result);

        let mv = result
            .best_move
            .ok_or(ConnectorError::NoMoves(game.active_player))?;
        let (row, col) = mv.to_coords();
        info!(
            "{} (computer) plays row {}, col {}: {}",
            game.active_player, row, col, result
        );
        Ok(mv)
    }
}
