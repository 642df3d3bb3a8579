use derive_more::{Display, Error};
use othello4::{Game, Location, Player};
use std::io;

/// A player-facing abstract interface to one side of a match.
pub trait Connector {
    /// Find out what color this connector plays.
    fn player(&self) -> Player;

    /// Choose a move for the active player of `game`.
    /// The driver only asks when at least one legal move exists.
    fn select_move(&mut self, game: &Game) -> Result<Location, ConnectorError>;
}

#[derive(Debug, Display, Error)]
pub enum ConnectorError {
    #[display(fmt = "input closed before a move was entered")]
    InputClosed,
    #[display(fmt = "no legal move for {}", _0)]
    NoMoves(#[error(not(source))] Player),
    #[display(fmt = "i/o error: {}", _0)]
    Io(io::Error),
}

impl From<io::Error> for ConnectorError {
    fn from(err: io::Error) -> Self {
        ConnectorError::Io(err)
    }
}
