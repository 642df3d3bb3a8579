//! [`Connector`] for a human entering moves at a terminal.

use super::{Connector, ConnectorError};
use othello4::{Game, Location, Player};
use std::io::{BufRead, Write};

/// Reads moves from `input` and writes prompts to `output`.
/// Accepts a row and a column on separate lines, or a whole location on the
/// row line ("1 2" or "C2").
pub struct ConsoleConnector<R, W> {
    player: Player,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleConnector<R, W> {
    pub fn new(player: Player, input: R, output: W) -> Self {
        Self {
            player,
            input,
            output,
        }
    }

    /// Print `prompt` and read one line of input.
    fn prompt(&mut self, prompt: &str) -> Result<String, ConnectorError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConnectorError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask for one location. None if the input does not name a cell.
    fn read_location(&mut self) -> Result<Option<Location>, ConnectorError> {
        let row_line = self.prompt("Enter row (0-3): ")?;
        if let Ok(loc) = row_line.parse::<Location>() {
            return Ok(Some(loc));
        }

        let row = match row_line.parse::<usize>() {
            Ok(row) => row,
            Err(_) => return Ok(None),
        };
        let col_line = self.prompt("Enter column (0-3): ")?;
        Ok(col_line
            .parse::<usize>()
            .ok()
            .and_then(|col| Location::from_coords(row, col)))
    }
}

impl<R: BufRead, W: Write> Connector for ConsoleConnector<R, W> {
    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, game: &Game) -> Result<Location, ConnectorError> {
        let moves = game.get_moves();
        if moves.is_empty() {
            return Err(ConnectorError::NoMoves(game.active_player));
        }

        writeln!(self.output, "Your valid moves:")?;
        for mv in &moves {
            let (row, col) = mv.to_coords();
            writeln!(self.output, "Row: {}, Col: {}", row, col)?;
        }

        loop {
            match self.read_location()? {
                Some(loc) if moves.contains(loc) => return Ok(loc),
                _ => writeln!(self.output, "Invalid move. Try again.")?,
            }
        }
    }
}
