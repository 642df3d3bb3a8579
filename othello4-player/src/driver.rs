//! The turn loop: ask each side for moves until the game is over.

use crate::connectors::{Connector, ConnectorError};
use derive_more::{Display, Error, From};
use log::{info, warn};
use othello4::{Game, Player};
use std::io::{self, Write};

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchEnd {
    /// The board is full or neither player can move.
    Finished,
    /// The turn limit was reached first.
    TurnLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub game: Game,
    pub turns: u32,
    pub end: MatchEnd,
}

impl MatchOutcome {
    pub fn winner(&self) -> Option<Player> {
        self.game.winner()
    }
}

#[derive(Debug, Display, Error, From)]
pub enum MatchError {
    #[display(fmt = "connector failed: {}", _0)]
    Connector(ConnectorError),
    #[display(fmt = "failed to write match output: {}", _0)]
    Output(io::Error),
    #[display(fmt = "both connectors play {}", _0)]
    SameColor(#[error(not(source))] Player),
}

/// Play `game` out between two connectors, which may be given in either order.
/// Every turn is printed to `out`. The match ends when the game does, or after `max_turns` turns.
pub fn play_match<'a, W: Write>(
    mut game: Game,
    first: &'a mut dyn Connector,
    second: &'a mut dyn Connector,
    max_turns: u32,
    out: &mut W,
) -> Result<MatchOutcome, MatchError> {
    if first.player() == second.player() {
        return Err(MatchError::SameColor(first.player()));
    }

    let mut turns = 0;
    let end = loop {
        if game.is_finished() {
            break MatchEnd::Finished;
        }
        if turns >= max_turns {
            writeln!(out, "Game ended due to maximum turn limit.")?;
            break MatchEnd::TurnLimit;
        }

        turns += 1;
        print_board(out, &game, turns)?;

        let player = game.active_player;
        if game.get_moves().is_empty() {
            writeln!(out, "No valid moves for {}. Skipping turn.", player)?;
            info!("Turn {}: {} passes", turns, player);
            game = game.pass();
            continue;
        }

        let connector = if first.player() == player {
            &mut *first
        } else {
            &mut *second
        };
        let mv = connector.select_move(&game)?;

        game = match game.apply_move(mv) {
            Ok(next) => {
                let (row, col) = mv.to_coords();
                writeln!(out, "{} plays row {}, col {}.", player, row, col)?;
                next
            }
            Err(err) => {
                warn!("Turn {}: {}", turns, err);
                writeln!(out, "{} chose an invalid move. Skipping turn.", player)?;
                game.pass()
            }
        };
    };

    print_final_score(out, &game)?;
    info!("Match over after {} turns ({:?})", turns, end);

    Ok(MatchOutcome { game, turns, end })
}

fn print_board<W: Write>(out: &mut W, game: &Game, turn: u32) -> io::Result<()> {
    writeln!(out, "\nCurrent Board (Turn {}):", turn)?;
    writeln!(out, "{}", game.board)?;
    writeln!(out, "\nBlack Pieces: {}", game.board.count_pieces(Player::Black))?;
    writeln!(out, "White Pieces: {}", game.board.count_pieces(Player::White))
}

fn print_final_score<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out, "\nGame Over!")?;
    writeln!(out, "Black Pieces: {}", game.board.count_pieces(Player::Black))?;
    writeln!(out, "White Pieces: {}", game.board.count_pieces(Player::White))?;
    match game.winner() {
        Some(player) => writeln!(out, "{} Wins!", player),
        None => writeln!(out, "It's a Tie!"),
    }
}
