//! Play a game of 4x4 Othello against the computer at the terminal.
//!
//! Usage: `play [CONFIG]`. Without an argument, settings are read from
//! `Othello.toml` in the working directory, falling back to built-in defaults.

use log::{error, info};
use othello4::Game;
use othello4_player::config::Config;
use othello4_player::connectors::{ConsoleConnector, SearchConnector};
use othello4_player::driver::{self, MatchEnd};
use std::env;
use std::io;
use std::process;

fn main() {
    // We default to 'info' level logging, unless `RUST_LOG` says otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(path) => Config::from_file(&path).unwrap_or_else(|e| {
            error!("{}: {}", path, e);
            process::exit(2);
        }),
        None => Config::load_or_default(),
    };
    info!(
        "Human plays {}, computer searches {} plies{}",
        config.game.human_player,
        config.search.depth,
        if config.search.pruning {
            ""
        } else {
            " without pruning"
        }
    );

    let human_player = config.game.human_player;
    let stdin = io::stdin();
    let mut human = ConsoleConnector::new(human_player, stdin.lock(), io::stdout());
    let mut computer = SearchConnector::new(!human_player, &config.search);

    let outcome = driver::play_match(
        Game::default(),
        &mut human,
        &mut computer,
        config.game.max_turns,
        &mut io::stdout(),
    );

    match outcome {
        Ok(outcome) => {
            if outcome.end == MatchEnd::TurnLimit {
                info!("Stopped after {} turns", outcome.turns);
            }
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
