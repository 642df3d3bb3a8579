//! Random self-play, used to generate varied positions for tests and benchmarks.

use crate::game::Game;
use rand::seq::SliceRandom;
use rand::Rng;

/// Play uniformly random legal moves from `start` until the game ends,
/// passing whenever the player to move has no legal move.
/// Returns every position reached, starting with `start`.
pub fn random_game<R: Rng + ?Sized>(start: Game, rng: &mut R) -> Vec<Game> {
    let mut positions = vec![start];
    let mut game = start;

    while !game.is_finished() {
        let moves = game.get_moves();
        game = match moves.choose(rng) {
            Some(&mv) => match game.apply_move(mv) {
                Ok(next) => next,
                Err(_) => break,
            },
            None => game.pass(),
        };
        positions.push(game);
    }

    positions
}

/// Collect the positions of `num_games` random games from the opening.
pub fn random_positions<R: Rng + ?Sized>(num_games: usize, rng: &mut R) -> Vec<Game> {
    (0..num_games)
        .flat_map(|_| random_game(Game::default(), rng))
        .collect()
}
