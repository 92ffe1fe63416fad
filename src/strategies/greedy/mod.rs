pub mod bench;
pub mod bfs;
pub mod board;
pub mod brain;
pub mod game;
pub mod grid;
pub mod score;
pub mod snake;

use std::time::Instant;

use color_eyre::Result;
use log::info;

use self::game::Game;
use super::Strategy;
use crate::api::{models::GameState, types::Direction};

pub type SnakeID = usize;

/// The controlled snake always sits at index zero after conversion.
pub const ME: SnakeID = 0;

/// Single-ply greedy search: simulate each of the four candidate moves one
/// turn ahead with every opponent held stationary, score the successors, and
/// take the best. The per-turn deadline is the server's problem, not ours;
/// one ply on boards this size completes well inside any sane budget.
pub struct Greedy;

impl Strategy for Greedy {
    fn get_movement(&self, game_state: GameState) -> Result<Direction> {
        let start = Instant::now();

        let game = Game::try_from(game_state)?;
        let movement = brain::best_move(&game);

        info!(
            "turn {}: going {} after {} ms",
            game.turn,
            movement,
            start.elapsed().as_millis()
        );

        Ok(movement)
    }
}
