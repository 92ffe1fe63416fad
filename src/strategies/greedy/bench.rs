use std::{collections::VecDeque, time::Instant};

use rand::RngExt;

use super::{board::Board, brain::best_move, game::Game, snake::Snake, SnakeID};
use crate::api::{constants::MAX_HEALTH, types::Coord};

fn make_snake(id: SnakeID, board_width: i64, board_height: i64, num_players: u64) -> Snake {
    let spacing = board_width / num_players as i64;
    let offset = spacing / 2;

    let xpos = offset + spacing * id as i64;

    let body: VecDeque<_> = (2..board_height - 2)
        .map(|y| Coord { x: xpos, y })
        .collect();

    Snake {
        id,
        body,
        health: MAX_HEALTH,
    }
}

/// Evenly spaced vertical snakes and a handful of random food. Not a
/// realistic midgame, but plenty to exercise the full decide path.
pub fn make_game(num_players: u64, board_width: i64, board_height: i64) -> Game {
    let mut rng = rand::rng();

    let mut food: Vec<Coord> = (0..rng.random_range(1..10))
        .map(|_| Coord {
            x: rng.random_range(0..board_width),
            y: rng.random_range(0..board_height),
        })
        .collect();
    food.sort_unstable_by_key(|coord| (coord.x, coord.y));
    food.dedup();

    Game {
        id: "gymnasium".to_owned(),
        turn: 0,
        snakes: (0..num_players)
            .map(|id| make_snake(id as SnakeID, board_width, board_height, num_players))
            .collect(),
        food,
        board: Board {
            width:  board_width,
            height: board_height,
        },
    }
}

/// Mean wall-clock milliseconds per decision on a generated game.
pub fn benchmark_game(num_players: u64, board_width: i64, board_height: i64, runs: u32) -> f64 {
    let game = make_game(num_players, board_width, board_height);

    let total: f64 = (0..runs)
        .map(|_| {
            let now = Instant::now();
            best_move(&game);
            now.elapsed().as_secs_f64() * 1000.0
        })
        .sum();

    total / f64::from(runs)
}

#[cfg(test)]
mod tests {
    use super::make_game;

    #[test]
    fn generated_games_are_well_formed() {
        for players in 1..=4 {
            let game = make_game(players, 11, 11);

            assert_eq!(game.snakes.len(), players as usize);
            for snake in &game.snakes {
                assert!(snake.alive());
                assert!(snake.body.iter().all(|c| game.board.contains(*c)));
            }

            assert!(!game.food.is_empty());
            assert!(game.food.iter().all(|c| game.board.contains(*c)));
            let mut dedup = game.food.clone();
            dedup.sort_unstable_by_key(|c| (c.x, c.y));
            dedup.dedup();
            assert_eq!(dedup.len(), game.food.len());
        }
    }
}
