use std::collections::HashMap;

use super::{game::Game, SnakeID};
use crate::api::types::{Coord, Direction};

/// Voronoi-style board control, computed as one multi-source BFS from every
/// living snake's head. A cell belongs to whichever frontier reaches it
/// first; on a shared layer the snake enqueued earlier claims it, so the
/// snake enumeration order (player first) is the tie-break. Snake bodies are
/// walls for every frontier, a deliberately conservative reading of the
/// board.
pub struct BoardBfs {
    pub territory:        HashMap<SnakeID, i64>,
    pub distance_to_food: HashMap<SnakeID, i64>,
}

impl BoardBfs {
    pub fn new(game: &Game) -> Self {
        let mut territory = HashMap::new();
        let mut distance_to_food = HashMap::new();

        let mut visited = game.board.grid();
        let mut food = game.board.grid();
        food.set_all(game.food.iter().copied(), true)
            .expect("food never spawns off the board");

        let mut frontier: Vec<(Coord, SnakeID)> = Vec::new();
        for snake in game.snakes.iter().filter(|snake| snake.alive()) {
            frontier.push((snake.head(), snake.id));
            visited
                .set_all(snake.tail(), true)
                .expect("snake tails never leave the board");
        }

        let mut distance = 0;
        while !frontier.is_empty() {
            let mut next = Vec::new();

            for (coord, snake) in frontier {
                if !game.board.contains(coord) || visited.get(coord).is_some() {
                    continue;
                }
                visited.set(coord, true).expect("bounds were just checked");

                *territory.entry(snake).or_insert(0) += 1;

                if food.get(coord).is_some() {
                    distance_to_food.entry(snake).or_insert(distance);
                }

                for direction in Direction::iter() {
                    next.push((coord.neighbour(*direction), snake));
                }
            }

            frontier = next;
            distance += 1;
        }

        BoardBfs {
            territory,
            distance_to_food,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoardBfs;
    use crate::{
        api::types::Coord,
        strategies::greedy::{board::Board, game::Game, snake::Snake, SnakeID, ME},
    };

    fn snake(id: SnakeID, body: &[(i64, i64)]) -> Snake {
        Snake {
            id,
            health: 100,
            body: body.iter().map(|&(x, y)| Coord { x, y }).collect(),
        }
    }

    fn game(width: i64, height: i64, snakes: Vec<Snake>, food: &[(i64, i64)]) -> Game {
        Game {
            id: "test".to_owned(),
            turn: 0,
            snakes,
            food: food.iter().map(|&(x, y)| Coord { x, y }).collect(),
            board: Board { width, height },
        }
    }

    #[test]
    fn territory_partitions_an_open_board() {
        let game = game(5, 5, vec![snake(0, &[(0, 0)]), snake(1, &[(4, 4)])], &[]);

        let bfs = BoardBfs::new(&game);

        let claimed: i64 = bfs.territory.values().sum();
        assert_eq!(claimed, 25);

        // the diagonal is equidistant and goes to the first-enumerated snake
        assert_eq!(bfs.territory[&0], 15);
        assert_eq!(bfs.territory[&1], 10);
    }

    #[test]
    fn distance_to_food_counts_bfs_layers() {
        let game = game(5, 5, vec![snake(0, &[(0, 0)])], &[(2, 1)]);

        let bfs = BoardBfs::new(&game);

        assert_eq!(bfs.distance_to_food[&ME], 3);
    }

    #[test]
    fn bodies_wall_off_the_frontier() {
        // a full-height enemy column at x = 2 seals the left region
        let game = game(
            5,
            5,
            vec![
                snake(0, &[(0, 0)]),
                snake(1, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]),
            ],
            &[(4, 4)],
        );

        let bfs = BoardBfs::new(&game);

        assert_eq!(bfs.territory[&ME], 10);
        assert_eq!(bfs.distance_to_food.get(&ME), None);

        // the enemy's own tail cells are claimed by nobody
        let claimed: i64 = bfs.territory.values().sum();
        assert_eq!(claimed, 25 - 4);
    }

    #[test]
    fn dead_snakes_claim_nothing() {
        let mut corpse = snake(1, &[(4, 4)]);
        corpse.health = 0;
        let game = game(5, 5, vec![snake(0, &[(0, 0)]), corpse], &[]);

        let bfs = BoardBfs::new(&game);

        assert_eq!(bfs.territory.get(&1), None);
        assert_eq!(bfs.territory[&ME], 25);
    }
}
