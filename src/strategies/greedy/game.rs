use std::{collections::HashMap, fmt};

use color_eyre::{
    eyre::{ensure, eyre},
    Result,
};

use super::{bfs::BoardBfs, board::Board, score::ScoreFactors, snake::Snake, SnakeID, ME};
use crate::api::{
    models::GameState,
    types::{Coord, Direction},
};

#[derive(Clone, Debug)]
pub struct Game {
    pub id:     String,
    pub turn:   u64,
    pub snakes: Vec<Snake>,
    pub food:   Vec<Coord>,
    pub board:  Board,
}

impl Game {
    pub fn player(&self) -> Option<&Snake> {
        self.snakes.iter().find(|snake| snake.id == ME)
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Snake> {
        self.snakes.iter().filter(|snake| snake.id != ME)
    }

    /// Applies one resolution step and returns the successor snapshot. The
    /// receiver is never touched, and the turn number is the caller's to
    /// advance.
    ///
    /// `moves` may omit snakes. An omitted snake neither moves nor shrinks
    /// this step, which is how opponents with unknown intent are simulated.
    pub fn step(&self, moves: &HashMap<SnakeID, Direction>) -> Game {
        let mut step = self.clone();

        // the set of actors for the whole pass; snakes dead on entry are
        // skipped everywhere below
        let actors: Vec<usize> = step
            .snakes
            .iter()
            .enumerate()
            .filter(|(_, snake)| snake.alive())
            .map(|(index, _)| index)
            .collect();

        // step 1 - grow a new head in the chosen direction
        for &index in &actors {
            let snake = &mut step.snakes[index];
            if let Some(direction) = moves.get(&snake.id) {
                snake.body.push_front(snake.head().neighbour(*direction));
            }
        }

        // step 2 - health decay, moved or not
        for &index in &actors {
            step.snakes[index].health -= 1;
        }

        // step 3 - eat, or shrink back to length if the snake actually moved
        for &index in &actors {
            let head = step.snakes[index].head();
            if let Some(found) = step.food.iter().position(|food| *food == head) {
                step.food.remove(found);
            } else if moves.contains_key(&step.snakes[index].id) {
                step.snakes[index].body.pop_back();
            }
            // no decided action: the body stays exactly as it was
        }

        // step 4 - elimination. every snake is judged against the same
        // frozen capture of walls and heads, so evaluation order across
        // snakes cannot change who dies.
        let mut walls = step.board.grid();
        for &index in &actors {
            walls
                .set_all(step.snakes[index].tail(), true)
                .expect("snake tails never leave the board");
        }

        let heads: Vec<(Coord, usize)> = actors
            .iter()
            .map(|&index| (step.snakes[index].head(), step.snakes[index].length()))
            .collect();

        for (slot, &index) in actors.iter().enumerate() {
            let head = step.snakes[index].head();
            let length = step.snakes[index].length();

            let lost_collision =
                heads
                    .iter()
                    .enumerate()
                    .any(|(other_slot, &(other_head, other_length))| {
                        other_slot != slot && other_head == head && other_length >= length
                    });

            if !step.board.contains(head) || walls.get(head).is_some() || lost_collision {
                step.snakes[index].die();
            }
        }

        step
    }

    pub fn score(&self, bfs: &BoardBfs) -> ScoreFactors {
        let player = match self.player() {
            Some(player) if player.alive() => player,
            // missing or dead: nothing else on the board matters
            _ => return ScoreFactors::dead(),
        };

        let enemies: Vec<&Snake> = self.enemies().filter(|snake| snake.alive()).collect();

        ScoreFactors::alive(
            player.length() as i64,
            player.health,
            enemies.len() as i64,
            enemies
                .iter()
                .map(|snake| snake.length() as i64)
                .max()
                .unwrap_or(0),
            enemies.iter().map(|snake| snake.length() as i64).sum(),
            bfs.territory.get(&ME).copied().unwrap_or(0),
            bfs.distance_to_food
                .get(&ME)
                .copied()
                .unwrap_or(self.board.width),
        )
    }
}

impl TryFrom<GameState> for Game {
    type Error = color_eyre::Report;

    fn try_from(state: GameState) -> Result<Self> {
        ensure!(
            state.board.width > 0 && state.board.height > 0,
            "board dimensions must be positive, got {}x{}",
            state.board.width,
            state.board.height
        );

        // putting ourselves first fixes ME = 0 and makes us win same-layer
        // BFS ties.
        let you_index = state
            .board
            .snakes
            .iter()
            .position(|snake| snake.id == state.you.id)
            .ok_or_else(|| eyre!("controlled snake {} is not on the board", state.you.id))?;

        let mut snakes = state.board.snakes;
        snakes.swap(ME, you_index);

        let snakes = snakes
            .into_iter()
            .enumerate()
            .map(|(id, snake)| {
                ensure!(!snake.body.is_empty(), "snake {} has an empty body", snake.id);
                Ok(Snake {
                    id,
                    body: snake.body,
                    health: snake.health,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Game {
            id: state.game.id,
            turn: state.turn,
            snakes,
            food: state.board.food,
            board: Board {
                width:  state.board.width,
                height: state.board.height,
            },
        })
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.board.height {
            for x in 0..self.board.width {
                let c = Coord { x, y };
                let living = || self.snakes.iter().filter(|snake| snake.alive());
                if living().any(|snake| snake.head() == c) {
                    write!(f, "@")?;
                } else if living().any(|snake| snake.body.contains(&c)) {
                    write!(f, "#")?;
                } else if self.food.contains(&c) {
                    write!(f, "o")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
