use std::collections::HashMap;

use itertools::Itertools;
use log::debug;

use super::{bfs::BoardBfs, game::Game, ME};
use crate::api::types::Direction;

/// Ranks the four candidate actions by simulating one turn each, with every
/// opponent held stationary, and returns the best. The first maximum wins,
/// so ties resolve in `Direction::iter` order. Always produces an answer:
/// a doomed position still has to send something back.
pub fn best_move(game: &Game) -> Direction {
    let mut best: Option<(Direction, i64)> = None;
    let mut report = Vec::new();

    for direction in Direction::iter() {
        let step = game.step(&HashMap::from([(ME, *direction)]));
        let bfs = BoardBfs::new(&step);
        let factors = step.score(&bfs);
        let score = factors.calculate();

        debug!("turn {}: {} scores {} ({})", game.turn, direction, score, factors);
        report.push(format!("{direction} => {score}"));

        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((*direction, score)),
        }
    }

    let (direction, score) = best.expect("four candidates always leave a best");

    debug!(
        "turn {}: [{}] -> {} at {}",
        game.turn,
        report.iter().join(", "),
        direction,
        score
    );

    direction
}
