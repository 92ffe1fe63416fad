use std::fmt;

/// The fixed linear model behind every move decision. The weights are
/// hand-tuned knobs, not laws; the dead sentinel must simply dominate any
/// score a live position can produce.
#[derive(Debug, Clone, Copy)]
pub struct ScoreFactors {
    pub dead:               bool,
    pub length:             i64,
    pub health:             i64,
    pub living_enemies:     i64,
    pub longest_enemy:      i64,
    pub total_enemy_length: i64,
    pub territory:          i64,
    pub distance_to_food:   i64,
}

impl ScoreFactors {
    const DEAD_SCORE: i64 = -999_999;
    const DISTANCE_TO_FOOD_WEIGHT: i64 = -1;
    const HEALTH_WEIGHT: i64 = 1;
    const LENGTH_WEIGHT: i64 = 25;
    const LIVING_ENEMIES_WEIGHT: i64 = -100;
    const LONGEST_ENEMY_WEIGHT: i64 = -1;
    const TERRITORY_WEIGHT: i64 = 1;
    const TOTAL_ENEMY_LENGTH_WEIGHT: i64 = -1;

    pub fn alive(
        length: i64,
        health: i64,
        living_enemies: i64,
        longest_enemy: i64,
        total_enemy_length: i64,
        territory: i64,
        distance_to_food: i64,
    ) -> Self {
        Self {
            dead: false,
            length,
            health,
            living_enemies,
            longest_enemy,
            total_enemy_length,
            territory,
            distance_to_food,
        }
    }

    pub fn dead() -> Self {
        Self {
            dead: true,
            length: 0,
            health: 0,
            living_enemies: 0,
            longest_enemy: 0,
            total_enemy_length: 0,
            territory: 0,
            distance_to_food: 0,
        }
    }

    pub fn calculate(&self) -> i64 {
        if self.dead {
            Self::DEAD_SCORE
        } else {
            Self::LENGTH_WEIGHT * self.length
                + Self::HEALTH_WEIGHT * self.health
                + Self::LIVING_ENEMIES_WEIGHT * self.living_enemies
                + Self::LONGEST_ENEMY_WEIGHT * self.longest_enemy
                + Self::TOTAL_ENEMY_LENGTH_WEIGHT * self.total_enemy_length
                + Self::TERRITORY_WEIGHT * self.territory
                + Self::DISTANCE_TO_FOOD_WEIGHT * self.distance_to_food
        }
    }
}

impl fmt::Display for ScoreFactors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.dead {
            write!(f, "dead ({})", Self::DEAD_SCORE)
        } else {
            write!(
                f,
                "{} long, {} hp, {} enemies (longest {}, total {}), {} tiles, food {} away",
                self.length,
                self.health,
                self.living_enemies,
                self.longest_enemy,
                self.total_enemy_length,
                self.territory,
                self.distance_to_food
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScoreFactors;
    use crate::strategies::greedy::{bfs::BoardBfs, board::Board, game::Game, snake::Snake};

    fn baseline() -> ScoreFactors {
        ScoreFactors::alive(3, 80, 1, 3, 3, 40, 2)
    }

    #[test]
    fn more_health_never_scores_worse() {
        let mut better = baseline();
        better.health += 1;

        assert!(better.calculate() > baseline().calculate());
    }

    #[test]
    fn an_extra_enemy_never_scores_better() {
        let mut worse = baseline();
        worse.living_enemies += 1;
        worse.total_enemy_length += worse.longest_enemy;

        assert!(worse.calculate() < baseline().calculate());
    }

    #[test]
    fn the_dead_sentinel_dominates_live_scores() {
        // even an absurdly strong live position stays above it
        let strong = ScoreFactors::alive(100, 100, 0, 0, 0, 500, 0);
        let weak = ScoreFactors::alive(1, 1, 8, 100, 500, 0, 50);

        assert!(ScoreFactors::dead().calculate() < weak.calculate());
        assert!(weak.calculate() < strong.calculate());
    }

    #[test]
    fn a_board_without_the_player_scores_as_a_loss() {
        let game = Game {
            id: "test".to_owned(),
            turn: 0,
            snakes: vec![Snake {
                id:     1,
                health: 100,
                body:   [crate::api::types::Coord { x: 2, y: 2 }].into_iter().collect(),
            }],
            food: vec![],
            board: Board {
                width:  5,
                height: 5,
            },
        };
        let bfs = BoardBfs::new(&game);

        assert_eq!(game.score(&bfs).calculate(), ScoreFactors::DEAD_SCORE);
    }
}
