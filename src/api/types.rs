use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub enum APIVersion {
    #[serde(rename = "1")]
    One,
}

#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // candidate enumeration order is part of the contract: ties between
    // equally-scored moves resolve to the earliest direction in this list.
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        DIRECTIONS.iter()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "Up",
                Direction::Down => "Down",
                Direction::Left => "Left",
                Direction::Right => "Right",
            }
        )
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coord {
    // the board origin is top-left: up decreases y, down increases it.
    pub fn neighbour(&self, direction: Direction) -> Coord {
        Coord {
            x: self.x
                + match direction {
                    Direction::Right => 1,
                    Direction::Left => -1,
                    _ => 0,
                },
            y: self.y
                + match direction {
                    Direction::Down => 1,
                    Direction::Up => -1,
                    _ => 0,
                },
        }
    }
}

#[derive(Serialize, Debug)]
pub enum Head {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "all-seeing")]
    AllSeeing,
    #[serde(rename = "evil")]
    Evil,
    #[serde(rename = "fang")]
    Fang,
    #[serde(rename = "sand-worm")]
    SandWorm,
    #[serde(rename = "viper")]
    Viper,
}

#[derive(Serialize, Debug)]
pub enum Tail {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "bolt")]
    Bolt,
    #[serde(rename = "curled")]
    Curled,
    #[serde(rename = "rattle")]
    Rattle,
    #[serde(rename = "sharp")]
    Sharp,
}
