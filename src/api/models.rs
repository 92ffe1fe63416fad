use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::api::types::{APIVersion, Coord, Direction, Head, Tail};

#[derive(Serialize, Debug)]
pub struct Status {
    pub apiversion: APIVersion,
    pub author:     String,
    pub color:      String,
    pub head:       Head,
    pub tail:       Tail,
    pub version:    String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Game {
    pub id: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Board {
    pub height: i64,
    pub width:  i64,
    pub food:   Vec<Coord>,
    pub snakes: Vec<Snake>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Snake {
    pub id:     String,
    pub health: i64,
    pub body:   VecDeque<Coord>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GameState {
    pub game:  Game,
    pub turn:  u64,
    pub board: Board,
    pub you:   Snake,
}

#[derive(Serialize, Debug)]
pub struct Movement {
    #[serde(rename = "move")]
    pub movement: Direction,
    pub shout:    Option<String>,
}
