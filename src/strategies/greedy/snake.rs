use std::{
    collections::VecDeque,
    hash::{Hash, Hasher},
};

use super::SnakeID;
use crate::api::types::Coord;

#[derive(Clone, Debug, Eq)]
pub struct Snake {
    pub id:     SnakeID,
    pub body:   VecDeque<Coord>,
    pub health: i64,
}

impl Snake {
    pub fn head(&self) -> Coord {
        self.body[0]
    }

    /// The body minus any head-stacked leading segments. A snake that just
    /// grew (or just spawned) carries duplicate segments under its head, and
    /// those must not read as walls for the head cell itself.
    pub fn tail(&self) -> impl Iterator<Item = Coord> + '_ {
        let head = self.head();
        self.body.iter().copied().skip_while(move |c| *c == head)
    }

    pub fn length(&self) -> usize {
        self.body.len()
    }

    pub fn alive(&self) -> bool {
        self.health > 0
    }

    pub fn die(&mut self) {
        self.health = 0;
    }
}

impl PartialEq for Snake {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for Snake {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
