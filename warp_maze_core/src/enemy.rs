use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Direction, Position, maze::Maze};

/// A roaming entity that moves one random step per turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    position: Position,
    spawn: Position,
}

impl Enemy {
    pub fn new(spawn: Position) -> Self {
        Enemy {
            position: spawn,
            spawn,
        }
    }

    /// Returns the enemy's current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Picks one of the four directions uniformly at random and moves there
    /// when the candidate cell is in bounds and not an obstacle; otherwise
    /// the enemy stays in place for this turn.
    pub fn wander<R: Rng>(&mut self, maze: &Maze, rng: &mut R) {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        if let Some(candidate) = self.position.step(direction) {
            if maze.in_bounds(candidate) && !maze.is_obstacle(candidate) {
                self.position = candidate;
            }
        }
    }

    /// Puts the enemy back on its spawn cell.
    pub fn reset_position(&mut self) {
        self.position = self.spawn;
    }
}
