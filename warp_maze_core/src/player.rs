use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Direction, Position, maze::Maze};

/// The player-controlled entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    position: Position,
}

impl Player {
    pub fn new() -> Self {
        Player {
            position: Maze::START,
        }
    }

    /// Returns the player's current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Attempts to move one cell in `direction`.
    ///
    /// The move is rejected (no state change, returns `false`) when the
    /// candidate cell is outside the maze or an obstacle. Stepping onto a
    /// warp zone relocates the player to a random cell that is neither the
    /// warp cell nor the goal. Returns `true` iff the position changed.
    pub fn step<R: Rng>(&mut self, direction: Direction, maze: &Maze, rng: &mut R) -> bool {
        let candidate = match self.position.step(direction) {
            Some(pos) if maze.in_bounds(pos) => pos,
            _ => return false,
        };
        if maze.is_obstacle(candidate) {
            return false;
        }

        self.position = if maze.is_warp_zone(candidate) {
            random_position_excluding(candidate, maze, rng)
        } else {
            candidate
        };
        true
    }

    /// Puts the player back on the start cell.
    pub fn reset_position(&mut self) {
        self.position = Maze::START;
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new()
    }
}

/// Draws random in-bounds positions until one is neither `exclude` nor the
/// goal. Only those two cells are ever rejected, so the loop terminates on
/// any grid with at least three cells; the result may legally be an
/// obstacle or another warp zone.
fn random_position_excluding<R: Rng>(exclude: Position, maze: &Maze, rng: &mut R) -> Position {
    loop {
        let pos = Position {
            x: rng.random_range(0..maze.width()),
            y: rng.random_range(0..maze.height()),
        };
        if pos != exclude && pos != maze.goal() {
            return pos;
        }
    }
}
