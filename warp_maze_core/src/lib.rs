use serde::{Deserialize, Serialize};

pub mod enemy;
pub mod game;
pub mod grid;
pub mod maze;
pub mod player;
pub mod render;
pub mod score;

/// Represents a 2D coordinate; `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Applies a unit step in `direction`.
    ///
    /// Returns `None` when the step would underflow a coordinate; the upper
    /// bound is checked against the maze by the caller.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Position { x, y })
    }
}

/// The four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions, in the order enemies draw from.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Unit delta as `(dx, dy)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }

    /// Maps a WASD key to a direction, case-insensitively.
    pub fn from_key(key: char) -> Option<Direction> {
        match key.to_ascii_uppercase() {
            'W' => Some(Direction::Up),
            'A' => Some(Direction::Left),
            'S' => Some(Direction::Down),
            'D' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// A collectible lying somewhere in the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub position: Position,
    pub score_value: i32,
}
