use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Item, Position, grid::Grid};

/// Score value carried by every generated item.
pub const ITEM_VALUE: i32 = 10;

/// Represents the static type of a cell in the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Obstacle,
    WarpZone,
    Goal,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Represents errors that can occur while populating the maze.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error(
        "cannot place {requested} more features, only {available} empty cells remain"
    )]
    GridFull { requested: usize, available: usize },
}

/// Owns the grid topology, the goal location, and the set of uncollected
/// items, and answers spatial queries about them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    grid: Grid<Cell>,
    goal: Position,
    items: Vec<Item>,
}

impl Maze {
    /// Cell kept clear by generation so the player always has a spawn.
    pub const START: Position = Position { x: 0, y: 0 };

    /// Creates an empty maze with the goal in the bottom-right corner.
    pub fn new(width: usize, height: usize) -> Self {
        let mut grid = Grid::new(width, height);
        let goal = Position {
            x: width - 1,
            y: height - 1,
        };
        grid[goal] = Cell::Goal;
        Maze {
            grid,
            goal,
            items: Vec::new(),
        }
    }

    /// Returns the width of the maze grid.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns the height of the maze grid.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the fixed goal position.
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Returns the uncollected items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Checks whether `pos` lies within the maze.
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.grid.contains(pos)
    }

    /// Returns the cell type at `pos`.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is out of bounds; callers range-check first.
    pub fn cell(&self, pos: Position) -> Cell {
        self.grid[pos]
    }

    /// Checks whether the cell at `pos` is an obstacle.
    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.grid[pos] == Cell::Obstacle
    }

    /// Checks whether the cell at `pos` is a warp zone.
    pub fn is_warp_zone(&self, pos: Position) -> bool {
        self.grid[pos] == Cell::WarpZone
    }

    /// Checks whether `pos` is the goal, by value comparison against the
    /// stored goal position rather than the grid contents.
    pub fn is_goal(&self, pos: Position) -> bool {
        pos == self.goal
    }

    /// Scatters `count` obstacle cells over empty cells.
    pub fn generate_obstacles<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        self.ensure_capacity(count)?;
        for _ in 0..count {
            let pos = self.random_empty_cell(rng);
            self.grid[pos] = Cell::Obstacle;
        }
        Ok(())
    }

    /// Scatters `count` warp zone cells over empty cells.
    pub fn generate_warp_zones<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        self.ensure_capacity(count)?;
        for _ in 0..count {
            let pos = self.random_empty_cell(rng);
            self.grid[pos] = Cell::WarpZone;
        }
        Ok(())
    }

    /// Scatters `count` items over empty cells.
    ///
    /// Items do not mark the grid, so later items may share a cell with
    /// earlier ones, while obstacles and warp zones stay item-free.
    pub fn generate_items<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        self.ensure_capacity(count)?;
        for _ in 0..count {
            let position = self.random_empty_cell(rng);
            self.items.push(Item {
                position,
                score_value: ITEM_VALUE,
            });
        }
        Ok(())
    }

    /// Builds a maze from a textual layout of whitespace-separated tokens.
    ///
    /// `.` is an empty cell, `X` an obstacle, `W` a warp zone, `I` an item
    /// lying on an empty cell, and `G` the goal (required, exactly once).
    /// Generated mazes always put the goal in the bottom-right corner; the
    /// loader puts it wherever the layout says, which makes it handy for
    /// fixtures.
    pub fn from_layout(layout: &str) -> Result<Maze, String> {
        let lines: Vec<&str> = layout.trim().lines().collect();
        if lines.is_empty() {
            return Err("Layout string is empty.".to_string());
        }

        let height = lines.len();
        let mut width = 0;
        let mut parsed_rows: Vec<Vec<&str>> = Vec::with_capacity(height);

        for (y, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if y == 0 {
                width = tokens.len();
                if width == 0 {
                    return Err("Layout has zero width.".to_string());
                }
            } else if tokens.len() != width {
                return Err(format!(
                    "Inconsistent width at row {}: expected {}, found {}",
                    y,
                    width,
                    tokens.len()
                ));
            }
            parsed_rows.push(tokens);
        }

        let mut grid = Grid::new(width, height);
        let mut items = Vec::new();
        let mut goal: Option<Position> = None;

        for (y, row_tokens) in parsed_rows.iter().enumerate() {
            for (x, token) in row_tokens.iter().enumerate() {
                let pos = Position { x, y };
                match *token {
                    "." => {}
                    "X" => grid[pos] = Cell::Obstacle,
                    "W" => grid[pos] = Cell::WarpZone,
                    "I" => items.push(Item {
                        position: pos,
                        score_value: ITEM_VALUE,
                    }),
                    "G" => {
                        if goal.is_some() {
                            return Err("Multiple goal cells ('G') found.".to_string());
                        }
                        grid[pos] = Cell::Goal;
                        goal = Some(pos);
                    }
                    unknown => {
                        return Err(format!(
                            "Unknown layout token '{}' at position ({}, {}).",
                            unknown, x, y
                        ));
                    }
                }
            }
        }

        let goal = goal.ok_or_else(|| "No goal cell ('G') found in layout.".to_string())?;

        Ok(Maze { grid, goal, items })
    }

    /// Removes and returns at most one item lying at `pos`.
    pub fn pick_up_item(&mut self, pos: Position) -> Option<Item> {
        let index = self.items.iter().position(|item| item.position == pos)?;
        Some(self.items.remove(index))
    }

    /// Rejection-samples a uniformly random cell that is empty and not the
    /// start cell. Loops forever on a full grid; `ensure_capacity` guards
    /// every generation call.
    fn random_empty_cell<R: Rng>(&self, rng: &mut R) -> Position {
        loop {
            let pos = Position {
                x: rng.random_range(0..self.grid.width()),
                y: rng.random_range(0..self.grid.height()),
            };
            if self.grid[pos] == Cell::Empty && pos != Self::START {
                return pos;
            }
        }
    }

    /// Fails when fewer than `requested` empty non-start cells remain.
    fn ensure_capacity(&self, requested: usize) -> Result<(), MazeError> {
        let available = self
            .grid
            .enumerate()
            .filter(|&(pos, cell)| *cell == Cell::Empty && pos != Self::START)
            .count();
        if requested > available {
            return Err(MazeError::GridFull {
                requested,
                available,
            });
        }
        Ok(())
    }
}
