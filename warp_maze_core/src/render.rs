use crate::{Position, enemy::Enemy, maze::{Cell, Maze}, player::Player};

const PLAYER_GLYPH: char = 'P';
const ENEMY_GLYPH: char = 'E';
const ITEM_GLYPH: char = 'I';
const OBSTACLE_GLYPH: char = 'X';
const WARP_GLYPH: char = 'W';
const GOAL_GLYPH: char = 'G';
const EMPTY_GLYPH: char = ' ';

/// Renders the maze and every entity as a text grid.
///
/// Cells within a row are separated by a single space and each row ends
/// with a newline. Read-only; nothing is mutated.
pub fn render(maze: &Maze, player: &Player, enemies: &[Enemy]) -> String {
    let mut out = String::with_capacity(maze.height() * (maze.width() * 2 + 1));
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let pos = Position { x, y };
            out.push(glyph_at(maze, player, enemies, pos));
            if x < maze.width() - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

/// Entity priority is an explicit ordered check: player over enemy over
/// item over terrain.
fn glyph_at(maze: &Maze, player: &Player, enemies: &[Enemy], pos: Position) -> char {
    if player.position() == pos {
        return PLAYER_GLYPH;
    }
    if enemies.iter().any(|enemy| enemy.position() == pos) {
        return ENEMY_GLYPH;
    }
    if maze.items().iter().any(|item| item.position == pos) {
        return ITEM_GLYPH;
    }
    match maze.cell(pos) {
        Cell::Empty => EMPTY_GLYPH,
        Cell::Obstacle => OBSTACLE_GLYPH,
        Cell::WarpZone => WARP_GLYPH,
        Cell::Goal => GOAL_GLYPH,
    }
}
