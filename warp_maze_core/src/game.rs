use rand::rngs::StdRng;

use crate::{Direction, enemy::Enemy, maze::Maze, player::Player, score::Score};

/// Score every play starts from.
pub const INITIAL_SCORE: i32 = 1000;
/// Points deducted for each successful move.
pub const MOVE_COST: i32 = 10;
/// Base bonus granted on reaching the goal, before the per-move penalty.
pub const GOAL_BONUS: i32 = 500;

/// Result of one attempted player turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move was rejected; no turn was consumed and nothing changed.
    Blocked,
    /// The move went through and play continues.
    Advanced { pickup: Option<i32> },
    /// An enemy landed on the player; the play is lost.
    Caught { pickup: Option<i32> },
    /// The player reached the goal; the play is won.
    Won { pickup: Option<i32>, bonus: i32 },
}

/// One game session: the maze plus all mutable per-play state.
///
/// The maze (and its item list) lives for the whole session; `reset`
/// restores entity positions, the score, and the move counter between
/// plays without regenerating anything.
#[derive(Debug)]
pub struct Game {
    maze: Maze,
    player: Player,
    enemies: Vec<Enemy>,
    score: Score,
    moves: i32,
    rng: StdRng,
}

impl Game {
    /// Wires a session together. The RNG drives warp relocation and enemy
    /// movement; seed it for deterministic play.
    pub fn new(maze: Maze, enemies: Vec<Enemy>, rng: StdRng) -> Self {
        Game {
            maze,
            player: Player::new(),
            enemies,
            score: Score::new(INITIAL_SCORE),
            moves: 0,
            rng,
        }
    }

    /// Resets per-play state: entity positions, score, move counter.
    /// Items collected in earlier plays stay gone.
    pub fn reset(&mut self) {
        self.player.reset_position();
        for enemy in &mut self.enemies {
            enemy.reset_position();
        }
        self.score.reset(INITIAL_SCORE);
        self.moves = 0;
    }

    /// Plays one turn: the player's move, the score deduction, item
    /// pickup, every enemy's move, and the loss and win checks, in that
    /// order. A rejected move consumes nothing.
    pub fn play_turn(&mut self, direction: Direction) -> TurnOutcome {
        if !self.player.step(direction, &self.maze, &mut self.rng) {
            return TurnOutcome::Blocked;
        }

        self.moves += 1;
        self.score.deduct_points(MOVE_COST);

        let pickup = self.maze.pick_up_item(self.player.position()).map(|item| {
            self.score.add_points(item.score_value);
            item.score_value
        });

        // The loss check precedes the goal check; enemies behind the one
        // that caught the player do not move this turn.
        for enemy in &mut self.enemies {
            enemy.wander(&self.maze, &mut self.rng);
            if enemy.position() == self.player.position() {
                return TurnOutcome::Caught { pickup };
            }
        }

        if self.maze.is_goal(self.player.position()) {
            let bonus = GOAL_BONUS - self.moves * MOVE_COST;
            self.score.add_points(bonus);
            return TurnOutcome::Won { pickup, bonus };
        }

        TurnOutcome::Advanced { pickup }
    }

    pub fn score(&self) -> i32 {
        self.score.value()
    }

    pub fn moves(&self) -> i32 {
        self.moves
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }
}
