use std::collections::VecDeque;
use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use warp_maze_core::{
    Direction, Position,
    enemy::Enemy,
    game::{Game, TurnOutcome},
    maze::Maze,
    render::render,
};

const MAZE_WIDTH: usize = 10;
const MAZE_HEIGHT: usize = 10;
const DEFAULT_OBSTACLES: usize = 15;
const DEFAULT_WARP_ZONES: usize = 3;
const DEFAULT_ITEMS: usize = 5;
const ENEMY_SPAWNS: [Position; 2] = [Position { x: 9, y: 9 }, Position { x: 8, y: 8 }];

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of obstacle cells; defaults apply unless all three counts are given
    obstacle_count: Option<usize>,
    /// Number of warp zone cells
    warp_zone_count: Option<usize>,
    /// Number of collectible items
    item_count: Option<usize>,
    /// Seed for the random number generator
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Applies the all-or-nothing rule: the positional counts are used only
/// when all three are present, otherwise every default applies.
fn resolve_counts(args: &Args) -> (usize, usize, usize) {
    match (args.obstacle_count, args.warp_zone_count, args.item_count) {
        (Some(obstacles), Some(warp_zones), Some(items)) => (obstacles, warp_zones, items),
        _ => (DEFAULT_OBSTACLES, DEFAULT_WARP_ZONES, DEFAULT_ITEMS),
    }
}

/// Splits buffered input into whitespace-delimited tokens, one per call,
/// reading further lines lazily.
struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        TokenReader {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (obstacles, warp_zones, items) = resolve_counts(&args);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut maze = Maze::new(MAZE_WIDTH, MAZE_HEIGHT);
    maze.generate_obstacles(obstacles, &mut rng)?;
    maze.generate_warp_zones(warp_zones, &mut rng)?;
    maze.generate_items(items, &mut rng)?;

    let enemies = ENEMY_SPAWNS.iter().copied().map(Enemy::new).collect();
    let mut game = Game::new(maze, enemies, rng);

    let stdin = io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    run(&mut game, &mut input)
}

/// Plays sessions until the player declines a replay or input ends.
fn run<R: BufRead>(game: &mut Game, input: &mut TokenReader<R>) -> Result<()> {
    loop {
        game.reset();

        loop {
            print!("{}", render(game.maze(), game.player(), game.enemies()));
            println!("Score: {}", game.score());
            println!("Enter move (WASD): ");

            let Some(token) = input.next_token()? else {
                return Ok(());
            };
            let Some(direction) = token.chars().next().and_then(Direction::from_key) else {
                println!("Invalid move!");
                continue;
            };

            match game.play_turn(direction) {
                TurnOutcome::Blocked => println!("Invalid move!"),
                TurnOutcome::Advanced { pickup } => report_pickup(pickup),
                TurnOutcome::Caught { pickup } => {
                    report_pickup(pickup);
                    println!("You were caught by the enemy! Game over.");
                    break;
                }
                TurnOutcome::Won { pickup, .. } => {
                    report_pickup(pickup);
                    println!("You reached the goal! You win!");
                    println!("Final Score: {}", game.score());
                    break;
                }
            }
        }

        println!("Do you want to play again? (y/n): ");
        match input.next_token()? {
            Some(token) if token.to_ascii_uppercase().starts_with('Y') => {}
            _ => return Ok(()),
        }
    }
}

fn report_pickup(pickup: Option<i32>) {
    if let Some(value) = pickup {
        println!("You picked up an item! Score: {value}");
    }
}
