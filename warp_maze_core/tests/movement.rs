use rand::{SeedableRng, rngs::StdRng};
use warp_maze_core::{Direction, Position, enemy::Enemy, maze::Maze, player::Player};

#[test]
fn player_moves_change_position_or_report_rejection() {
    let maze = Maze::from_layout(
        ". X .\n\
         . . .\n\
         . . G",
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let mut player = Player::new();

    // Bounds reject up and left from the corner, the obstacle rejects right.
    for direction in [Direction::Up, Direction::Left, Direction::Right] {
        assert!(!player.step(direction, &maze, &mut rng));
        assert_eq!(player.position(), Maze::START);
    }

    assert!(player.step(Direction::Down, &maze, &mut rng));
    assert_eq!(player.position(), Position { x: 0, y: 1 });
}

#[test]
fn warp_relocation_avoids_warp_and_goal() {
    let maze = Maze::from_layout(
        ". W .\n\
         . . .\n\
         . . G",
    )
    .unwrap();
    let warp = Position { x: 1, y: 0 };

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut player = Player::new();
        assert!(player.step(Direction::Right, &maze, &mut rng));

        let landed = player.position();
        assert!(maze.in_bounds(landed));
        assert_ne!(landed, warp, "seed {seed} landed on the warp cell");
        assert_ne!(landed, maze.goal(), "seed {seed} landed on the goal");
    }
}

#[test]
fn boxed_enemy_never_moves() {
    let maze = Maze::from_layout(
        ". X .\n\
         X . X\n\
         . X G",
    )
    .unwrap();
    let spawn = Position { x: 1, y: 1 };
    let mut enemy = Enemy::new(spawn);
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        enemy.wander(&maze, &mut rng);
        assert_eq!(enemy.position(), spawn);
    }
}

#[test]
fn wandering_enemy_stays_in_bounds_and_off_obstacles() {
    let maze = Maze::from_layout(
        ". X .\n\
         . . .\n\
         . X G",
    )
    .unwrap();
    let mut enemy = Enemy::new(Position { x: 0, y: 0 });
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..500 {
        enemy.wander(&maze, &mut rng);
        assert!(maze.in_bounds(enemy.position()));
        assert!(!maze.is_obstacle(enemy.position()));
    }
}

#[test]
fn resets_restore_spawn_positions() {
    let maze = Maze::new(10, 10);
    let spawn = Position { x: 9, y: 9 };
    let mut enemy = Enemy::new(spawn);
    let mut player = Player::new();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..10 {
        enemy.wander(&maze, &mut rng);
    }
    assert!(player.step(Direction::Right, &maze, &mut rng));

    enemy.reset_position();
    player.reset_position();
    assert_eq!(enemy.position(), spawn);
    assert_eq!(player.position(), Maze::START);
}
