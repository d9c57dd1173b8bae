use rand::{SeedableRng, rngs::StdRng};
use warp_maze_core::{
    Position,
    maze::{Cell, ITEM_VALUE, Maze, MazeError},
};

fn count_cells(maze: &Maze, wanted: Cell) -> usize {
    let mut count = 0;
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            if maze.cell(Position { x, y }) == wanted {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn generation_places_exact_counts() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut maze = Maze::new(10, 10);
    maze.generate_obstacles(15, &mut rng).unwrap();
    maze.generate_warp_zones(3, &mut rng).unwrap();
    maze.generate_items(5, &mut rng).unwrap();

    assert_eq!(count_cells(&maze, Cell::Obstacle), 15);
    assert_eq!(count_cells(&maze, Cell::WarpZone), 3);
    assert_eq!(maze.items().len(), 5);
    assert_eq!(maze.cell(Maze::START), Cell::Empty);
    assert_eq!(maze.goal(), Position { x: 9, y: 9 });
    assert_eq!(maze.cell(maze.goal()), Cell::Goal);
}

#[test]
fn items_only_land_on_empty_non_start_cells() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut maze = Maze::new(10, 10);
        maze.generate_obstacles(30, &mut rng).unwrap();
        maze.generate_warp_zones(5, &mut rng).unwrap();
        maze.generate_items(10, &mut rng).unwrap();

        for item in maze.items() {
            assert_eq!(maze.cell(item.position), Cell::Empty);
            assert_ne!(item.position, Maze::START);
            assert_eq!(item.score_value, ITEM_VALUE);
        }
    }
}

#[test]
fn over_capacity_requests_are_rejected() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut maze = Maze::new(10, 10);

    // 100 cells minus the goal cell and the reserved start cell.
    assert_eq!(
        maze.generate_obstacles(99, &mut rng),
        Err(MazeError::GridFull {
            requested: 99,
            available: 98,
        })
    );

    // The bound is tight: filling every available cell still succeeds.
    maze.generate_obstacles(98, &mut rng).unwrap();
    assert_eq!(count_cells(&maze, Cell::Obstacle), 98);
    assert_eq!(maze.cell(Maze::START), Cell::Empty);
}

#[test]
fn pick_up_item_is_permanent() {
    let mut maze = Maze::from_layout(
        ". I .\n\
         . . .\n\
         . . G",
    )
    .unwrap();
    let pos = Position { x: 1, y: 0 };

    let item = maze.pick_up_item(pos).expect("item present");
    assert_eq!(item.score_value, ITEM_VALUE);
    assert!(maze.pick_up_item(pos).is_none());
    assert!(maze.items().is_empty());
}

#[test]
fn goal_check_compares_by_value() {
    let maze = Maze::new(10, 10);
    assert!(maze.is_goal(Position { x: 9, y: 9 }));
    assert!(!maze.is_goal(Position { x: 0, y: 0 }));
}

#[test]
fn layout_loader_round_trips_cells() {
    let maze = Maze::from_layout(
        ". X W\n\
         . I .\n\
         . . G",
    )
    .unwrap();

    assert!(maze.is_obstacle(Position { x: 1, y: 0 }));
    assert!(maze.is_warp_zone(Position { x: 2, y: 0 }));
    assert_eq!(maze.goal(), Position { x: 2, y: 2 });
    assert_eq!(maze.items().len(), 1);
    assert_eq!(maze.cell(Position { x: 1, y: 1 }), Cell::Empty);
}

#[test]
fn layout_loader_rejects_malformed_input() {
    assert!(Maze::from_layout("").is_err());
    assert!(Maze::from_layout(". .\n. . .").is_err());
    assert!(Maze::from_layout("? G").is_err());
    assert!(Maze::from_layout(". .\n. .").is_err());
    assert!(Maze::from_layout("G G").is_err());
}
