//! Fruit spawning and consumption

use pixel_snake::core::{BoardState, ScriptedRng, SimpleRng, SnakeState};
use pixel_snake::types::{Cell, GRID_CELLS, GRID_SIZE};

fn five_cell_snake() -> SnakeState {
    SnakeState::with_body(
        &[
            Cell::new(2, 2),
            Cell::new(2, 3),
            Cell::new(2, 4),
            Cell::new(3, 4),
            Cell::new(4, 4),
        ],
        true,
    )
}

#[test]
fn test_empty_board_fills_to_fruit_count() {
    let snake = five_cell_snake();
    let mut board = BoardState::new(3);
    board.ensure_fruit(&snake, &mut SimpleRng::new(2024));

    assert_eq!(board.fruits().len(), 3);
    for &fruit in board.fruits() {
        assert!(!snake.occupies(fruit));
    }
}

#[test]
fn test_fruit_never_overlaps_snake_or_each_other() {
    let snake = five_cell_snake();
    for seed in 1..200 {
        let mut board = BoardState::new(5);
        board.ensure_fruit(&snake, &mut SimpleRng::new(seed));
        let fruits = board.fruits();
        assert_eq!(fruits.len(), 5);
        for (i, a) in fruits.iter().enumerate() {
            assert!(a.in_bounds());
            assert!(!snake.occupies(*a), "seed {}: fruit on snake", seed);
            assert!(!fruits[i + 1..].contains(a), "seed {}: duplicate fruit", seed);
        }
    }
}

#[test]
fn test_ensure_fruit_idempotent_while_fruit_remain() {
    let snake = five_cell_snake();
    let mut rng = SimpleRng::new(11);
    let mut board = BoardState::new(3);
    board.ensure_fruit(&snake, &mut rng);
    let first: Vec<Cell> = board.fruits().to_vec();

    for _ in 0..5 {
        board.ensure_fruit(&snake, &mut rng);
        assert_eq!(board.fruits(), first.as_slice());
    }
}

#[test]
fn test_consume_counts_score_only_on_hit() {
    let mut snake = SnakeState::new(Cell::new(0, 0), true);
    let mut rng = ScriptedRng::new(&[Cell::new(1, 1), Cell::new(2, 2), Cell::new(3, 3)]);
    let mut board = BoardState::new(3);
    board.ensure_fruit(&snake, &mut rng);

    for probe in [Cell::new(4, 4), Cell::new(1, 1), Cell::new(1, 1), Cell::new(3, 3)] {
        if board.consume_if_present(probe) {
            snake.add_point();
        }
    }
    assert_eq!(snake.score(), 2);
    assert_eq!(board.fruits(), &[Cell::new(2, 2)]);
}

#[test]
fn test_replenish_only_after_last_fruit() {
    let snake = SnakeState::new(Cell::new(0, 0), true);
    let mut rng = ScriptedRng::new(&[
        Cell::new(1, 0),
        Cell::new(2, 0),
        Cell::new(3, 0),
        Cell::new(4, 0),
    ]);
    let mut board = BoardState::new(2);

    assert_eq!(board.ensure_fruit(&snake, &mut rng), 2);
    assert!(board.consume_if_present(Cell::new(1, 0)));
    assert_eq!(board.ensure_fruit(&snake, &mut rng), 0);
    assert!(board.consume_if_present(Cell::new(2, 0)));

    assert_eq!(board.ensure_fruit(&snake, &mut rng), 2);
    assert_eq!(board.fruits(), &[Cell::new(3, 0), Cell::new(4, 0)]);
}

#[test]
fn test_crowded_board_terminates() {
    // 22 cells in row-major order leave the bottom-right three free.
    let cells: Vec<Cell> = (0..GRID_SIZE)
        .flat_map(|y| (0..GRID_SIZE).map(move |x| Cell::new(x, y)))
        .take(22)
        .collect();
    let snake = SnakeState::with_body(&cells, true);
    let mut board = BoardState::new(10);
    let placed = board.ensure_fruit(&snake, &mut SimpleRng::new(3));

    assert_eq!(placed, GRID_CELLS - 22);
    for &fruit in board.fruits() {
        assert!(!snake.occupies(fruit));
    }
}
