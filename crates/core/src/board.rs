//! Board module - tracks the fruit on the grid
//!
//! Fruit are replenished as a batch only once every fruit has been eaten.
//! A batch is a best-effort fill: sampling stops early when the snake and
//! the fruit together would cover the whole grid, so a nearly full board
//! simply gets fewer fruit.

use arrayvec::ArrayVec;

use crate::rng::RandomSource;
use crate::snake::SnakeState;
use crate::types::{Cell, GRID_CELLS};

#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    fruits: ArrayVec<Cell, GRID_CELLS>,
    fruit_count: usize,
}

impl BoardState {
    /// Create an empty board that spawns up to `fruit_count` fruit per batch
    pub fn new(fruit_count: usize) -> Self {
        Self {
            fruits: ArrayVec::new(),
            fruit_count: fruit_count.min(GRID_CELLS),
        }
    }

    /// Spawn a new batch of fruit if none are left.
    ///
    /// Returns the number of fruit placed.
    pub fn ensure_fruit(&mut self, snake: &SnakeState, rng: &mut impl RandomSource) -> usize {
        if !self.fruits.is_empty() {
            return 0;
        }

        while self.fruits.len() < self.fruit_count && self.fruits.len() + snake.len() < GRID_CELLS
        {
            let candidate = rng.sample_cell();
            if !self.fruits.contains(&candidate) && !snake.occupies(candidate) {
                self.fruits.push(candidate);
            }
        }

        self.fruits.len()
    }

    /// Eat the fruit under `head`, if any
    pub fn consume_if_present(&mut self, head: Cell) -> bool {
        match self.fruits.iter().position(|&f| f == head) {
            Some(idx) => {
                self.fruits.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn fruits(&self) -> &[Cell] {
        &self.fruits
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }
}
