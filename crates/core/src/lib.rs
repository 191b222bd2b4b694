//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules: movement, growth, collision and
//! fruit placement. It has **zero dependencies** on the display, buttons or
//! timing, making it:
//!
//! - **Deterministic**: Same seed produces identical fruit placement
//! - **Testable**: Every rule is a plain method on a plain struct
//! - **Allocation-free**: Body and fruit live in fixed 25-cell arrays
//!
//! # Module Structure
//!
//! - [`snake`]: body, pending head, score and the movement transition
//! - [`board`]: the fruit set with batch spawning and consumption
//! - [`rng`]: the [`RandomSource`] capability and a seeded LCG
//!
//! # Example
//!
//! ```
//! use pixel_snake_core::{BoardState, SimpleRng, SnakeState};
//! use pixel_snake_types::{Cell, Heading};
//!
//! let mut snake = SnakeState::new(Cell::new(2, 2), true);
//! let mut board = BoardState::new(3);
//! let mut rng = SimpleRng::new(12345);
//!
//! let step = snake.advance(Heading::Right);
//! assert_eq!(snake.head(), Cell::new(3, 2));
//!
//! board.ensure_fruit(&snake, &mut rng);
//! if board.consume_if_present(snake.head()) {
//!     snake.add_point();
//!     snake.grow(step.previous_head);
//! }
//! assert!(!snake.is_self_colliding());
//! ```

pub mod board;
pub mod rng;
pub mod snake;

pub use pixel_snake_types as types;

pub use board::BoardState;
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use snake::{SnakeState, TransitionResult};
