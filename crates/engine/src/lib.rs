//! Game engine module - the fixed-interval game loop
//!
//! The engine owns one [`SnakeState`](crate::core::SnakeState) and one
//! [`BoardState`](crate::core::BoardState) per session and drives them from
//! the capabilities in [`env`]: a pixel display, two buttons and a clock.
//! Real backends live in the input and term crates; [`fakes`] provides
//! in-memory ones for tests and benchmarks.
//!
//! # Example
//!
//! ```
//! use pixel_snake_engine::fakes::{Press, RecordingClock, RecordingDisplay, ScriptedButtons};
//! use pixel_snake_engine::{Game, TickOutcome};
//! use pixel_snake_core::SimpleRng;
//! use pixel_snake_types::{Cell, GameConfig};
//!
//! let mut game = Game::new(
//!     GameConfig::default(),
//!     RecordingDisplay::new(),
//!     ScriptedButtons::new([Press::A]),
//!     SimpleRng::new(1),
//!     RecordingClock::new(),
//! );
//!
//! assert_eq!(game.tick().unwrap(), TickOutcome::Continue);
//! assert_eq!(game.snake().head(), Cell::new(3, 2));
//! assert_eq!(game.tick().unwrap(), TickOutcome::Quit);
//! ```

pub mod env;
pub mod fakes;
pub mod game;

pub use pixel_snake_core as core;
pub use pixel_snake_types as types;

pub use env::{Buttons, Clock, Display, ThreadClock};
pub use game::{Game, GameOutcome, TickOutcome};
