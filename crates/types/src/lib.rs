//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data, usable from the game logic, the engine loop
//! and the terminal backends alike.
//!
//! # Grid
//!
//! The playfield is the fixed 5x5 LED matrix:
//!
//! - **Width**: 5 columns (indexed 0-4)
//! - **Height**: 5 rows (indexed 0-4)
//! - **Capacity**: 25 cells, which bounds both the snake and the fruit set
//!
//! Coordinates are `(x, y)` with `x` growing to the right and `y` growing
//! downwards, matching the display's pixel addressing.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 500 | Delay between snake movements |
//! | `DEATH_PAUSE_MS` | 1000 | Pause before and after the death animation |
//! | `DEATH_FRAME_MS` | 70 | Delay between death animation frames |
//! | `GAME_OVER_SCROLL_MS` | 100 | Scroll speed of the "Game Over!" banner |
//! | `SCORE_SCROLL_MS` | 125 | Scroll speed of the score banner |
//!
//! # Examples
//!
//! ```
//! use pixel_snake_types::{Cell, Heading, GRID_SIZE};
//!
//! let cell = Cell::new(7, -1).wrapped();
//! assert_eq!(cell, Cell::new(2, 4));
//!
//! // Button A turns the idle snake to the right.
//! assert_eq!(Heading::Idle.turn_a(), Heading::Right);
//!
//! assert_eq!(GRID_SIZE, 5);
//! ```

use serde::{Deserialize, Serialize};

/// Width and height of the square grid
pub const GRID_SIZE: i8 = 5;

/// Number of addressable cells
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Highest brightness level the display understands
pub const MAX_BRIGHTNESS: u8 = 9;

/// Default delay between ticks
pub const DEFAULT_TICK_MS: u32 = 500;

/// Default number of fruit spawned per batch
pub const DEFAULT_FRUIT_COUNT: usize = 3;

/// Pause before and after the death animation
pub const DEATH_PAUSE_MS: u32 = 1000;

/// Delay between death animation frames
pub const DEATH_FRAME_MS: u32 = 70;

/// Column delay of the "Game Over!" banner
pub const GAME_OVER_SCROLL_MS: u32 = 100;

/// Column delay of the score banner
pub const SCORE_SCROLL_MS: u32 = 125;

/// A cell on the grid.
///
/// Signed so a head that walked off a non-wrapping grid (x = 5, y = -1)
/// can still be represented and tested against the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Cell displaced by `(dx, dy)`, without wrapping
    pub fn offset(self, (dx, dy): (i8, i8)) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Reduce both coordinates into `[0, GRID_SIZE)` (toroidal topology)
    pub fn wrapped(self) -> Self {
        Self {
            x: self.x.rem_euclid(GRID_SIZE),
            y: self.y.rem_euclid(GRID_SIZE),
        }
    }

    /// Whether the cell lies on the grid
    pub fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

/// Direction the head advances on the next tick.
///
/// The ordinal order (Left, Down, Right, Up) matters: button A steps the
/// heading one ordinal up, button B one ordinal down, both modulo 4.
///
/// `Idle` is the state before the first button press; the snake stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heading {
    Left,
    Down,
    Right,
    Up,
    #[default]
    Idle,
}

impl Heading {
    /// Unit delta applied to the head per tick
    pub fn delta(self) -> (i8, i8) {
        match self {
            Heading::Left => (-1, 0),
            Heading::Down => (0, 1),
            Heading::Right => (1, 0),
            Heading::Up => (0, -1),
            Heading::Idle => (0, 0),
        }
    }

    fn from_ordinal(n: u8) -> Self {
        match n % 4 {
            0 => Heading::Left,
            1 => Heading::Down,
            2 => Heading::Right,
            _ => Heading::Up,
        }
    }

    /// Heading after a press of button A
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_snake_types::Heading;
    ///
    /// assert_eq!(Heading::Left.turn_a(), Heading::Down);
    /// assert_eq!(Heading::Up.turn_a(), Heading::Left);
    /// assert_eq!(Heading::Idle.turn_a(), Heading::Right);
    /// ```
    pub fn turn_a(self) -> Self {
        match self {
            // The idle marker sits one past Up in the button arithmetic,
            // so it resolves to Right here and Left for button B.
            Heading::Idle => Heading::Right,
            h => Self::from_ordinal(h as u8 + 1),
        }
    }

    /// Heading after a press of button B
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_snake_types::Heading;
    ///
    /// assert_eq!(Heading::Down.turn_b(), Heading::Left);
    /// assert_eq!(Heading::Left.turn_b(), Heading::Up);
    /// assert_eq!(Heading::Idle.turn_b(), Heading::Left);
    /// ```
    pub fn turn_b(self) -> Self {
        match self {
            Heading::Idle => Heading::Left,
            h => Self::from_ordinal(h as u8 + 3),
        }
    }

}

/// The two physical input buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Head ran into the body
    SelfCollision,
    /// Head left the grid with wrap disabled
    OutOfBounds,
}

impl DeathCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeathCause::SelfCollision => "self_collision",
            DeathCause::OutOfBounds => "out_of_bounds",
        }
    }
}

/// Per-element brightness levels on the 0-9 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brightness {
    pub head: u8,
    pub body: u8,
    pub fruit: u8,
}

impl Default for Brightness {
    fn default() -> Self {
        Self {
            head: 9,
            body: 5,
            fruit: 2,
        }
    }
}

/// Session configuration, fixed once the game starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Leaving an edge re-enters on the opposite one
    pub wrap: bool,
    /// Starting head location, normalized onto the grid
    pub start: Cell,
    /// Fruit spawned per batch
    pub fruit_count: usize,
    pub brightness: Brightness,
    /// Delay between ticks in milliseconds
    pub tick_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            start: Cell::new(2, 2),
            fruit_count: DEFAULT_FRUIT_COUNT,
            brightness: Brightness::default(),
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl GameConfig {
    /// Clamp every field into the range the game can honour.
    ///
    /// The start cell folds onto the grid, fruit count stays within
    /// `1..GRID_CELLS` and brightness levels are capped at `MAX_BRIGHTNESS`.
    pub fn normalized(mut self) -> Self {
        self.start = self.start.wrapped();
        self.fruit_count = self.fruit_count.clamp(1, GRID_CELLS - 1);
        self.brightness.head = self.brightness.head.min(MAX_BRIGHTNESS);
        self.brightness.body = self.brightness.body.min(MAX_BRIGHTNESS);
        self.brightness.fruit = self.brightness.fruit.min(MAX_BRIGHTNESS);
        self
    }
}
