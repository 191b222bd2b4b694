//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the game's two buttons and exposes them
//! through the engine's [`Buttons`](crate::engine::Buttons) capability:
//!
//! - `a` / `A` / Left arrow: button A
//! - `b` / `B` / Right arrow: button B
//! - `q` / `Q` / Esc / Ctrl-C: quit

pub mod latch;
pub mod map;
pub mod terminal;

pub use pixel_snake_engine as engine;
pub use pixel_snake_types as types;

pub use latch::ButtonLatch;
pub use map::{map_key_event, should_quit, KeyInput};
pub use terminal::TerminalButtons;
