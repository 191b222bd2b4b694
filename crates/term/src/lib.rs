//! Terminal display module.
//!
//! Emulates the 5x5 LED matrix in a terminal. The matrix is rendered into a
//! simple framebuffer of styled characters (two columns per LED to keep the
//! pixels roughly square) and flushed with changed-run diffing.
//!
//! - [`matrix`]: the brightness buffer
//! - [`view`]: matrix to framebuffer layout (pure, testable)
//! - [`font`] / [`scroll`]: 5x5 glyphs and the sliding text window
//! - [`renderer`]: crossterm output
//! - [`display`]: the engine `Display` backed by all of the above

pub mod display;
pub mod fb;
pub mod font;
pub mod matrix;
pub mod renderer;
pub mod scroll;
pub mod view;

pub use pixel_snake_engine as engine;
pub use pixel_snake_types as types;

pub use display::TerminalDisplay;
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use font::{glyph, Glyph5};
pub use matrix::LedMatrix;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
pub use scroll::ScrollStrip;
pub use view::{led_style, MatrixView, Viewport};
