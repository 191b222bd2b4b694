//! Pixel Snake (workspace facade crate).
//!
//! Re-exports the member crates under `pixel_snake::{types,core,engine,input,term}`
//! and adds the pieces only the binary needs: command-line configuration and
//! an OS-seeded random source.

pub mod cli;
pub mod random;

pub use pixel_snake_core as core;
pub use pixel_snake_engine as engine;
pub use pixel_snake_input as input;
pub use pixel_snake_term as term;
pub use pixel_snake_types as types;
