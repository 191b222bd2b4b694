//! RNG module - random cell sampling for fruit placement
//!
//! The game only ever needs one thing from randomness: a uniform coordinate
//! on one axis of the grid. [`RandomSource`] is that capability, so the board
//! can be driven by a real generator in the binary and by the deterministic
//! [`SimpleRng`] in tests and benchmarks.

use crate::types::{Cell, GRID_SIZE};

/// Uniform sampling over one grid axis.
pub trait RandomSource {
    /// Uniform integer in `[0, GRID_SIZE)`
    fn sample_axis(&mut self) -> i8;

    /// Uniform cell, with both axes sampled independently
    fn sample_cell(&mut self) -> Cell {
        let x = self.sample_axis();
        let y = self.sample_axis();
        Cell::new(x, y)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn sample_axis(&mut self) -> i8 {
        (**self).sample_axis()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG have short periods; sample from the top.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn sample_axis(&mut self) -> i8 {
        self.next_range(GRID_SIZE as u32) as i8
    }
}

/// Replays a fixed list of cells, cycling when exhausted.
///
/// Handy for pinning fruit positions in tests.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    axes: Vec<i8>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(cells: &[Cell]) -> Self {
        let axes = cells.iter().flat_map(|c| [c.x, c.y]).collect();
        Self { axes, pos: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn sample_axis(&mut self) -> i8 {
        if self.axes.is_empty() {
            return 0;
        }
        let v = self.axes[self.pos % self.axes.len()];
        self.pos += 1;
        v
    }
}
