//! LedMatrix: the 5x5 brightness buffer behind the terminal display.

use crate::types::{GRID_SIZE, MAX_BRIGHTNESS};

const SIDE: usize = GRID_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedMatrix {
    /// Brightness per LED, indexed `[y][x]`
    leds: [[u8; SIDE]; SIDE],
}

impl LedMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one LED; coordinates off the matrix are ignored, brightness
    /// is capped at `MAX_BRIGHTNESS`.
    pub fn set(&mut self, x: u8, y: u8, brightness: u8) {
        if let Some(led) = self
            .leds
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *led = brightness.min(MAX_BRIGHTNESS);
        }
    }

    pub fn get(&self, x: u8, y: u8) -> u8 {
        self.leds
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.leds = [[0; SIDE]; SIDE];
    }

    pub fn is_blank(&self) -> bool {
        self.leds.iter().flatten().all(|&b| b == 0)
    }

    /// Build a matrix from five column bitmasks (bit `y` lights row `y`)
    pub fn from_columns(columns: &[u8], brightness: u8) -> Self {
        let mut m = Self::new();
        for (x, &col) in columns.iter().take(SIDE).enumerate() {
            for y in 0..SIDE {
                if col & (1 << y) != 0 {
                    m.set(x as u8, y as u8, brightness);
                }
            }
        }
        m
    }
}
