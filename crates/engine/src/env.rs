//! Capabilities the game loop consumes from its environment.
//!
//! The loop never talks to a terminal or a device directly. A backend
//! provides a [`Display`], a set of [`Buttons`] and a [`Clock`]; randomness
//! comes through [`crate::core::RandomSource`].

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::types::Button;

/// A 5x5 pixel sink with brightness levels on the 0-9 scale.
pub trait Display {
    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    /// Scroll `text` across the matrix, blocking until it has passed.
    /// `speed_ms` is the delay per column step.
    fn scroll(&mut self, text: &str, speed_ms: u32) -> Result<()>;

    /// Make the pixels set since the last flush visible.
    ///
    /// Backends that light pixels immediately can keep the default.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Display + ?Sized> Display for &mut T {
    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) -> Result<()> {
        (**self).set_pixel(x, y, brightness)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn scroll(&mut self, text: &str, speed_ms: u32) -> Result<()> {
        (**self).scroll(text, speed_ms)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// Two edge-triggered buttons plus a quit request.
///
/// `poll` samples the hardware once per tick. Each press seen by a poll is
/// reported by at most one `was_pressed` call; several presses between two
/// polls collapse into one.
pub trait Buttons {
    fn poll(&mut self) -> Result<()>;

    /// Consume the pending press of `button`, if any
    fn was_pressed(&mut self, button: Button) -> bool;

    fn quit_requested(&self) -> bool {
        false
    }
}

/// Blocking delay between ticks.
pub trait Clock {
    fn sleep_ms(&mut self, ms: u32);
}

/// Wall-clock delay on the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep_ms(&mut self, ms: u32) {
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms as u64));
        }
    }
}
