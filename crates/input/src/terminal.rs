//! Button source backed by crossterm key events.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::engine::Buttons;
use crate::latch::ButtonLatch;
use crate::map::map_key_event;
use crate::types::Button;

/// Reads the terminal's pending key events into a [`ButtonLatch`].
///
/// `poll` never blocks: it drains what the terminal queued since the last
/// poll (typically keys pressed during the tick sleep) and returns.
#[derive(Debug, Default)]
pub struct TerminalButtons {
    latch: ButtonLatch,
}

impl TerminalButtons {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Buttons for TerminalButtons {
    fn poll(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key_event(key) {
                    self.latch.apply(input);
                }
            }
        }
        Ok(())
    }

    fn was_pressed(&mut self, button: Button) -> bool {
        self.latch.take(button)
    }

    fn quit_requested(&self) -> bool {
        self.latch.quit_requested()
    }
}
