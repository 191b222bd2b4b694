//! Edge-triggered button flags.
//!
//! A press sets a flag; reading the flag clears it. Any number of presses
//! between two reads is reported once.

use crate::map::KeyInput;
use crate::types::Button;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonLatch {
    a: bool,
    b: bool,
    quit: bool,
}

impl ButtonLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        match button {
            Button::A => self.a = true,
            Button::B => self.b = true,
        }
    }

    pub fn apply(&mut self, input: KeyInput) {
        match input {
            KeyInput::Press(button) => self.press(button),
            KeyInput::Quit => self.quit = true,
        }
    }

    /// Consume the pending press of `button`
    pub fn take(&mut self, button: Button) -> bool {
        match button {
            Button::A => std::mem::take(&mut self.a),
            Button::B => std::mem::take(&mut self.b),
        }
    }

    /// Quit stays latched once requested
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
