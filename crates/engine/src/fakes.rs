//! In-memory backends for tests and benchmarks.

use std::collections::VecDeque;

use anyhow::Result;

use crate::env::{Buttons, Clock, Display};
use crate::types::{Button, GRID_SIZE, MAX_BRIGHTNESS};

/// Brightness of every pixel, indexed `[y][x]`.
pub type Pixels = [[u8; GRID_SIZE as usize]; GRID_SIZE as usize];

/// Display that records every flushed frame and scrolled string.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pixels: Pixels,
    frames: Vec<Pixels>,
    scrolls: Vec<(String, u32)>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Pixels] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Pixels> {
        self.frames.last()
    }

    pub fn scrolls(&self) -> &[(String, u32)] {
        &self.scrolls
    }

    /// Number of lit pixels in a frame
    pub fn lit(frame: &Pixels) -> usize {
        frame.iter().flatten().filter(|&&b| b > 0).count()
    }
}

impl Display for RecordingDisplay {
    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) -> Result<()> {
        if let Some(p) = self
            .pixels
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *p = brightness.min(MAX_BRIGHTNESS);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.pixels = Pixels::default();
        Ok(())
    }

    fn scroll(&mut self, text: &str, speed_ms: u32) -> Result<()> {
        self.scrolls.push((text.to_string(), speed_ms));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.frames.push(self.pixels);
        Ok(())
    }
}

/// Display that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl Display for NullDisplay {
    fn set_pixel(&mut self, _x: u8, _y: u8, _brightness: u8) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn scroll(&mut self, _text: &str, _speed_ms: u32) -> Result<()> {
        Ok(())
    }
}

/// What the player does during one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Nothing,
    A,
    B,
    Both,
    Quit,
}

/// Replays one [`Press`] per poll.
///
/// Once the script runs out the buttons either request quit (the default)
/// or stay silent forever.
#[derive(Debug, Clone)]
pub struct ScriptedButtons {
    script: VecDeque<Press>,
    quit_when_done: bool,
    a: bool,
    b: bool,
    quit: bool,
}

impl ScriptedButtons {
    pub fn new(script: impl IntoIterator<Item = Press>) -> Self {
        Self {
            script: script.into_iter().collect(),
            quit_when_done: true,
            a: false,
            b: false,
            quit: false,
        }
    }

    /// Keep polling silently after the script ends
    pub fn idle_when_done(mut self) -> Self {
        self.quit_when_done = false;
        self
    }
}

impl Buttons for ScriptedButtons {
    fn poll(&mut self) -> Result<()> {
        let press = match self.script.pop_front() {
            Some(p) => p,
            None if self.quit_when_done => Press::Quit,
            None => Press::Nothing,
        };
        // Unconsumed presses stay latched, like a real edge detector.
        match press {
            Press::Nothing => {}
            Press::A => self.a = true,
            Press::B => self.b = true,
            Press::Both => {
                self.a = true;
                self.b = true;
            }
            Press::Quit => self.quit = true,
        }
        Ok(())
    }

    fn was_pressed(&mut self, button: Button) -> bool {
        let flag = match button {
            Button::A => &mut self.a,
            Button::B => &mut self.b,
        };
        std::mem::take(flag)
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// Clock that records requested delays instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct RecordingClock {
    sleeps: Vec<u32>,
}

impl RecordingClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> &[u32] {
        &self.sleeps
    }
}

impl Clock for RecordingClock {
    fn sleep_ms(&mut self, ms: u32) {
        self.sleeps.push(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_presses_are_one_shot() {
        let mut buttons = ScriptedButtons::new([Press::Both, Press::Nothing]);
        buttons.poll().unwrap();
        assert!(buttons.was_pressed(Button::A));
        assert!(!buttons.was_pressed(Button::A));
        assert!(buttons.was_pressed(Button::B));

        buttons.poll().unwrap();
        assert!(!buttons.was_pressed(Button::A));
        assert!(!buttons.quit_requested());

        buttons.poll().unwrap();
        assert!(buttons.quit_requested());
    }

    #[test]
    fn idle_buttons_never_quit() {
        let mut buttons = ScriptedButtons::new([]).idle_when_done();
        for _ in 0..10 {
            buttons.poll().unwrap();
            assert!(!buttons.quit_requested());
        }
    }

    #[test]
    fn recording_display_snapshots_on_flush() {
        let mut display = RecordingDisplay::new();
        display.set_pixel(1, 2, 9).unwrap();
        display.set_pixel(7, 7, 9).unwrap();
        display.flush().unwrap();
        display.clear().unwrap();
        display.flush().unwrap();

        assert_eq!(display.frames().len(), 2);
        assert_eq!(display.frames()[0][2][1], 9);
        assert_eq!(RecordingDisplay::lit(&display.frames()[0]), 1);
        assert_eq!(RecordingDisplay::lit(&display.frames()[1]), 0);
    }
}
