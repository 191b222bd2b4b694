//! TerminalDisplay: the engine's [`Display`] capability on a terminal.
//!
//! Pixel writes land in an [`LedMatrix`]; `flush` renders the matrix and
//! pushes the changed cells to the terminal. Scrolling blocks, drawing one
//! window per column step, the way the device's own scroll does.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::engine::Display;
use crate::fb::FrameBuffer;
use crate::matrix::LedMatrix;
use crate::renderer::TerminalRenderer;
use crate::scroll::ScrollStrip;
use crate::view::{MatrixView, Viewport};

pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: MatrixView,
    matrix: LedMatrix,
    fb: FrameBuffer,
}

impl TerminalDisplay {
    pub fn new(view: MatrixView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            matrix: LedMatrix::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn present(&mut self) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(&self.matrix, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}

impl Display for TerminalDisplay {
    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) -> Result<()> {
        self.matrix.set(x, y, brightness);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.matrix.clear();
        Ok(())
    }

    fn scroll(&mut self, text: &str, speed_ms: u32) -> Result<()> {
        let strip = ScrollStrip::new(text);
        for frame in strip.frames() {
            self.matrix = frame;
            self.present()?;
            thread::sleep(Duration::from_millis(speed_ms as u64));
        }
        self.matrix.clear();
        self.present()
    }

    fn flush(&mut self) -> Result<()> {
        self.present()
    }
}
