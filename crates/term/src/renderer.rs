//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one; only runs of changed cells
//! are rewritten. A size change falls back to a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw `fb`, diffing against the previously drawn frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Tracks the active style so attributes are only emitted on change.
struct StyledOut<'a> {
    out: &'a mut Vec<u8>,
    current: Option<CellStyle>,
}

impl<'a> StyledOut<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, current: None }
    }

    fn print(&mut self, ch: char, style: CellStyle) -> Result<()> {
        if self.current != Some(style) {
            self.out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
            self.out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.current = Some(style);
        }
        self.out.queue(Print(ch))?;
        Ok(())
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut w = StyledOut::new(out);
    for y in 0..fb.height() {
        w.move_to(0, y)?;
        for x in 0..fb.width() {
            let g = fb.get(x, y).unwrap_or_default();
            w.print(g.ch, g.style)?;
        }
    }
    w.finish()
}

/// Encode only the changed runs between `prev` and `next` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut w = StyledOut::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        w.move_to(x, y)?;
        for dx in 0..len {
            let g = next.get(x + dx, y).unwrap_or_default();
            w.print(g.ch, g.style)?;
        }
    }
    w.finish()
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of cells that differ between two frames.
///
/// Frames of different sizes are treated as entirely changed.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let w = next.width();
    let h = next.height();
    if prev.width() != w || prev.height() != h {
        return (0..h).map(|y| (0, y, w)).collect();
    }

    let mut runs = Vec::new();
    for y in 0..h {
        let mut start: Option<u16> = None;
        for x in 0..w {
            let differs = prev.get(x, y) != next.get(x, y);
            match (differs, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, w - s));
        }
    }
    runs
}
