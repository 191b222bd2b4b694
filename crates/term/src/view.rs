//! MatrixView: maps an [`LedMatrix`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::matrix::LedMatrix;
use crate::types::{GRID_SIZE, MAX_BRIGHTNESS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the LED matrix as a bordered block of coloured cells.
pub struct MatrixView {
    /// LED width in terminal columns.
    cell_w: u16,
    /// LED height in terminal rows.
    cell_h: u16,
    /// Line shown under the matrix (controls hint).
    caption: String,
}

impl Default for MatrixView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

const BACKGROUND: Rgb = Rgb::new(20, 10, 10);

impl MatrixView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            caption: String::new(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Outer size of the bordered matrix.
    pub fn frame_size(&self) -> (u16, u16) {
        let side = GRID_SIZE as u16;
        (side * self.cell_w + 2, side * self.cell_h + 2)
    }

    /// Render the matrix into an existing framebuffer, centred in the viewport.
    pub fn render_into(&self, matrix: &LedMatrix, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let caption_h = if self.caption.is_empty() { 0 } else { 2 };
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + caption_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, CellStyle::default());

        for y in 0..GRID_SIZE as u8 {
            for x in 0..GRID_SIZE as u8 {
                let level = matrix.get(x, y);
                let (ch, style) = led_style(level);
                let px = start_x + 1 + x as u16 * self.cell_w;
                let py = start_y + 1 + y as u16 * self.cell_h;
                fb.block(px, py, (self.cell_w, self.cell_h), ch, style);
            }
        }

        if !self.caption.is_empty() {
            let text_w = self.caption.chars().count() as u16;
            let x = viewport.width.saturating_sub(text_w) / 2;
            let dim = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            fb.text(x, start_y + frame_h + 1, &self.caption, dim);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, matrix: &LedMatrix, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(matrix, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.set(x, y, '┌', style);
        fb.set(x + w - 1, y, '┐', style);
        fb.set(x, y + h - 1, '└', style);
        fb.set(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.set(x + dx, y, '─', style);
            fb.set(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, '│', style);
            fb.set(x + w - 1, y + dy, '│', style);
        }
    }
}

/// Character and colour for an LED at `level` (0-9).
///
/// Lit LEDs are solid blocks whose red channel scales with brightness, the
/// way the red micro:bit LEDs look; dark LEDs show a faint dot.
pub fn led_style(level: u8) -> (char, CellStyle) {
    let level = level.min(MAX_BRIGHTNESS) as u16;
    if level == 0 {
        let style = CellStyle {
            fg: Rgb::new(70, 40, 40),
            bg: BACKGROUND,
            bold: false,
            dim: true,
        };
        return ('·', style);
    }
    let red = 60 + (195 * level / MAX_BRIGHTNESS as u16) as u8;
    let style = CellStyle {
        fg: Rgb::new(red, red / 8, red / 8),
        bg: BACKGROUND,
        bold: level == MAX_BRIGHTNESS as u16,
        dim: false,
    };
    ('█', style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brighter_leds_are_redder() {
        let (_, low) = led_style(1);
        let (_, high) = led_style(9);
        assert!(high.fg.r > low.fg.r);
        assert_eq!(high.fg.r, 255);
        assert_eq!(led_style(0).0, '·');
        assert_eq!(led_style(200), led_style(9));
    }

    #[test]
    fn frame_size_accounts_for_border() {
        assert_eq!(MatrixView::default().frame_size(), (12, 7));
        assert_eq!(MatrixView::new(1, 1).frame_size(), (7, 7));
    }
}
