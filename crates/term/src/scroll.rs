//! Text scrolling: lays text out as a strip of columns and slides a
//! 5-column window across it, one column per frame.
//!
//! The strip starts and ends with a blank screen's width of padding so the
//! text enters from the right edge and leaves past the left edge.

use crate::font::glyph;
use crate::matrix::LedMatrix;
use crate::types::{GRID_SIZE, MAX_BRIGHTNESS};

const WINDOW: usize = GRID_SIZE as usize;

/// Column gap between glyphs
const GAP: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollStrip {
    columns: Vec<u8>,
}

impl ScrollStrip {
    pub fn new(text: &str) -> Self {
        let mut columns = vec![0u8; WINDOW];
        for (i, ch) in text.chars().enumerate() {
            if i > 0 {
                columns.extend(std::iter::repeat(0).take(GAP));
            }
            columns.extend(glyph(ch).columns());
        }
        columns.extend(std::iter::repeat(0).take(WINDOW));
        Self { columns }
    }

    /// Padded strip, as column bitmasks
    pub fn columns(&self) -> &[u8] {
        &self.columns
    }

    pub fn frame_count(&self) -> usize {
        self.columns.len() + 1 - WINDOW
    }

    /// Matrix contents when the window starts at column `offset`
    pub fn frame(&self, offset: usize) -> LedMatrix {
        let end = (offset + WINDOW).min(self.columns.len());
        let start = offset.min(end);
        LedMatrix::from_columns(&self.columns[start..end], MAX_BRIGHTNESS)
    }

    pub fn frames(&self) -> impl Iterator<Item = LedMatrix> + '_ {
        (0..self.frame_count()).map(move |offset| self.frame(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_just_padding() {
        let strip = ScrollStrip::new("");
        assert_eq!(strip.columns().len(), 2 * WINDOW);
        assert!(strip.frames().all(|f| f.is_blank()));
    }

    #[test]
    fn first_and_last_frames_are_blank() {
        let strip = ScrollStrip::new("Hi");
        let frames: Vec<LedMatrix> = strip.frames().collect();
        assert_eq!(frames.len(), strip.frame_count());
        assert!(frames.first().unwrap().is_blank());
        assert!(frames.last().unwrap().is_blank());
        assert!(frames.iter().any(|f| !f.is_blank()));
    }

    #[test]
    fn text_enters_from_the_right() {
        // 'H' has a full-height left column.
        let strip = ScrollStrip::new("H");
        let second = strip.frame(1);
        for y in 0..5 {
            assert_eq!(second.get(4, y), MAX_BRIGHTNESS);
            assert_eq!(second.get(3, y), 0);
        }
    }

    #[test]
    fn glyphs_are_separated_by_a_gap() {
        // '!' is one column wide: pad, '!', gap, '!', pad.
        let strip = ScrollStrip::new("!!");
        assert_eq!(strip.columns().len(), WINDOW + 3 + WINDOW);
        assert_eq!(strip.columns()[WINDOW + 1], 0);
    }

    #[test]
    fn text_is_drawn_at_full_brightness() {
        let frame = ScrollStrip::new("I").frame(WINDOW);
        assert_eq!(frame.get(0, 0), MAX_BRIGHTNESS);
    }
}
