//! Styled character grid that the matrix view draws into and the renderer
//! diffs and flushes.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Light grey on black, no attributes
    pub const PLAIN: CellStyle = CellStyle {
        fg: Rgb::new(220, 220, 220),
        bg: Rgb::new(0, 0, 0),
        bold: false,
        dim: false,
    };
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// One terminal cell: a character and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: CellStyle,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph::new(' ', CellStyle::PLAIN);

    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of glyphs. Writes outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.reset(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Take on a new size and blank every cell, reusing the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, Glyph::BLANK);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x < self.width && y < self.height {
            self.cells
                .get(y as usize * self.width as usize + x as usize)
                .copied()
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = Glyph::new(ch, style);
        }
    }

    /// Write `text` left to right from `(x, y)`, clipped at the right edge.
    pub fn text(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (cx, ch) in (x..self.width).zip(text.chars()) {
            self.set(cx, y, ch, style);
        }
    }

    /// Fill a `w` by `h` block with `ch`; one LED of the matrix view.
    pub fn block(&mut self, x: u16, y: u16, (w, h): (u16, u16), ch: char, style: CellStyle) {
        for cy in y..y.saturating_add(h) {
            for cx in x..x.saturating_add(w) {
                self.set(cx, cy, ch, style);
            }
        }
    }

    /// Row `y` as a string, for tests and debugging
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}
