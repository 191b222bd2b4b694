//! 5x5 pixel font for scrolling text across the matrix.
//!
//! Each glyph is five rows of five bits, most significant bit leftmost.
//! Blank edge columns are trimmed when laid out, so narrow punctuation
//! takes less room than letters.

/// Width in columns of a fully blank glyph (space)
const SPACE_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph5 {
    rows: [u8; 5],
}

impl Glyph5 {
    const fn new(rows: [u8; 5]) -> Self {
        Self { rows }
    }

    /// Whether the pixel at `(x, y)` is lit
    pub fn lit(&self, x: usize, y: usize) -> bool {
        x < 5 && y < 5 && self.rows[y] & (0b10000 >> x) != 0
    }

    /// Column bitmasks (bit `y` = row `y`), blank edge columns trimmed
    pub fn columns(&self) -> Vec<u8> {
        let all: Vec<u8> = (0..5)
            .map(|x| {
                (0..5)
                    .filter(|&y| self.lit(x, y))
                    .fold(0u8, |mask, y| mask | (1 << y))
            })
            .collect();

        match (
            all.iter().position(|&c| c != 0),
            all.iter().rposition(|&c| c != 0),
        ) {
            (Some(first), Some(last)) => all[first..=last].to_vec(),
            _ => vec![0; SPACE_WIDTH],
        }
    }
}

/// Look up the glyph for `ch`. Lowercase folds to uppercase; characters
/// without a glyph render as `?`.
pub fn glyph(ch: char) -> Glyph5 {
    lookup(ch.to_ascii_uppercase()).unwrap_or(QUESTION)
}

const QUESTION: Glyph5 = Glyph5::new([0b01110, 0b10001, 0b00110, 0b00000, 0b00100]);

fn lookup(ch: char) -> Option<Glyph5> {
    let rows = match ch {
        'A' => [0b01110, 0b10001, 0b11111, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b11110],
        'C' => [0b01111, 0b10000, 0b10000, 0b10000, 0b01111],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000],
        'G' => [0b01111, 0b10000, 0b10011, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b11110, 0b10100, 0b10010],
        'S' => [0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'Y' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        '0' => [0b01110, 0b10011, 0b10101, 0b11001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b01110],
        '2' => [0b11110, 0b00001, 0b01110, 0b10000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00110, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b11111, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b11110],
        '6' => [0b00010, 0b00100, 0b01110, 0b10001, 0b01110],
        '7' => [0b11111, 0b00010, 0b00100, 0b01000, 0b10000],
        '8' => [0b01110, 0b10001, 0b01110, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b01110, 0b00100, 0b01000],
        ' ' => [0; 5],
        '!' => [0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00100],
        '-' => [0b00000, 0b00000, 0b01110, 0b00000, 0b00000],
        '?' => return Some(QUESTION),
        _ => return None,
    };
    Some(Glyph5::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_banner_text() {
        for ch in "Game Over! Score:0123456789".chars() {
            assert!(
                lookup(ch.to_ascii_uppercase()).is_some(),
                "missing glyph for {:?}",
                ch
            );
        }
    }

    #[test]
    fn lowercase_folds_to_uppercase() {
        assert_eq!(glyph('g'), glyph('G'));
    }

    #[test]
    fn unknown_renders_as_question_mark() {
        assert!(lookup('@').is_none());
        assert_eq!(glyph('@'), glyph('?'));
    }

    #[test]
    fn columns_trim_blank_edges() {
        // '!' only uses the middle column.
        assert_eq!(glyph('!').columns(), vec![0b10111]);
        assert_eq!(glyph('A').columns().len(), 5);
        assert_eq!(glyph('1').columns().len(), 3);
        assert_eq!(glyph(' ').columns(), vec![0; SPACE_WIDTH]);
    }

    #[test]
    fn lit_reads_rows_left_to_right() {
        let l = glyph('L');
        assert!(l.lit(0, 0));
        assert!(!l.lit(4, 0));
        assert!(l.lit(4, 4));
        assert!(!l.lit(5, 4));
    }
}
