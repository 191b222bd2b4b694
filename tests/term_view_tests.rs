//! Terminal rendering of the LED matrix and scrolling text

use pixel_snake::term::{changed_runs, LedMatrix, MatrixView, ScrollStrip, Viewport};

#[test]
fn test_blank_matrix_layout() {
    let view = MatrixView::default();
    let fb = view.render(&LedMatrix::new(), Viewport::new(12, 7));

    assert_eq!(fb.row_text(0), "┌──────────┐");
    assert_eq!(fb.row_text(1), "│··········│");
    assert_eq!(fb.row_text(6), "└──────────┘");
}

#[test]
fn test_lit_led_spans_two_columns() {
    let mut matrix = LedMatrix::new();
    matrix.set(0, 0, 9);
    matrix.set(4, 4, 2);
    let fb = MatrixView::default().render(&matrix, Viewport::new(12, 7));

    assert_eq!(fb.row_text(1), "│██········│");
    assert_eq!(fb.row_text(5), "│········██│");

    let bright = fb.get(1, 1).unwrap().style;
    let dimmer = fb.get(9, 5).unwrap().style;
    assert!(bright.fg.r > dimmer.fg.r);
    assert!(bright.bold);
}

#[test]
fn test_matrix_is_centred_with_caption() {
    let view = MatrixView::default().with_caption("a/b turn");
    let fb = view.render(&LedMatrix::new(), Viewport::new(20, 13));

    // 7 rows of matrix plus a gap and the caption, centred in 13 rows.
    assert_eq!(fb.get(4, 2).unwrap().ch, '┌');
    assert_eq!(fb.row_text(10).trim(), "a/b turn");
}

#[test]
fn test_single_led_change_redraws_one_run() {
    let view = MatrixView::default();
    let viewport = Viewport::new(12, 7);
    let before = view.render(&LedMatrix::new(), viewport);

    let mut matrix = LedMatrix::new();
    matrix.set(2, 3, 5);
    let after = view.render(&matrix, viewport);

    assert_eq!(changed_runs(&before, &after), vec![(5, 4, 2)]);
}

#[test]
fn test_scroll_enters_and_leaves_blank() {
    let strip = ScrollStrip::new("Game Over!");
    let frames: Vec<LedMatrix> = strip.frames().collect();

    assert_eq!(frames.len(), strip.frame_count());
    assert!(frames.first().unwrap().is_blank());
    assert!(frames.last().unwrap().is_blank());
    assert!(frames.iter().any(|f| !f.is_blank()));
}

#[test]
fn test_longer_text_scrolls_longer() {
    let short = ScrollStrip::new("Score:1");
    let long = ScrollStrip::new("Score:100");
    assert!(long.frame_count() > short.frame_count());
}
