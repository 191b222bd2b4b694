//! Snake module - body, pending head and score
//!
//! The body is stored head-first in a fixed-capacity array (the grid holds
//! at most 25 cells). The pending head is tracked separately from `body[0]`:
//! it is the authoritative position that headings accumulate into and that
//! wrap/bounds rules apply to. The rendered head is only ever a copy of it,
//! except when a failed no-wrap move restores the head for the death screen.

use arrayvec::ArrayVec;

use crate::types::{Cell, Heading, GRID_CELLS};

/// Outcome of a single [`SnakeState::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    /// Head before the move; a growing snake appends this cell
    pub previous_head: Cell,
    pub new_head: Cell,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnakeState {
    body: ArrayVec<Cell, GRID_CELLS>,
    pending_head: Cell,
    wrap: bool,
    score: u32,
}

impl SnakeState {
    /// Create a one-cell snake. `start` is folded onto the grid.
    pub fn new(start: Cell, wrap: bool) -> Self {
        let head = start.wrapped();
        let mut body = ArrayVec::new();
        body.push(head);
        Self {
            body,
            pending_head: head,
            wrap,
            score: 0,
        }
    }

    /// Create a snake from an explicit head-first body.
    ///
    /// Cells beyond grid capacity are dropped. An empty slice falls back to
    /// the grid origin so the body is never empty.
    pub fn with_body(cells: &[Cell], wrap: bool) -> Self {
        let mut body: ArrayVec<Cell, GRID_CELLS> =
            cells.iter().copied().take(GRID_CELLS).collect();
        if body.is_empty() {
            body.push(Cell::default());
        }
        let pending_head = body[0];
        Self {
            body,
            pending_head,
            wrap,
            score: 0,
        }
    }

    /// Move one step in `heading`.
    ///
    /// The delta is applied to the pending head, which is wrapped when the
    /// snake wraps. Every trailing segment then takes the previous value of
    /// the segment ahead of it, and the head becomes the pending head.
    pub fn advance(&mut self, heading: Heading) -> TransitionResult {
        let previous_head = self.head();

        let mut next = self.pending_head.offset(heading.delta());
        if self.wrap {
            next = next.wrapped();
        }
        self.pending_head = next;

        // Walk from the tail so each segment reads its neighbour before it moves.
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        if let Some(head) = self.body.first_mut() {
            *head = next;
        }

        TransitionResult {
            previous_head,
            new_head: next,
        }
    }

    /// Append a tail segment at `at`. Ignored once the grid is full.
    pub fn grow(&mut self, at: Cell) {
        let _ = self.body.try_push(at);
    }

    pub fn is_self_colliding(&self) -> bool {
        match self.body.split_first() {
            Some((head, rest)) => rest.contains(head),
            None => false,
        }
    }

    pub fn is_out_of_bounds(&self) -> bool {
        !self.head().in_bounds()
    }

    /// Put the rendered head back on `cell` without touching the pending head.
    pub fn restore_head(&mut self, cell: Cell) {
        if let Some(head) = self.body.first_mut() {
            *head = cell;
        }
    }

    /// Drop the last segment. Only the death animation shrinks the snake,
    /// and it may empty the body entirely.
    pub fn truncate_tail(&mut self) -> Option<Cell> {
        self.body.pop()
    }

    pub fn add_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Current head. Falls back to the pending head once the death
    /// animation has emptied the body.
    pub fn head(&self) -> Cell {
        self.body.first().copied().unwrap_or(self.pending_head)
    }

    pub fn pending_head(&self) -> Cell {
        self.pending_head
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wraps(&self) -> bool {
        self.wrap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_SIZE;

    const DIRECTIONS: [Heading; 5] = [
        Heading::Left,
        Heading::Down,
        Heading::Right,
        Heading::Up,
        Heading::Idle,
    ];

    #[test]
    fn test_new_normalizes_start() {
        let snake = SnakeState::new(Cell::new(7, -1), false);
        assert_eq!(snake.body(), &[Cell::new(2, 4)]);
        assert_eq!(snake.pending_head(), Cell::new(2, 4));
        assert_eq!(snake.score(), 0);
    }

    #[test]
    fn test_advance_right_from_center() {
        let mut snake = SnakeState::new(Cell::new(2, 2), true);
        let step = snake.advance(Heading::Right);
        assert_eq!(snake.body(), &[Cell::new(3, 2)]);
        assert_eq!(step.previous_head, Cell::new(2, 2));
        assert_eq!(step.new_head, Cell::new(3, 2));
    }

    #[test]
    fn test_advance_wraps_right_edge() {
        let mut snake = SnakeState::new(Cell::new(4, 2), true);
        snake.advance(Heading::Right);
        assert_eq!(snake.body(), &[Cell::new(0, 2)]);
    }

    #[test]
    fn test_advance_wraps_top_edge() {
        let mut snake = SnakeState::new(Cell::new(1, 0), true);
        snake.advance(Heading::Up);
        assert_eq!(snake.head(), Cell::new(1, 4));
    }

    #[test]
    fn test_advance_without_wrap_leaves_grid() {
        let mut snake = SnakeState::new(Cell::new(4, 2), false);
        snake.advance(Heading::Right);
        assert_eq!(snake.head().x, 5);
        assert!(snake.is_out_of_bounds());
    }

    #[test]
    fn test_idle_does_not_move() {
        let mut snake = SnakeState::new(Cell::new(3, 1), true);
        let step = snake.advance(Heading::Idle);
        assert_eq!(step.previous_head, step.new_head);
        assert_eq!(snake.body(), &[Cell::new(3, 1)]);
    }

    #[test]
    fn test_wrapping_advance_never_leaves_grid() {
        for &start_heading in &DIRECTIONS {
            for x in 0..GRID_SIZE {
                for y in 0..GRID_SIZE {
                    let mut snake = SnakeState::new(Cell::new(x, y), true);
                    for &h in DIRECTIONS.iter().cycle().take(12) {
                        snake.advance(start_heading);
                        snake.advance(h);
                        assert!(snake.head().in_bounds());
                    }
                }
            }
        }
    }

    #[test]
    fn test_body_follows_head() {
        let mut snake = SnakeState::with_body(
            &[Cell::new(2, 2), Cell::new(1, 2), Cell::new(0, 2)],
            true,
        );
        snake.advance(Heading::Down);
        assert_eq!(
            snake.body(),
            &[Cell::new(2, 3), Cell::new(2, 2), Cell::new(1, 2)]
        );
    }

    #[test]
    fn test_advance_preserves_length() {
        let mut snake = SnakeState::with_body(
            &[Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)],
            true,
        );
        for &h in DIRECTIONS.iter().cycle().take(20) {
            snake.advance(h);
            assert_eq!(snake.len(), 4);
        }
    }

    #[test]
    fn test_grow_appends_exactly_one() {
        let mut snake = SnakeState::new(Cell::new(2, 2), true);
        let step = snake.advance(Heading::Left);
        snake.grow(step.previous_head);
        assert_eq!(snake.body(), &[Cell::new(1, 2), Cell::new(2, 2)]);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_grow_stops_at_capacity() {
        let cells: Vec<Cell> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Cell::new(x, y)))
            .collect();
        let mut snake = SnakeState::with_body(&cells, true);
        assert_eq!(snake.len(), GRID_CELLS);
        snake.grow(Cell::new(0, 0));
        assert_eq!(snake.len(), GRID_CELLS);
    }

    #[test]
    fn test_single_cell_never_self_collides() {
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                let snake = SnakeState::new(Cell::new(x, y), true);
                assert!(!snake.is_self_colliding());
            }
        }
    }

    #[test]
    fn test_two_cell_self_collision() {
        // A two-cell snake that stays on its own cell lands on the neck.
        let mut snake = SnakeState::with_body(&[Cell::new(2, 2), Cell::new(2, 3)], true);
        snake.advance(Heading::Idle);
        assert_eq!(snake.body(), &[Cell::new(2, 2), Cell::new(2, 2)]);
        assert!(snake.is_self_colliding());
    }

    #[test]
    fn test_two_cell_reversal_swaps_instead_of_colliding() {
        let mut snake = SnakeState::with_body(&[Cell::new(2, 2), Cell::new(2, 3)], true);
        snake.advance(Heading::Down);
        assert_eq!(snake.head(), Cell::new(2, 3));
        assert!(!snake.is_self_colliding());
    }

    #[test]
    fn test_u_turn_into_body_collides() {
        let mut snake = SnakeState::with_body(
            &[Cell::new(2, 2), Cell::new(2, 3), Cell::new(2, 4)],
            true,
        );
        snake.advance(Heading::Down);
        assert_eq!(snake.head(), Cell::new(2, 3));
        assert!(snake.is_self_colliding());
    }

    #[test]
    fn test_restore_head_keeps_pending_head() {
        let mut snake = SnakeState::new(Cell::new(0, 0), false);
        let step = snake.advance(Heading::Left);
        assert_eq!(snake.head(), Cell::new(-1, 0));

        snake.restore_head(step.previous_head);
        assert_eq!(snake.head(), Cell::new(0, 0));
        assert_eq!(snake.pending_head(), Cell::new(-1, 0));
        assert!(!snake.is_out_of_bounds());
    }

    #[test]
    fn test_truncate_tail_empties_body() {
        let mut snake = SnakeState::with_body(&[Cell::new(1, 1), Cell::new(1, 2)], true);
        assert_eq!(snake.truncate_tail(), Some(Cell::new(1, 2)));
        assert_eq!(snake.truncate_tail(), Some(Cell::new(1, 1)));
        assert!(snake.is_empty());
        assert_eq!(snake.truncate_tail(), None);
        assert!(!snake.is_self_colliding());
    }

    #[test]
    fn test_score_counts_points() {
        let mut snake = SnakeState::new(Cell::new(0, 0), true);
        snake.add_point();
        snake.add_point();
        assert_eq!(snake.score(), 2);
    }
}
