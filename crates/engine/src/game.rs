//! Game loop - ties the snake and board to the display, buttons and clock
//!
//! One tick runs a fixed sequence: sample the buttons, advance the snake,
//! check for death, draw the board, eat fruit, then sleep. Death is an
//! ordinary outcome of a tick, not an error; errors only come from the
//! backends.

use anyhow::Result;
use log::{debug, info};

use crate::core::{BoardState, RandomSource, SnakeState};
use crate::env::{Buttons, Clock, Display};
use crate::types::{
    Button, Cell, DeathCause, GameConfig, Heading, DEATH_FRAME_MS, DEATH_PAUSE_MS,
    GAME_OVER_SCROLL_MS, SCORE_SCROLL_MS,
};

/// Result of a single [`Game::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    GameOver(DeathCause),
    Quit,
}

/// Summary of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub score: u32,
    /// `None` when the player quit
    pub cause: Option<DeathCause>,
    pub ticks: u64,
}

pub struct Game<D, B, R, C> {
    config: GameConfig,
    snake: SnakeState,
    board: BoardState,
    heading: Heading,
    /// Head position before the latest move
    last_head: Cell,
    ticks: u64,
    display: D,
    buttons: B,
    rng: R,
    clock: C,
}

impl<D, B, R, C> Game<D, B, R, C>
where
    D: Display,
    B: Buttons,
    R: RandomSource,
    C: Clock,
{
    pub fn new(config: GameConfig, display: D, buttons: B, rng: R, clock: C) -> Self {
        let config = config.normalized();
        let snake = SnakeState::new(config.start, config.wrap);
        let board = BoardState::new(config.fruit_count);
        Self {
            last_head: snake.head(),
            snake,
            board,
            heading: Heading::Idle,
            ticks: 0,
            config,
            display,
            buttons,
            rng,
            clock,
        }
    }

    /// Replace the starting snake, e.g. to set up a scenario.
    pub fn with_snake(mut self, snake: SnakeState) -> Self {
        self.last_head = snake.head();
        self.snake = snake;
        self
    }

    pub fn with_heading(mut self, heading: Heading) -> Self {
        self.heading = heading;
        self
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run one tick of the game.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        self.buttons.poll()?;
        if self.buttons.quit_requested() {
            return Ok(TickOutcome::Quit);
        }
        if self.buttons.was_pressed(Button::A) {
            self.heading = self.heading.turn_a();
        }
        if self.buttons.was_pressed(Button::B) {
            self.heading = self.heading.turn_b();
        }

        let step = self.snake.advance(self.heading);
        self.last_head = step.previous_head;
        self.ticks += 1;

        if self.snake.len() > 1 && self.snake.is_self_colliding() {
            return Ok(TickOutcome::GameOver(DeathCause::SelfCollision));
        }
        if !self.snake.wraps() && self.snake.is_out_of_bounds() {
            self.snake.restore_head(step.previous_head);
            return Ok(TickOutcome::GameOver(DeathCause::OutOfBounds));
        }

        self.draw_board()?;

        if self.board.consume_if_present(self.snake.head()) {
            self.snake.add_point();
            self.snake.grow(step.previous_head);
            debug!(
                "ate fruit at ({}, {}), score {}",
                step.new_head.x,
                step.new_head.y,
                self.snake.score()
            );
        }

        self.clock.sleep_ms(self.config.tick_ms);
        Ok(TickOutcome::Continue)
    }

    /// Tick until the snake dies or the player quits.
    pub fn run(&mut self) -> Result<GameOutcome> {
        info!(
            "session start: wrap={} start=({}, {}) fruit_count={} tick_ms={}",
            self.config.wrap,
            self.config.start.x,
            self.config.start.y,
            self.config.fruit_count,
            self.config.tick_ms
        );

        loop {
            match self.tick()? {
                TickOutcome::Continue => {}
                TickOutcome::GameOver(cause) => {
                    info!(
                        "game over ({}) after {} ticks, score {}",
                        cause.as_str(),
                        self.ticks,
                        self.score()
                    );
                    return Ok(self.outcome(Some(cause)));
                }
                TickOutcome::Quit => {
                    info!("quit after {} ticks, score {}", self.ticks, self.score());
                    return Ok(self.outcome(None));
                }
            }
        }
    }

    /// Play a whole session: the game, then on death the death animation
    /// and the score banner until the player quits.
    pub fn play(&mut self) -> Result<GameOutcome> {
        let outcome = self.run()?;
        if outcome.cause.is_some() {
            self.play_death_animation()?;
            self.show_score()?;
        }
        Ok(outcome)
    }

    /// Collapse the snake from tail to head, then show "Game Over!".
    ///
    /// The head is first put back where it was before the fatal move.
    pub fn play_death_animation(&mut self) -> Result<()> {
        self.clock.sleep_ms(DEATH_PAUSE_MS);
        self.snake.restore_head(self.last_head);

        while self.snake.truncate_tail().is_some() {
            self.display.clear()?;
            self.draw_snake()?;
            self.display.flush()?;
            self.clock.sleep_ms(DEATH_FRAME_MS);
        }

        self.display.clear()?;
        plot(&mut self.display, self.last_head, self.config.brightness.head)?;
        self.display.flush()?;
        self.clock.sleep_ms(DEATH_PAUSE_MS);

        self.display.scroll("Game Over!", GAME_OVER_SCROLL_MS)
    }

    /// Scroll the final score until the player quits.
    pub fn show_score(&mut self) -> Result<()> {
        let banner = format!("Score:{}", self.score());
        loop {
            self.buttons.poll()?;
            if self.buttons.quit_requested() {
                return Ok(());
            }
            self.display.scroll(&banner, SCORE_SCROLL_MS)?;
        }
    }

    fn outcome(&self, cause: Option<DeathCause>) -> GameOutcome {
        GameOutcome {
            score: self.score(),
            cause,
            ticks: self.ticks,
        }
    }

    fn draw_board(&mut self) -> Result<()> {
        self.display.clear()?;

        let spawned = self.board.ensure_fruit(&self.snake, &mut self.rng);
        if spawned > 0 {
            debug!("spawned {} fruit: {:?}", spawned, self.board.fruits());
        }

        let fruit = self.config.brightness.fruit;
        for &cell in self.board.fruits() {
            plot(&mut self.display, cell, fruit)?;
        }

        // Drawn after the fruit so the head covers a fruit it sits on.
        self.draw_snake()?;
        self.display.flush()
    }

    fn draw_snake(&mut self) -> Result<()> {
        let brightness = self.config.brightness;
        let Some((&head, rest)) = self.snake.body().split_first() else {
            return Ok(());
        };
        for &cell in rest {
            plot(&mut self.display, cell, brightness.body)?;
        }
        plot(&mut self.display, head, brightness.head)
    }
}

/// Light `cell`, skipping cells that lie off the grid
fn plot(display: &mut impl Display, cell: Cell, brightness: u8) -> Result<()> {
    if !cell.in_bounds() {
        return Ok(());
    }
    display.set_pixel(cell.x as u8, cell.y as u8, brightness)
}
