//! Terminal Pixel Snake runner (default binary).
//!
//! Emulates the 5x5 LED board in the terminal: `a` / Left arrow is button A,
//! `b` / Right arrow is button B, `q` quits. Logs go to a file because the
//! terminal is the screen.

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use simplelog::{Config, WriteLogger};

use pixel_snake::cli::Cli;
use pixel_snake::engine::{Game, GameOutcome, ThreadClock};
use pixel_snake::input::TerminalButtons;
use pixel_snake::random::StdRandom;
use pixel_snake::term::{MatrixView, TerminalDisplay};
use pixel_snake::types::GameConfig;

const CONTROLS: &str = "A: a / ←    B: b / →    quit: q";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("creating log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)?;
    info!("Starting pixel-snake");

    let config = cli.game_config()?;

    let mut display = TerminalDisplay::new(MatrixView::default().with_caption(CONTROLS));
    display.enter()?;

    let result = run(&mut display, config, cli.seed);

    // Always try to restore terminal state.
    let _ = display.exit();

    match result {
        Ok(outcome) => {
            println!("Final score: {}", outcome.score);
            Ok(())
        }
        Err(e) => {
            error!("game aborted: {:#}", e);
            Err(e)
        }
    }
}

fn run(
    display: &mut TerminalDisplay,
    config: GameConfig,
    seed: Option<u64>,
) -> Result<GameOutcome> {
    let mut game = Game::new(
        config,
        display,
        TerminalButtons::new(),
        StdRandom::new(seed),
        ThreadClock,
    );
    game.play()
}
