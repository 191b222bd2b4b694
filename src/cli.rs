//! Command-line arguments and session configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional JSON file (`--config`), then individual flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use crate::types::{Cell, GameConfig};

#[derive(Debug, Parser)]
#[command(name = "pixel-snake")]
#[command(version, about = "Snake on a 5x5 LED matrix, steered with two buttons")]
pub struct Cli {
    /// JSON file with game settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Die at the edges instead of wrapping around
    #[arg(long)]
    pub no_wrap: bool,

    /// Starting cell as X,Y (folded onto the grid)
    #[arg(long, value_parser = parse_cell)]
    pub start: Option<Cell>,

    /// Fruit spawned per batch
    #[arg(long)]
    pub fruit_count: Option<usize>,

    /// Milliseconds between moves
    #[arg(long)]
    pub tick_ms: Option<u32>,

    /// Seed for fruit placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file (the terminal itself is the game screen)
    #[arg(long, default_value = "pixel-snake.log")]
    pub log_file: PathBuf,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Resolve the session configuration from file and flags.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };

        if self.no_wrap {
            config.wrap = false;
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(count) = self.fruit_count {
            config.fruit_count = count;
        }
        if let Some(ms) = self.tick_ms {
            config.tick_ms = ms;
        }

        Ok(config.normalized())
    }
}

/// Read a JSON config file; missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config file {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<GameConfig> {
    Ok(serde_json::from_str(text)?)
}

pub fn parse_level(s: &str) -> std::result::Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown log level {:?}", s))
}

/// Parse `X,Y` into a cell.
pub fn parse_cell(s: &str) -> std::result::Result<Cell, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {:?}", s))?;
    let x: i8 = x.trim().parse().map_err(|e| format!("bad x {:?}: {}", x, e))?;
    let y: i8 = y.trim().parse().map_err(|e| format!("bad y {:?}: {}", y, e))?;
    Ok(Cell::new(x, y))
}
