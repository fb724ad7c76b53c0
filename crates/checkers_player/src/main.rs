//! Checkers player CLI
//!
//! Reads a side symbol, a board size and the board from stdin, searches, and
//! prints one move: its hop count, then `row col` for the origin and every
//! destination.
//!
//! ```bash
//! printf 'w 4\n____\n_b__\n__w_\n____\n' | cargo run -p checkers_player -- --depth 3
//! ```

mod config;

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use checkers_core::{format_move, read_input};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{CliArgs, PlayerConfig, CONFIG_ENV};

fn print_usage() {
    println!("Checkers player");
    println!();
    println!("Usage:");
    println!("  checkers_player [--config FILE] [--depth N] [--engine minimax|random] < position");
    println!();
    println!("Input: side symbol (w/b), board size N, then N rows of _ w W b B");
    println!("Config file may also be given in {}", CONFIG_ENV);
}

fn init_logging() {
    // Stdout carries the move, logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = CliArgs::parse(&args)?;
    if cli.help {
        print_usage();
        return Ok(());
    }
    let config = PlayerConfig::resolve(&cli)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read position from stdin")?;
    let board = read_input(&input).context("Failed to parse position")?;

    let mut engine = config.build_engine();
    let result = engine.search(&board, config.search_limits());
    info!(
        engine = engine.name(),
        side = %board.perspective(),
        depth = result.depth,
        nodes = result.nodes,
        score = result.score,
        stopped = result.stopped,
        "move selected"
    );

    let mut stdout = io::stdout().lock();
    match result.best_move {
        Some(mv) => write!(stdout, "{}", format_move(&mv))?,
        None => {
            warn!(side = %board.perspective(), "no legal move available");
            writeln!(stdout, "0")?;
        }
    }
    stdout.flush()?;
    Ok(())
}
