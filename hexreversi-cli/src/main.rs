//! HexReversi CLI - Command-line interface
//!
//! Commands:
//! - play: Play a single game
//! - match: Play a series of games with alternating colors
//! - render: Print the starting board

mod match_cmd;
mod play_cmd;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexreversi_core::HexBoard;

#[derive(Parser)]
#[command(name = "hexreversi")]
#[command(about = "Reversi on a hexagonal board")]
struct Cli {
    /// Log every placement and pass
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(play_cmd::PlayArgs),
    /// Play a series of games between two players
    Match(match_cmd::MatchArgs),
    /// Print the starting board
    Render {
        #[arg(long, default_value = "7")]
        size: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Match(args) => match_cmd::run(args),
        Commands::Render { size } => render(size),
    }
}

/// Logs go to stderr so stdout stays parseable with --json.
/// `--verbose` wins over RUST_LOG.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(size: i32) -> Result<()> {
    let board = HexBoard::new(size).with_context(|| format!("Cannot build a board of size {}", size))?;
    println!("{}", board);
    Ok(())
}
