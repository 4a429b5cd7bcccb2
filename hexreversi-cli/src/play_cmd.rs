//! Play command - one game between two players
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: prepare_engine(), report_outcome()
//! - Level 4: formatting utilities

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Args;

use hexreversi_core::{GameEngine, GameEvent, HexBoard};
use hexreversi_tournament::{create_player, GameOutcome, GameRunner, PlayerKind};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board size (odd, greater than 3)
    #[arg(long, default_value = "7")]
    pub size: i32,

    /// Black player: human, capture, corner, both, random[:SEED]
    #[arg(long, default_value = "human")]
    pub black: PlayerKind,

    /// White player: human, capture, corner, both, random[:SEED]
    #[arg(long, default_value = "both")]
    pub white: PlayerKind,

    /// Seed for random players
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Abandon the game after this many actions
    #[arg(long, default_value = "1000")]
    pub max_plies: usize,

    /// Print the board after every turn
    #[arg(long)]
    pub show_board: bool,

    /// Output the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs) -> Result<()> {
    let (engine, final_board) = prepare_engine(&args)?;

    tracing::info!(
        "Starting game: {} (Black) vs {} (White) on size {}",
        args.black,
        args.white,
        args.size
    );

    let mut black = create_player(&args.black, args.seed);
    let mut white = create_player(&args.white, args.seed.wrapping_add(1));
    let runner = GameRunner::new(args.size, args.max_plies);
    let outcome = runner.play_on(engine, black.as_mut(), white.as_mut())?;

    let board = final_board.borrow().clone();
    report_outcome(&outcome, board.as_ref(), args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Fresh engine with listeners that keep the latest board and optionally
/// print it every turn
fn prepare_engine(args: &PlayArgs) -> Result<(GameEngine, Rc<RefCell<Option<HexBoard>>>)> {
    let mut engine = GameEngine::new(args.size)
        .with_context(|| format!("Cannot start a game of size {}", args.size))?;

    let final_board = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&final_board);
    engine.subscribe(move |_: GameEvent, game: &GameEngine| {
        *sink.borrow_mut() = Some(game.board());
    });

    if args.show_board && !args.json {
        engine.subscribe(|event: GameEvent, game: &GameEngine| {
            if event == GameEvent::TurnChanged && !game.is_game_over() {
                println!("{}\n{} to move\n", game.board(), game.cur_player());
            }
        });
    }

    Ok((engine, final_board))
}

fn report_outcome(outcome: &GameOutcome, board: Option<&HexBoard>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    if let Some(board) = board {
        println!("{}", board);
    }
    println!("{}", summary_line(outcome));
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn summary_line(outcome: &GameOutcome) -> String {
    let verdict = match outcome.winner() {
        Some(color) => format!("{} wins", color),
        None if outcome.is_abandoned() => "Abandoned".to_string(),
        None => "Tie".to_string(),
    };
    format!(
        "{}: black {}, white {} after {} plies",
        verdict,
        outcome.black_score,
        outcome.white_score,
        outcome.plies()
    )
}
