//! Match command - play games between two players
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), report_results()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexreversi_tournament::{play_match, MatchConfig, MatchResult, PlayerKind};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Match configuration JSON file; flags below override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board size (odd, greater than 3)
    #[arg(long)]
    pub size: Option<i32>,

    /// Player taking Black in even-numbered games
    #[arg(long)]
    pub first: Option<PlayerKind>,

    /// Player taking Black in odd-numbered games
    #[arg(long)]
    pub second: Option<PlayerKind>,

    /// Number of games to play (will alternate colors)
    #[arg(long)]
    pub games: Option<usize>,

    /// Play games on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Base seed for random players
    #[arg(long)]
    pub seed: Option<u64>,

    /// Abandon a game after this many actions
    #[arg(long)]
    pub max_plies: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Merge the config file with command-line overrides
/// 2. Play the match
/// 3. Report results
pub fn run(args: MatchArgs) -> Result<()> {
    let config = build_config(&args)?;
    let result = play_match(&config)?;
    report_results(&result, &config, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_config(args: &MatchArgs) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("Failed to load match config: {}", path.display()))?,
        None => MatchConfig::default(),
    };

    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(first) = &args.first {
        config.first = first.clone();
    }
    if let Some(second) = &args.second {
        config.second = second.clone();
    }
    if let Some(games) = args.games {
        config.games = games;
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }

    config.validate()?;
    Ok(config)
}

fn report_results(result: &MatchResult, config: &MatchConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print_text_results(result, config);
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn percent(count: u32, total: u32) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

fn print_text_results(result: &MatchResult, config: &MatchConfig) {
    let total = result.games_played;

    println!("\n=== Match Results ===");
    println!("Board size:   {}", config.size);
    println!("Total games:  {}", total);
    println!(
        "{:<13} {} ({:.1}%)",
        format!("{} wins:", config.first),
        result.first_wins,
        percent(result.first_wins, total)
    );
    println!(
        "{:<13} {} ({:.1}%)",
        format!("{} wins:", config.second),
        result.second_wins,
        percent(result.second_wins, total)
    );
    println!("Ties:         {} ({:.1}%)", result.ties, percent(result.ties, total));
    if result.abandoned > 0 {
        println!("Abandoned:    {}", result.abandoned);
    }
    println!(
        "By color:     Black {} / White {}",
        result.black_wins, result.white_wins
    );
    println!("Avg plies:    {:.1}", result.avg_plies);
}
