//! Match play - multiple games between two players
//!
//! Level 2 - Phase-level implementation

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{MatchConfig, PlayerKind};
use crate::game_runner::{GameOutcome, GameRunner};

/// One game of a match, with the seating it was played under
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_index: usize,
    /// True if the first player held Black
    pub first_was_black: bool,
    pub outcome: GameOutcome,
}

impl GameRecord {
    pub fn first_wins(&self) -> bool {
        if self.first_was_black {
            self.outcome.black_wins()
        } else {
            self.outcome.white_wins()
        }
    }

    pub fn second_wins(&self) -> bool {
        if self.first_was_black {
            self.outcome.white_wins()
        } else {
            self.outcome.black_wins()
        }
    }
}

/// Result of a match (multiple games)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Wins for the first player
    pub first_wins: u32,
    /// Wins for the second player
    pub second_wins: u32,
    pub ties: u32,
    /// Games stopped at the ply cap
    pub abandoned: u32,
    /// Wins by color, regardless of seat
    pub black_wins: u32,
    pub white_wins: u32,
    /// Average game length in plies
    pub avg_plies: f32,
    /// Total games played
    pub games_played: u32,
    /// Individual games
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    /// Create empty result
    pub fn empty() -> Self {
        Self {
            first_wins: 0,
            second_wins: 0,
            ties: 0,
            abandoned: 0,
            black_wins: 0,
            white_wins: 0,
            avg_plies: 0.0,
            games_played: 0,
            games: Vec::new(),
        }
    }

    /// Combine two results
    pub fn combine(&self, other: &MatchResult) -> MatchResult {
        let total_games = self.games_played + other.games_played;
        let avg_plies = if total_games > 0 {
            (self.avg_plies * self.games_played as f32
                + other.avg_plies * other.games_played as f32)
                / total_games as f32
        } else {
            0.0
        };

        let mut games = self.games.clone();
        games.extend(other.games.iter().cloned());

        MatchResult {
            first_wins: self.first_wins + other.first_wins,
            second_wins: self.second_wins + other.second_wins,
            ties: self.ties + other.ties,
            abandoned: self.abandoned + other.abandoned,
            black_wins: self.black_wins + other.black_wins,
            white_wins: self.white_wins + other.white_wins,
            avg_plies,
            games_played: total_games,
            games,
        }
    }

    fn rate(&self, count: u32) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            count as f32 / self.games_played as f32
        }
    }

    pub fn first_win_rate(&self) -> f32 {
        self.rate(self.first_wins)
    }

    pub fn second_win_rate(&self) -> f32 {
        self.rate(self.second_wins)
    }

    pub fn tie_rate(&self) -> f32 {
        self.rate(self.ties)
    }

    /// Wins = 1.0, ties = 0.5, losses and abandoned games = 0.0
    pub fn score_for_first(&self) -> f32 {
        self.first_wins as f32 + 0.5 * self.ties as f32
    }

    pub fn score_for_second(&self) -> f32 {
        self.second_wins as f32 + 0.5 * self.ties as f32
    }
}

/// Play a match between the two configured players (Level 2 phase)
///
/// Colors alternate: the first player takes Black in even-numbered games.
pub fn play_match(config: &MatchConfig) -> Result<MatchResult> {
    config.validate()?;
    if config.games == 0 {
        return Ok(MatchResult::empty());
    }

    tracing::info!(
        "Starting match: {} vs {} ({} games, size {})",
        config.first,
        config.second,
        config.games,
        config.size
    );

    let game_configs = prepare_game_configs(config.games);
    let records = if config.parallel {
        execute_games_parallel(config, &game_configs)?
    } else {
        execute_games(config, &game_configs)?
    };
    Ok(aggregate_results(records))
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Configuration for a single game in a match
#[derive(Clone, Copy, Debug)]
struct GameConfig {
    /// Whether the first player holds Black this game
    first_is_black: bool,
    /// Game index (for seeding)
    game_index: usize,
}

/// Prepare game configurations for a match
fn prepare_game_configs(games: usize) -> Vec<GameConfig> {
    (0..games)
        .map(|i| GameConfig {
            first_is_black: i % 2 == 0,
            game_index: i,
        })
        .collect()
}

/// Execute games sequentially
fn execute_games(config: &MatchConfig, game_configs: &[GameConfig]) -> Result<Vec<GameRecord>> {
    game_configs
        .iter()
        .map(|gc| play_single_game(config, gc))
        .collect()
}

/// Execute games in parallel using rayon
fn execute_games_parallel(
    config: &MatchConfig,
    game_configs: &[GameConfig],
) -> Result<Vec<GameRecord>> {
    game_configs
        .par_iter()
        .map(|gc| play_single_game(config, gc))
        .collect()
}

/// Play one game with the seating and seed of `gc`
fn play_single_game(config: &MatchConfig, gc: &GameConfig) -> Result<GameRecord> {
    let base_seed = config.seed.unwrap_or(42);
    let seed = base_seed.wrapping_add(gc.game_index as u64 * 2);

    let (black, white): (&PlayerKind, &PlayerKind) = if gc.first_is_black {
        (&config.first, &config.second)
    } else {
        (&config.second, &config.first)
    };

    let runner = GameRunner::new(config.size, config.max_plies);
    let outcome = runner
        .play_kinds(black, white, seed)
        .with_context(|| format!("Game {} failed", gc.game_index + 1))?;

    tracing::info!(
        "Game {}: {:?} (black {} {}, white {} {}, {} plies)",
        gc.game_index + 1,
        outcome.status,
        black,
        outcome.black_score,
        white,
        outcome.white_score,
        outcome.plies()
    );

    Ok(GameRecord {
        game_index: gc.game_index,
        first_was_black: gc.first_is_black,
        outcome,
    })
}

/// Aggregate game records into a match result
fn aggregate_results(records: Vec<GameRecord>) -> MatchResult {
    let mut result = MatchResult::empty();
    let mut total_plies = 0usize;

    for record in &records {
        total_plies += record.outcome.plies();

        if record.first_wins() {
            result.first_wins += 1;
        } else if record.second_wins() {
            result.second_wins += 1;
        } else if record.outcome.is_tie() {
            result.ties += 1;
        } else {
            result.abandoned += 1;
        }

        if record.outcome.black_wins() {
            result.black_wins += 1;
        } else if record.outcome.white_wins() {
            result.white_wins += 1;
        }
    }

    result.games_played = records.len() as u32;
    if !records.is_empty() {
        result.avg_plies = total_plies as f32 / records.len() as f32;
    }
    result.games = records;
    result
}
