//! HexReversi Tournament - Players, game driving and match play
//!
//! This crate provides:
//! - Human, machine and random players behind one `Player` trait
//! - A game runner that forces passes and caps game length
//! - Match play with color alternation, optionally in parallel
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: play_match (phases)
//! - Level 3: GameRunner, players (steps)
//! - Level 4: configuration

mod config;
mod game_runner;
mod listener;
mod match_play;
mod player;

pub use config::{MatchConfig, PlayerKind};
pub use game_runner::{GameOutcome, GameRunner};
pub use listener::LoggingListener;
pub use match_play::{play_match, GameRecord, MatchResult};
pub use player::{
    create_player, Action, HumanPlayer, LineInput, MachinePlayer, Player, RandomPlayer, SharedStdin,
};
