//! Game runner - drives a single game between two players
//!
//! Level 3 - Step-level implementation

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use hexreversi_core::{CellColor, GameEngine, GameStatus};

use crate::config::PlayerKind;
use crate::listener::LoggingListener;
use crate::player::{create_player, Action, Player};

/// Attempts a player gets before the runner gives up on it
const MAX_ATTEMPTS: usize = 16;

/// Outcome of a single game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Final engine status; `Playing` if the ply cap was hit
    pub status: GameStatus,
    pub black_score: usize,
    pub white_score: usize,
    /// Every accepted action in order
    pub actions: Vec<(CellColor, Action)>,
}

impl GameOutcome {
    /// Number of accepted actions, passes included
    pub fn plies(&self) -> usize {
        self.actions.len()
    }

    pub fn black_wins(&self) -> bool {
        self.status == GameStatus::BlackWon
    }

    pub fn white_wins(&self) -> bool {
        self.status == GameStatus::WhiteWon
    }

    pub fn is_tie(&self) -> bool {
        self.status == GameStatus::Tie
    }

    /// Stopped at the ply cap before the game ended
    pub fn is_abandoned(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Get winner (None for tie or abandoned)
    pub fn winner(&self) -> Option<CellColor> {
        self.status.winner()
    }

    pub fn passes(&self) -> usize {
        self.actions
            .iter()
            .filter(|(_, action)| *action == Action::Pass)
            .count()
    }
}

/// Plays games on boards of one size
#[derive(Clone, Copy, Debug)]
pub struct GameRunner {
    size: i32,
    max_plies: usize,
}

impl GameRunner {
    pub fn new(size: i32, max_plies: usize) -> Self {
        Self { size, max_plies }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Play a fresh game, returning the outcome
    pub fn play_game(&self, black: &mut dyn Player, white: &mut dyn Player) -> Result<GameOutcome> {
        let engine = GameEngine::new(self.size)?;
        self.play_on(engine, black, white)
    }

    /// Build both players from their kinds and play a fresh game
    pub fn play_kinds(&self, black: &PlayerKind, white: &PlayerKind, seed: u64) -> Result<GameOutcome> {
        let mut black = create_player(black, seed);
        let mut white = create_player(white, seed.wrapping_add(1));
        self.play_game(black.as_mut(), white.as_mut())
    }

    /// Play on an engine the caller prepared, e.g. with extra listeners
    pub fn play_on(
        &self,
        mut engine: GameEngine,
        black: &mut dyn Player,
        white: &mut dyn Player,
    ) -> Result<GameOutcome> {
        let label = format!("{} vs {}", black.name(), white.name());
        engine.subscribe(LoggingListener::new(label.clone()));
        engine.start_game();

        let mut actions = Vec::new();
        while !engine.is_game_over() && actions.len() < self.max_plies {
            let color = engine.cur_player();
            let player: &mut dyn Player = match color {
                CellColor::White => &mut *white,
                _ => &mut *black,
            };
            let action = take_turn(&mut engine, player, color)?;
            actions.push((color, action));
        }

        if !engine.is_game_over() {
            tracing::warn!("{}: abandoned after {} plies", label, actions.len());
            engine.check_game();
        }

        Ok(GameOutcome {
            status: engine.status(),
            black_score: engine.score(CellColor::Black)?,
            white_score: engine.score(CellColor::White)?,
            actions,
        })
    }
}

/// Get one accepted action from `player`.
///
/// A color with no legal placement is passed for without asking.
fn take_turn(engine: &mut GameEngine, player: &mut dyn Player, color: CellColor) -> Result<Action> {
    if !engine.has_valid_move(color)? {
        tracing::debug!("{} has no legal placement, forced pass", color);
        engine.pass(color)?;
        return Ok(Action::Pass);
    }

    for _ in 0..MAX_ATTEMPTS {
        let action = player.choose_action(engine, color)?;
        let applied = match action {
            Action::Place(hex) => engine.place_tile(color, hex),
            Action::Pass => engine.pass(color),
        };
        match applied {
            Ok(()) => return Ok(action),
            Err(err) => {
                tracing::warn!("{} ({}) {:?} rejected: {}", player.name(), color, action, err);
                player.on_rejected(action, &err);
            }
        }
    }

    bail!(
        "{} ({}) made {} rejected attempts in a row",
        player.name(),
        color,
        MAX_ATTEMPTS
    )
}
