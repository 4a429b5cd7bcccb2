//! Players - anything that can pick an action for one color
//!
//! Level 3 - Step-level implementation

use std::io::{self, BufRead, Stdout, Write};

use anyhow::{bail, Context, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use hexreversi_core::{CellColor, GameEngine, Hex, MoveStrategy, ReversiError, TextView};

use crate::config::PlayerKind;

/// One turn's worth of intent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Place(Hex),
    Pass,
}

/// Source of actions for one side of the board
pub trait Player {
    /// Short label for logs and reports
    fn name(&self) -> String;

    /// Pick the next action for `color`; the engine has not been touched yet
    fn choose_action(&mut self, game: &GameEngine, color: CellColor) -> Result<Action>;

    /// The engine refused the last action; the player will be asked again
    fn on_rejected(&mut self, _action: Action, _error: &ReversiError) {}
}

/// Build the player described by `kind`.
///
/// Random players mix `seed` into their own seed so every game of a match
/// sees a different sequence.
pub fn create_player(kind: &PlayerKind, seed: u64) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio()),
        PlayerKind::Machine(strategy) => Box::new(MachinePlayer::new(strategy.clone())),
        PlayerKind::Random { seed: own } => Box::new(RandomPlayer::new(own.wrapping_add(seed))),
    }
}

// ============================================================================
// MACHINE
// ============================================================================

/// Plays the cell its strategy proposes
#[derive(Clone, Debug)]
pub struct MachinePlayer {
    strategy: MoveStrategy,
}

impl MachinePlayer {
    pub fn new(strategy: MoveStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &MoveStrategy {
        &self.strategy
    }
}

impl Player for MachinePlayer {
    fn name(&self) -> String {
        PlayerKind::Machine(self.strategy.clone()).to_string()
    }

    fn choose_action(&mut self, game: &GameEngine, color: CellColor) -> Result<Action> {
        match self.strategy.choose_move(game, color)? {
            Some(hex) if game.is_valid_move(hex, color)? => Ok(Action::Place(hex)),
            Some(hex) => {
                tracing::warn!("{} proposed unplayable cell {}, passing", self.name(), hex);
                Ok(Action::Pass)
            }
            None => Ok(Action::Pass),
        }
    }
}

// ============================================================================
// RANDOM
// ============================================================================

/// Uniformly random legal placement, pass when there is none
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> String {
        format!("random:{}", self.seed)
    }

    fn choose_action(&mut self, game: &GameEngine, color: CellColor) -> Result<Action> {
        let moves = game.legal_moves(color)?;
        Ok(match moves.choose(&mut self.rng) {
            Some(&hex) => Action::Place(hex),
            None => Action::Pass,
        })
    }
}

// ============================================================================
// HUMAN
// ============================================================================

/// Somewhere a human's lines come from
pub trait LineInput {
    /// Append the next line to `buf`; returns 0 at end of input
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineInput for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// The process-wide stdin buffer, locked for one line at a time.
///
/// Any number of players, across any number of games, can read through it
/// without losing lines to a private buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct SharedStdin;

impl LineInput for SharedStdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// Reads `q r` or `pass` lines, echoing the board and prompts to `output`
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<SharedStdin, Stdout> {
    /// Interactive player on the terminal
    pub fn stdio() -> Self {
        Self::new(SharedStdin, io::stdout())
    }
}

impl<R: LineInput, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn prompt(&mut self, game: &GameEngine, color: CellColor) -> Result<()> {
        let board = TextView::new(game).render()?;
        writeln!(self.output, "{}", board)?;
        write!(self.output, "{} to move (q r | pass): ", color)?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: LineInput, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> String {
        "human".to_string()
    }

    fn choose_action(&mut self, game: &GameEngine, color: CellColor) -> Result<Action> {
        loop {
            self.prompt(game, color)?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read player input")?;
            if read == 0 {
                bail!("Input closed while waiting for {}", color);
            }

            match parse_action(&line) {
                Some(action) => return Ok(action),
                None => writeln!(self.output, "Could not understand '{}'", line.trim())?,
            }
        }
    }

    fn on_rejected(&mut self, action: Action, error: &ReversiError) {
        // Nowhere left to report a failed write
        let _ = writeln!(self.output, "{:?} rejected: {}", action, error);
    }
}

/// `pass`, or two integers `q r` separated by spaces or a comma
fn parse_action(line: &str) -> Option<Action> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("pass") {
        return Some(Action::Pass);
    }

    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let q = parts.next()?.parse().ok()?;
    let r = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Action::Place(Hex::new(q, r)))
}
