//! Game engine: turn alternation, passing and termination

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{CellColor, Hex, HexBoard};
use crate::error::{Result, ReversiError};
use crate::events::{GameEvent, GameListener};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Game status; every state but `Playing` is terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    BlackWon,
    WhiteWon,
    Tie,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Playing
    }

    /// Winning color, `None` while playing or on a tie
    pub fn winner(self) -> Option<CellColor> {
        match self {
            GameStatus::BlackWon => Some(CellColor::Black),
            GameStatus::WhiteWon => Some(CellColor::White),
            GameStatus::Playing | GameStatus::Tie => None,
        }
    }

    /// Final status for the given tile counts
    fn from_scores(black: usize, white: usize) -> Self {
        if white > black {
            GameStatus::WhiteWon
        } else if white == black {
            GameStatus::Tie
        } else {
            GameStatus::BlackWon
        }
    }
}

/// One boolean per player color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ColorFlags {
    black: bool,
    white: bool,
}

impl ColorFlags {
    fn get(&self, color: CellColor) -> bool {
        match color {
            CellColor::Black => self.black,
            CellColor::White => self.white,
            CellColor::Empty => false,
        }
    }

    fn set(&mut self, color: CellColor, value: bool) {
        match color {
            CellColor::Black => self.black = value,
            CellColor::White => self.white = value,
            CellColor::Empty => {}
        }
    }

    fn both(&self) -> bool {
        self.black && self.white
    }
}

// ============================================================================
// GAME ENGINE
// ============================================================================

/// Two-player game over one exclusively owned board.
///
/// `moved` enforces alternation: a color that has acted this round may not
/// act again until its opponent does. `passed` records a pass since the
/// color's last placement; both set ends the game.
pub struct GameEngine {
    board: HexBoard,
    status: GameStatus,
    moved: ColorFlags,
    passed: ColorFlags,
    listeners: Vec<Box<dyn GameListener>>,
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("status", &self.status)
            .field("moved", &self.moved)
            .field("passed", &self.passed)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GameEngine {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Start a game on a fresh board of `size`
    pub fn new(size: i32) -> Result<Self> {
        Ok(Self::from_board(HexBoard::new(size)?))
    }

    /// Wrap an existing board
    pub fn from_board(board: HexBoard) -> Self {
        Self {
            board,
            status: GameStatus::Playing,
            moved: ColorFlags::default(),
            passed: ColorFlags::default(),
            listeners: Vec::new(),
        }
    }

    /// A board of `size` in its starting position
    pub fn default_board(size: i32) -> Result<HexBoard> {
        HexBoard::new(size)
    }

    // ========================================================================
    // NOTIFICATIONS
    // ========================================================================

    /// Register a listener; listeners are notified in registration order
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: GameListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Announce the first turn
    pub fn start_game(&mut self) {
        self.notify(GameEvent::TurnChanged);
    }

    /// Ask listeners to check for game over
    pub fn check_game(&mut self) {
        self.notify(GameEvent::GameOverChecked);
    }

    fn notify(&mut self, event: GameEvent) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener.on_event(event, self);
        }
        self.listeners = listeners;
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    /// Place a `color` tile at `hex`, flipping every bracketed run
    pub fn place_tile(&mut self, color: CellColor, hex: Hex) -> Result<()> {
        let color = color.ensure_player()?;
        self.ensure_may_act(color)?;

        let flipped = self.board.make_move(hex, color)?;

        self.moved.set(color, true);
        self.moved.set(color.opponent(), false);
        self.passed.set(color, false);

        tracing::debug!("{} placed at {} flipping {}", color, hex, flipped);

        self.notify(GameEvent::TurnChanged);
        Ok(())
    }

    /// Pass the turn for `color`; two passes in a round end the game
    pub fn pass(&mut self, color: CellColor) -> Result<()> {
        let color = color.ensure_player()?;
        self.ensure_may_act(color)?;

        self.passed.set(color, true);
        self.moved.set(color, true);
        self.moved.set(color.opponent(), false);

        tracing::debug!("{} passed", color);

        if self.passed.both() {
            let black = self.board.score(CellColor::Black)?;
            let white = self.board.score(CellColor::White)?;
            self.status = GameStatus::from_scores(black, white);
            tracing::debug!(
                "game over after double pass: {:?} (black {}, white {})",
                self.status,
                black,
                white
            );
        }

        self.notify(GameEvent::GameOverChecked);
        self.notify(GameEvent::TurnChanged);
        Ok(())
    }

    fn ensure_may_act(&self, color: CellColor) -> Result<()> {
        if self.status.is_terminal() {
            return Err(ReversiError::InvalidState(
                "game is over, no more actions are accepted".to_string(),
            ));
        }
        if self.moved.get(color) {
            return Err(ReversiError::InvalidState(format!(
                "{} has already acted this round",
                color
            )));
        }
        Ok(())
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Color expected to act next
    pub fn cur_player(&self) -> CellColor {
        if self.moved.get(CellColor::Black) {
            CellColor::White
        } else {
            CellColor::Black
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Independent copy of the board
    pub fn board(&self) -> HexBoard {
        self.board.clone()
    }

    pub fn board_size(&self) -> i32 {
        self.board.size()
    }

    pub fn contents_of_cell(&self, hex: Hex) -> Result<CellColor> {
        self.board.contents_of(hex)
    }

    pub fn score(&self, color: CellColor) -> Result<usize> {
        self.board.score(color)
    }

    pub fn is_valid_move(&self, hex: Hex, color: CellColor) -> Result<bool> {
        self.board.is_valid_move(hex, color)
    }

    pub fn is_valid_coordinate(&self, hex: Hex) -> bool {
        self.board.is_valid_coordinate(hex)
    }

    pub fn num_tiles_captured(&self, hex: Hex, color: CellColor) -> Result<usize> {
        self.board.num_tiles_captured(hex, color)
    }

    pub fn has_valid_move(&self, color: CellColor) -> Result<bool> {
        self.board.has_any_legal_move(color)
    }

    pub fn legal_moves(&self, color: CellColor) -> Result<Vec<Hex>> {
        self.board.legal_moves(color)
    }
}

// ============================================================================
// TESTS
// ============================================================================
