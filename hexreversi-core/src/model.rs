//! Read-only view of a game, consumed by strategies and renderers

use crate::board::{CellColor, Hex};
use crate::error::Result;
use crate::game::{GameEngine, GameStatus};

/// Queries a strategy or view may make without mutating anything
pub trait ReadonlyModel {
    fn board_size(&self) -> i32;

    fn contents_of(&self, hex: Hex) -> Result<CellColor>;

    fn is_valid_coordinate(&self, hex: Hex) -> bool;

    fn is_valid_move(&self, hex: Hex, color: CellColor) -> Result<bool>;

    fn num_tiles_captured(&self, hex: Hex, color: CellColor) -> Result<usize>;

    fn has_valid_move(&self, color: CellColor) -> Result<bool>;

    fn score(&self, color: CellColor) -> Result<usize>;

    fn cur_player(&self) -> CellColor;

    fn status(&self) -> GameStatus;

    fn is_game_over(&self) -> bool {
        self.status().is_terminal()
    }
}

impl ReadonlyModel for GameEngine {
    fn board_size(&self) -> i32 {
        GameEngine::board_size(self)
    }

    fn contents_of(&self, hex: Hex) -> Result<CellColor> {
        self.contents_of_cell(hex)
    }

    fn is_valid_coordinate(&self, hex: Hex) -> bool {
        GameEngine::is_valid_coordinate(self, hex)
    }

    fn is_valid_move(&self, hex: Hex, color: CellColor) -> Result<bool> {
        GameEngine::is_valid_move(self, hex, color)
    }

    fn num_tiles_captured(&self, hex: Hex, color: CellColor) -> Result<usize> {
        GameEngine::num_tiles_captured(self, hex, color)
    }

    fn has_valid_move(&self, color: CellColor) -> Result<bool> {
        GameEngine::has_valid_move(self, color)
    }

    fn score(&self, color: CellColor) -> Result<usize> {
        GameEngine::score(self, color)
    }

    fn cur_player(&self) -> CellColor {
        GameEngine::cur_player(self)
    }

    fn status(&self) -> GameStatus {
        GameEngine::status(self)
    }

    fn is_game_over(&self) -> bool {
        GameEngine::is_game_over(self)
    }
}
