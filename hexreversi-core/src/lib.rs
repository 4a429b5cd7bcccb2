//! HexReversi Core - Rules engine for Reversi on a hexagonal board
//!
//! This crate provides:
//! - Board geometry (hex grid with axial coordinates) and sandwich captures
//! - Game engine with strict turn alternation, passing and double-pass end
//! - Typed notifications for listeners
//! - Deterministic move strategies for automated players
//! - Text rendering of board snapshots

pub mod board;
pub mod error;
pub mod events;
pub mod game;
pub mod model;
pub mod strategy;
pub mod view;

// Re-exports for convenient access
pub use board::{CellColor, Hex, HexBoard, DIRECTIONS};
pub use error::{Result, ReversiError};
pub use events::{GameEvent, GameListener};
pub use game::{GameEngine, GameStatus};
pub use model::ReadonlyModel;
pub use strategy::MoveStrategy;
pub use view::TextView;
