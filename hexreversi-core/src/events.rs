//! Engine notifications
//!
//! Listeners are called in registration order after every successful
//! state-changing call. They receive a read-only view of the engine and
//! query it for whatever they need.

use serde::{Deserialize, Serialize};

use crate::game::GameEngine;

/// Notification kinds fired by the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player to move may have changed
    TurnChanged,
    /// The game may have ended
    GameOverChecked,
}

/// Subscriber to engine notifications
pub trait GameListener {
    fn on_turn_changed(&mut self, _game: &GameEngine) {}

    fn on_game_over_checked(&mut self, _game: &GameEngine) {}

    /// Dispatch entry point used by the engine
    fn on_event(&mut self, event: GameEvent, game: &GameEngine) {
        match event {
            GameEvent::TurnChanged => self.on_turn_changed(game),
            GameEvent::GameOverChecked => self.on_game_over_checked(game),
        }
    }
}

impl<F> GameListener for F
where
    F: FnMut(GameEvent, &GameEngine),
{
    fn on_event(&mut self, event: GameEvent, game: &GameEngine) {
        self(event, game)
    }
}
