//! Engine listener that reports game progress through `tracing`

use hexreversi_core::{CellColor, GameEngine, GameListener};

/// Logs every turn change and the final result of one game
#[derive(Clone, Debug, Default)]
pub struct LoggingListener {
    label: String,
    turns: usize,
    reported_end: bool,
}

impl LoggingListener {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Turn changes seen so far
    pub fn turns(&self) -> usize {
        self.turns
    }
}

fn scores(game: &GameEngine) -> (usize, usize) {
    (
        game.score(CellColor::Black).unwrap_or(0),
        game.score(CellColor::White).unwrap_or(0),
    )
}

impl GameListener for LoggingListener {
    fn on_turn_changed(&mut self, game: &GameEngine) {
        self.turns += 1;
        let (black, white) = scores(game);
        tracing::debug!(
            "{}: {} to move (black {}, white {})",
            self.label,
            game.cur_player(),
            black,
            white
        );
    }

    fn on_game_over_checked(&mut self, game: &GameEngine) {
        if game.is_game_over() && !self.reported_end {
            self.reported_end = true;
            let (black, white) = scores(game);
            tracing::info!(
                "{}: finished {:?} (black {}, white {})",
                self.label,
                game.status(),
                black,
                white
            );
        }
    }
}
