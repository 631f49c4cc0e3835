//! Reference observer that counts turns.

use tracing::info;

use super::GameObserver;
use crate::rules::DiceGame;

/// Counts the turns of each game it watches and logs a summary at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnCounter {
    turns: u64,
    games_observed: u32,
}

impl TurnCounter {
    /// Create a counter that has seen nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns counted in the current (or most recent) game.
    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Number of games that reached their end while attached.
    #[must_use]
    pub fn games_observed(&self) -> u32 {
        self.games_observed
    }
}

impl GameObserver for TurnCounter {
    fn on_game_start(&mut self, game: &dyn DiceGame) {
        self.turns = 0;
        info!(players = game.players().len(), "Started a new game!");
    }

    fn on_turn_rolled(&mut self, _game: &dyn DiceGame, roll: u32) {
        self.turns += 1;
        info!(roll, "Rolled a {}", roll);
    }

    fn on_game_end(&mut self, _game: &dyn DiceGame) {
        self.games_observed += 1;
        info!(turns = self.turns, "The game lasted {} turns.", self.turns);
    }
}
