//! Observers of game progress.
//!
//! A game holds at most one borrowed [`GameObserver`] and calls it
//! synchronously at three points:
//!
//! 1. `on_game_start` - once, before the first roll
//! 2. `on_turn_rolled` - once per turn, after the throw and before the
//!    roll is applied to the acting player
//! 3. `on_game_end` - once, after a terminal condition; nothing follows
//!
//! Observers get a shared `&dyn DiceGame`, so they can inspect the game but
//! not change it. There is no error channel back into the game loop.

mod recorder;
mod turn_counter;

pub use recorder::{GameEvent, GameRecorder};
pub use turn_counter::TurnCounter;

use crate::rules::DiceGame;

/// Receives lifecycle and turn notifications from a game.
///
/// Every method defaults to doing nothing.
pub trait GameObserver {
    /// The game is about to take its first turn.
    fn on_game_start(&mut self, _game: &dyn DiceGame) {}

    /// A turn's dice were thrown and summed to `roll`.
    ///
    /// `game.active_player()` is the player taking the turn, as they were
    /// before this roll is applied.
    fn on_turn_rolled(&mut self, _game: &dyn DiceGame, _roll: u32) {}

    /// The game has ended. `game.outcome()` is set.
    fn on_game_end(&mut self, _game: &dyn DiceGame) {}
}
