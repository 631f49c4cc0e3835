//! Observer that keeps every notification it receives.

use serde::{Deserialize, Serialize};

use super::GameObserver;
use crate::core::player::PlayerId;
use crate::rules::{DiceGame, GameOutcome};

/// A single notification, as seen by an observer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// `on_game_start` fired.
    Started,
    /// `on_turn_rolled` fired for `player`.
    TurnRolled {
        /// The player taking the turn.
        player: PlayerId,
        /// Roll sum of the turn.
        roll: u32,
    },
    /// `on_game_end` fired.
    Ended {
        /// Outcome reported by the game, if any.
        outcome: Option<GameOutcome>,
    },
}

/// Records notifications in the order they arrive.
#[derive(Clone, Debug, Default)]
pub struct GameRecorder {
    events: Vec<GameEvent>,
}

impl GameRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of `TurnRolled` events.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::TurnRolled { .. }))
            .count()
    }

    /// Roll sums delivered on `player`'s turns, in order.
    #[must_use]
    pub fn rolls_for(&self, player: PlayerId) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::TurnRolled { player: p, roll } if *p == player => Some(*roll),
                _ => None,
            })
            .collect()
    }

    /// Count events matching a predicate.
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for GameRecorder {
    fn on_game_start(&mut self, _game: &dyn DiceGame) {
        self.events.push(GameEvent::Started);
    }

    fn on_turn_rolled(&mut self, game: &dyn DiceGame, roll: u32) {
        // Games always report an active player during a turn
        if let Some(player) = game.active_player() {
            self.events.push(GameEvent::TurnRolled {
                player: player.id(),
                roll,
            });
        }
    }

    fn on_game_end(&mut self, game: &dyn DiceGame) {
        self.events.push(GameEvent::Ended {
            outcome: game.outcome().cloned(),
        });
    }
}
