//! Dice game trait and result types.
//!
//! Games implement `DiceGame` to expose their state:
//! - Configuration, dice and players
//! - Lifecycle phase and turn count
//! - The final outcome
//!
//! Observers only ever see a game through `&dyn DiceGame`, so they can
//! inspect it but never change it.

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::player::{Player, PlayerId};
use crate::error::GameError;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Built but `play()` not yet called.
    #[default]
    NotStarted,
    /// Turns are being taken.
    Running,
    /// A terminal condition was reached.
    Ended,
}

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A player reached the winning score.
    Winner {
        /// The winning player.
        player: PlayerId,
        /// Their final score.
        score: u32,
    },
    /// Every player was knocked out.
    AllKnockedOut,
    /// The configured turn cap was hit first.
    TurnLimitReached {
        /// Turns taken when the cap was hit.
        turns: u64,
    },
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameOutcome::Winner { player: p, .. } if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::Winner { player, .. } => Some(*player),
            GameOutcome::AllKnockedOut | GameOutcome::TurnLimitReached { .. } => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner { player, score } => {
                write!(f, "{player} has won with a final score of {score}")
            }
            GameOutcome::AllKnockedOut => write!(f, "All players have been knocked out!"),
            GameOutcome::TurnLimitReached { turns } => {
                write!(f, "Turn limit reached after {turns} turns")
            }
        }
    }
}

/// A turn-based dice game.
///
/// ## Implementation Notes
///
/// - `players`: Turn order, fixed for the lifetime of the game
/// - `active_player`: The player whose turn is being resolved, if any
/// - `outcome`: `None` until the game has ended
/// - `play`: Runs to completion; must fail on an ended game
pub trait DiceGame {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Sides on each die.
    fn dice_sides(&self) -> u32;

    /// All players in turn order.
    fn players(&self) -> &[Player];

    /// Current lifecycle phase.
    fn phase(&self) -> GamePhase;

    /// Turns taken so far.
    fn turns_taken(&self) -> u64;

    /// The player whose turn is in progress or was taken last.
    fn active_player(&self) -> Option<&Player>;

    /// How the game ended, once it has.
    fn outcome(&self) -> Option<&GameOutcome>;

    /// Play until a terminal condition is reached.
    fn play(&mut self) -> Result<GameOutcome, GameError>;

    // === Convenience Methods ===

    /// Look up a player by ID.
    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players().iter().find(|p| p.id() == id)
    }

    /// Players who have not been knocked out.
    fn remaining_players(&self) -> Vec<PlayerId> {
        self.players()
            .iter()
            .filter(|p| !p.is_knocked_out())
            .map(Player::id)
            .collect()
    }

    /// The winner, if the game ended with one.
    fn winner(&self) -> Option<PlayerId> {
        self.outcome().and_then(GameOutcome::winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_outcome_is_winner() {
        let result = GameOutcome::Winner { player: PlayerId::new(2), score: 104 };
        assert!(!result.is_winner(PlayerId::new(1)));
        assert!(result.is_winner(PlayerId::new(2)));
        assert_eq!(result.winner(), Some(PlayerId::new(2)));

        let wiped = GameOutcome::AllKnockedOut;
        assert!(!wiped.is_winner(PlayerId::new(1)));
        assert_eq!(wiped.winner(), None);

        let capped = GameOutcome::TurnLimitReached { turns: 10 };
        assert_eq!(capped.winner(), None);
    }

    #[test]
    fn test_outcome_messages() {
        let result = GameOutcome::Winner { player: PlayerId::new(3), score: 101 };
        assert_eq!(result.to_string(), "Player 3 has won with a final score of 101");
        assert_eq!(
            GameOutcome::AllKnockedOut.to_string(),
            "All players have been knocked out!"
        );
    }

    #[test]
    fn test_default_phase() {
        assert_eq!(GamePhase::default(), GamePhase::NotStarted);
    }
}
