//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Positive, 1-based identifier, stable for the lifetime of a game.
//!
//! ## Player
//!
//! Knock-out number, running score and knocked-out flag. Only the game
//! mutates a player; everyone else gets read access.

use serde::{Deserialize, Serialize};

/// Player identifier. The first player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use knockout::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: u32) -> impl Iterator<Item = PlayerId> {
        (1..=player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in a Knock Out game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    knockout_number: u32,
    score: u32,
    knocked_out: bool,
}

impl Player {
    /// Create a player with a zero score who is still in the game.
    #[must_use]
    pub fn new(id: PlayerId, knockout_number: u32) -> Self {
        Self {
            id,
            knockout_number,
            score: 0,
            knocked_out: false,
        }
    }

    /// The player's ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Rolling exactly this sum knocks the player out.
    #[must_use]
    pub fn knockout_number(&self) -> u32 {
        self.knockout_number
    }

    /// Running score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the player has been knocked out.
    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.knocked_out
    }

    /// Add a roll to the score. Has no effect once knocked out.
    pub(crate) fn add_score(&mut self, roll: u32) -> u32 {
        if !self.knocked_out {
            self.score = self.score.saturating_add(roll);
        }
        self.score
    }

    pub(crate) fn knock_out(&mut self) {
        self.knocked_out = true;
    }
}
