//! Game configuration.
//!
//! A `GameConfig` carries every tunable rule parameter. It is plain data,
//! serde-friendly so it can be loaded from JSON, and checked with
//! [`GameConfig::validate`] before a game is built.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::dice::MAX_DICE_SIDES;
use crate::error::ConfigError;

/// Inclusive range knock-out numbers are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutRange {
    /// Smallest knock-out number.
    pub low: u32,
    /// Largest knock-out number.
    pub high: u32,
}

impl KnockoutRange {
    /// Create a new range.
    #[must_use]
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Check whether `number` lies in the range.
    #[must_use]
    pub fn contains(&self, number: u32) -> bool {
        (self.low..=self.high).contains(&number)
    }

    /// As a standard inclusive range.
    #[must_use]
    pub fn as_range(&self) -> RangeInclusive<u32> {
        self.low..=self.high
    }
}

impl Default for KnockoutRange {
    fn default() -> Self {
        Self::new(6, 9)
    }
}

impl std::fmt::Display for KnockoutRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.low, self.high)
    }
}

/// Rule parameters for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players, in turn order.
    pub player_count: u32,

    /// Sides on each die.
    pub dice_sides: u32,

    /// Range knock-out numbers are drawn from.
    pub knockout_range: KnockoutRange,

    /// Score at or above which a player wins immediately.
    pub winning_score: u32,

    /// Optional cap on total turns (None = play until a terminal condition).
    pub max_turns: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            dice_sides: 6,
            knockout_range: KnockoutRange::default(),
            winning_score: 100,
            max_turns: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_player_count(mut self, count: u32) -> Self {
        self.player_count = count;
        self
    }

    /// Set the number of sides per die.
    #[must_use]
    pub fn with_dice_sides(mut self, sides: u32) -> Self {
        self.dice_sides = sides;
        self
    }

    /// Set the knock-out number range.
    #[must_use]
    pub fn with_knockout_range(mut self, low: u32, high: u32) -> Self {
        self.knockout_range = KnockoutRange::new(low, high);
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Set a cap on total turns.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u64) -> Self {
        self.max_turns = Some(turns);
        self
    }

    /// Check that a game can be built from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.dice_sides == 0 {
            return Err(ConfigError::NoDiceSides);
        }
        if self.dice_sides > MAX_DICE_SIDES {
            return Err(ConfigError::TooManyDiceSides {
                sides: self.dice_sides,
                max: MAX_DICE_SIDES,
            });
        }
        if self.winning_score == 0 {
            return Err(ConfigError::NonPositiveWinningScore);
        }
        if self.knockout_range.low > self.knockout_range.high {
            return Err(ConfigError::EmptyKnockoutRange {
                low: self.knockout_range.low,
                high: self.knockout_range.high,
            });
        }
        Ok(())
    }
}
