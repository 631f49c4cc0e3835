//! Error types for the Knock Out engine.
//!
//! Every fallible operation returns [`GameError`]. Configuration problems are
//! caught when a game is built, never mid-game.

/// Why a game configuration was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A game needs at least one player.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// Dice need at least one side.
    #[error("dice must have at least one side")]
    NoDiceSides,

    /// Dice have more sides than a throw can sum.
    #[error("dice with {sides} sides exceed the maximum of {max}")]
    TooManyDiceSides {
        /// Requested side count.
        sides: u32,
        /// Largest allowed side count.
        max: u32,
    },

    /// The winning score must be above zero.
    #[error("winning score must be positive")]
    NonPositiveWinningScore,

    /// The knock-out number range contains no values.
    #[error("knock-out range {low}..={high} is empty")]
    EmptyKnockoutRange {
        /// Lower bound.
        low: u32,
        /// Upper bound.
        high: u32,
    },

    /// A random source was given a range with no values.
    #[error("random source range {low}..={high} is empty")]
    EmptySourceRange {
        /// Lower bound.
        low: u32,
        /// Upper bound.
        high: u32,
    },

    /// Explicit knock-out numbers do not cover every player.
    #[error("expected {expected} knock-out numbers, got {actual}")]
    KnockoutCountMismatch {
        /// Number of players in the game.
        expected: usize,
        /// Number of knock-out numbers supplied.
        actual: usize,
    },

    /// An explicit knock-out number lies outside the configured range.
    #[error("knock-out number {number} is outside {low}..={high}")]
    KnockoutOutOfRange {
        /// The offending number.
        number: u32,
        /// Lower bound.
        low: u32,
        /// Upper bound.
        high: u32,
    },
}

/// Errors surfaced by the game API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The game could not be set up.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// `play()` was called on a game that has already finished.
    #[error("game has already ended")]
    AlreadyEnded,

    /// `play()` was called while a previous call never returned.
    #[error("game is already in progress")]
    AlreadyRunning,
}
