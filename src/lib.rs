//! # knockout
//!
//! A simulator for the dice elimination game *Knock Out*.
//!
//! ## Rules
//!
//! 1. Every player gets a knock-out number between 6 and 9.
//! 2. Players take turns throwing two dice, adding the sum to their score.
//! 3. Rolling your own knock-out number knocks you out of the game.
//! 4. Play ends when all players are knocked out, or when one player
//!    reaches the winning score (100 by default).
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Dice draw from a `RandomSource` supplied at
//!    construction. Seeded sources make games reproducible, scripted sources
//!    make them exact.
//!
//! 2. **Observers Watch, Never Steer**: A `GameObserver` sees a game through
//!    `&dyn DiceGame` and cannot alter it or abort it.
//!
//! 3. **Fail Fast**: Bad configuration is rejected by `GameBuilder::build`,
//!    before any turn is played.
//!
//! ## Example
//!
//! ```
//! use knockout::{DiceGame, GameBuilder, TurnCounter};
//!
//! let mut counter = TurnCounter::new();
//! let mut game = GameBuilder::new().player_count(4).seed(7).build()?;
//! game.attach_observer(&mut counter);
//!
//! let outcome = game.play()?;
//! assert_eq!(game.outcome(), Some(&outcome));
//! drop(game);
//!
//! assert!(counter.turns() > 0);
//! # Ok::<(), knockout::GameError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: Randomness, dice, players, configuration
//! - `rules`: The `DiceGame` trait, phases and outcomes
//! - `observer`: Observer trait and the turn counter / recorder observers
//! - `games`: The Knock Out game and its builder
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod games;
pub mod observer;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Dice, GameConfig, GameRng, KnockoutRange, Player, PlayerId, RandomSource, ScriptedSource,
    Throw, UniformSource, DICE_PER_THROW, MAX_DICE_SIDES,
};

pub use crate::error::{ConfigError, GameError};

pub use crate::games::knockout::{Game, GameBuilder};

pub use crate::observer::{GameEvent, GameObserver, GameRecorder, TurnCounter};

pub use crate::rules::{DiceGame, GameOutcome, GamePhase};
