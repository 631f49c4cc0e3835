//! Core building blocks: randomness, dice, players, configuration.
//!
//! Nothing here knows the turn order or win conditions; those live in
//! `games::knockout`.

pub mod config;
pub mod dice;
pub mod player;
pub mod rng;

pub use config::{GameConfig, KnockoutRange};
pub use dice::{Dice, Throw, DICE_PER_THROW, MAX_DICE_SIDES};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, RandomSource, ScriptedSource, UniformSource};
