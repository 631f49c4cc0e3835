//! Game trait and result types.
//!
//! `DiceGame` is the read-only view of a game that observers receive,
//! plus the `play` entry point. `GamePhase` and `GameOutcome` describe
//! where a game is in its lifecycle and how it ended.

pub mod engine;

pub use engine::{DiceGame, GameOutcome, GamePhase};
