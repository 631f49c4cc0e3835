//! Knock Out, the dice elimination game.
//!
//! - Each player has a knock-out number, 6-9 by default
//! - On your turn: throw two dice and add the sum to your score
//! - Roll your own knock-out number and you are out
//! - The game ends when everyone is out, or someone reaches the winning score
//!
//! Any number of players (at least one) may take part.

mod game;

pub use game::{Game, GameBuilder};
