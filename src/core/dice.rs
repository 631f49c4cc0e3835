//! Dice built on an injected [`RandomSource`].
//!
//! ## Face mapping
//!
//! A roll is `(source.random() % sides) + 1`. This is kept deliberately for
//! parity with the classic game, and it is biased whenever the source's range
//! is not a multiple of `sides`. With the 1-10 source and six sides, faces
//! 2-5 come up twice as often as 1 and 6, which changes how likely each
//! knock-out number is.
//!
//! Side counts are capped at [`MAX_DICE_SIDES`] so the faces of a throw
//! always sum within a `u32`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::error::{ConfigError, GameError};

/// Number of dice thrown on each turn.
pub const DICE_PER_THROW: usize = 2;

/// Largest side count a die may have.
pub const MAX_DICE_SIDES: u32 = u32::MAX / DICE_PER_THROW as u32;

/// A die with a fixed number of sides.
pub struct Dice {
    sides: u32,
    generator: Box<dyn RandomSource>,
}

impl Dice {
    /// Create a die with `sides` faces drawing from `generator`.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] when `sides` is zero
    /// or above [`MAX_DICE_SIDES`].
    pub fn new(sides: u32, generator: Box<dyn RandomSource>) -> Result<Self, GameError> {
        if sides == 0 {
            return Err(ConfigError::NoDiceSides.into());
        }
        if sides > MAX_DICE_SIDES {
            return Err(ConfigError::TooManyDiceSides { sides, max: MAX_DICE_SIDES }.into());
        }
        Ok(Self { sides, generator })
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll once, producing a face in `1..=sides`.
    pub fn roll(&mut self) -> u32 {
        self.generator.random() % self.sides + 1
    }

    /// Roll every die of a throw.
    pub fn throw(&mut self) -> Throw {
        let mut faces = [0; DICE_PER_THROW];
        for face in &mut faces {
            *face = self.roll();
        }
        Throw { faces }
    }
}

impl fmt::Debug for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dice")
            .field("sides", &self.sides)
            .finish_non_exhaustive()
    }
}

/// The faces of a single throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Throw {
    /// Face values in roll order.
    pub faces: [u32; DICE_PER_THROW],
}

impl Throw {
    /// The roll sum.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.faces.iter().sum()
    }
}
