//! Random number generation for dice and knock-out numbers.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical game
//! - **Context streams**: Dice rolls and knock-out draws use independent
//!   sequences derived from one seed
//! - **Substitutable**: Dice take any [`RandomSource`], so tests can inject
//!   scripted sequences
//!
//! ```
//! use knockout::core::{GameRng, RandomSource, UniformSource};
//!
//! let rng = GameRng::new(42);
//! let mut source = UniformSource::one_through_ten(rng.for_context("dice"));
//!
//! let value = source.random();
//! assert!((1..=10).contains(&value));
//! ```

use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::ConfigError;

/// A source of uniformly distributed integers.
///
/// Each implementation fixes its own inclusive range. Dice reduce whatever
/// the source yields into their face range, so any range works.
pub trait RandomSource {
    /// Produce the next value.
    fn random(&mut self) -> u32;
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a uniform integer in the given inclusive range.
    ///
    /// The range must be non-empty.
    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

/// Uniform source over a fixed inclusive range, backed by [`GameRng`].
#[derive(Clone, Debug)]
pub struct UniformSource {
    rng: GameRng,
    range: RangeInclusive<u32>,
}

impl UniformSource {
    /// Create a source producing values in `range`.
    pub fn new(rng: GameRng, range: RangeInclusive<u32>) -> Result<Self, ConfigError> {
        if range.is_empty() {
            return Err(ConfigError::EmptySourceRange {
                low: *range.start(),
                high: *range.end(),
            });
        }
        Ok(Self { rng, range })
    }

    /// The classic generator: values from 1 through 10.
    #[must_use]
    pub fn one_through_ten(rng: GameRng) -> Self {
        Self { rng, range: 1..=10 }
    }

    /// The inclusive range this source draws from.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<u32> {
        self.range.clone()
    }
}

impl RandomSource for UniformSource {
    fn random(&mut self) -> u32 {
        self.rng.gen_range(self.range.clone())
    }
}

/// Replays a fixed sequence of values, wrapping around at the end.
///
/// Intended for tests and reproductions where every roll must be known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    /// Cycle through `values` forever.
    pub fn cycle(values: impl IntoIterator<Item = u32>) -> Self {
        let values: Vec<u32> = values.into_iter().collect();
        assert!(!values.is_empty(), "Scripted source needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Always return `value`.
    #[must_use]
    pub fn constant(value: u32) -> Self {
        Self::cycle([value])
    }

    /// How many values have been produced so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn random(&mut self) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
