//! Knock Out game implementation.

use std::fmt;

use tracing::{debug, info};

use crate::core::{
    Dice, GameConfig, GameRng, Player, PlayerId, RandomSource, UniformSource,
};
use crate::error::{ConfigError, GameError};
use crate::observer::GameObserver;
use crate::rules::{DiceGame, GameOutcome, GamePhase};

/// A game of Knock Out.
///
/// Owns its dice and players. The observer, if any, is borrowed for `'o`
/// and never owned.
pub struct Game<'o> {
    config: GameConfig,
    dice: Dice,
    /// Turn order.
    players: Vec<Player>,
    phase: GamePhase,
    turns_taken: u64,
    /// Index of the player whose turn is in progress or was taken last.
    active: Option<usize>,
    outcome: Option<GameOutcome>,
    observer: Option<&'o mut dyn GameObserver>,
}

/// Builder for creating a Game.
pub struct GameBuilder {
    config: GameConfig,
    seed: Option<u64>,
    knockout_numbers: Option<Vec<u32>>,
    random_source: Option<Box<dyn RandomSource>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::from_config(GameConfig::default())
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            seed: None,
            knockout_numbers: None,
            random_source: None,
        }
    }

    pub fn player_count(mut self, count: u32) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn dice_sides(mut self, sides: u32) -> Self {
        self.config.dice_sides = sides;
        self
    }

    pub fn knockout_range(mut self, low: u32, high: u32) -> Self {
        self.config = self.config.with_knockout_range(low, high);
        self
    }

    pub fn winning_score(mut self, score: u32) -> Self {
        self.config.winning_score = score;
        self
    }

    pub fn max_turns(mut self, turns: u64) -> Self {
        self.config.max_turns = Some(turns);
        self
    }

    /// Seed for knock-out number draws and the default dice source.
    ///
    /// Without a seed, the game is seeded from system entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use these knock-out numbers, in player order, instead of drawing them.
    pub fn knockout_numbers(mut self, numbers: impl IntoIterator<Item = u32>) -> Self {
        self.knockout_numbers = Some(numbers.into_iter().collect());
        self
    }

    /// Drive the dice from this source instead of the default 1-10 generator.
    pub fn random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.random_source = Some(Box::new(source));
        self
    }

    /// Build the game.
    ///
    /// Fails if the configuration is invalid or explicit knock-out numbers
    /// don't fit it.
    pub fn build<'o>(self) -> Result<Game<'o>, GameError> {
        self.config.validate()?;

        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let range = self.config.knockout_range;
        let player_count = self.config.player_count;

        let numbers = match self.knockout_numbers {
            Some(numbers) => {
                if numbers.len() != player_count as usize {
                    return Err(ConfigError::KnockoutCountMismatch {
                        expected: player_count as usize,
                        actual: numbers.len(),
                    }
                    .into());
                }
                if let Some(&number) = numbers.iter().find(|&&n| !range.contains(n)) {
                    return Err(ConfigError::KnockoutOutOfRange {
                        number,
                        low: range.low,
                        high: range.high,
                    }
                    .into());
                }
                numbers
            }
            None => {
                let mut draws = rng.for_context("knockout-numbers");
                (0..player_count)
                    .map(|_| draws.gen_range(range.as_range()))
                    .collect()
            }
        };

        let source: Box<dyn RandomSource> = match self.random_source {
            Some(source) => source,
            None => Box::new(UniformSource::one_through_ten(rng.for_context("dice"))),
        };
        let dice = Dice::new(self.config.dice_sides, source)?;

        let players: Vec<Player> = PlayerId::all(player_count)
            .zip(numbers)
            .map(|(id, number)| Player::new(id, number))
            .collect();

        debug!(seed = rng.seed(), players = players.len(), "Game built");

        Ok(Game {
            config: self.config,
            dice,
            players,
            phase: GamePhase::NotStarted,
            turns_taken: 0,
            active: None,
            outcome: None,
            observer: None,
        })
    }
}

impl<'o> Game<'o> {
    /// Attach an observer, returning the one it replaces.
    pub fn attach_observer(
        &mut self,
        observer: &'o mut dyn GameObserver,
    ) -> Option<&'o mut dyn GameObserver> {
        self.observer.replace(observer)
    }

    /// Detach the current observer.
    pub fn detach_observer(&mut self) -> Option<&'o mut dyn GameObserver> {
        self.observer.take()
    }

    /// Whether an observer is attached.
    #[must_use]
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// The game's dice.
    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    fn run(&mut self) -> GameOutcome {
        let mut index = 0;

        loop {
            if self.players[index].is_knocked_out() {
                index = (index + 1) % self.players.len();
                continue;
            }

            if let Some(max) = self.config.max_turns {
                if self.turns_taken >= max {
                    let turns = self.turns_taken;
                    return self.finish(GameOutcome::TurnLimitReached { turns });
                }
            }

            if let Some(outcome) = self.take_turn(index) {
                return self.finish(outcome);
            }

            index = (index + 1) % self.players.len();
        }
    }

    /// Resolve one turn for the player at `index`.
    ///
    /// Returns the outcome if this turn ended the game.
    fn take_turn(&mut self, index: usize) -> Option<GameOutcome> {
        self.active = Some(index);
        let roll = self.dice.throw().sum();
        self.turns_taken += 1;

        let id = self.players[index].id();
        debug!(player = %id, roll, turn = self.turns_taken, "Turn rolled");
        self.notify_turn_rolled(roll);

        let player = &mut self.players[index];

        // Knock-out is checked before any score change
        if roll == player.knockout_number() {
            player.knock_out();
            info!(player = %id, roll, "{} was knocked out", id);

            if self.players.iter().all(Player::is_knocked_out) {
                return Some(GameOutcome::AllKnockedOut);
            }
            return None;
        }

        let score = player.add_score(roll);
        if score >= self.config.winning_score {
            return Some(GameOutcome::Winner { player: id, score });
        }
        None
    }

    fn finish(&mut self, outcome: GameOutcome) -> GameOutcome {
        self.phase = GamePhase::Ended;
        self.outcome = Some(outcome.clone());

        info!(turns = self.turns_taken, "{}", outcome);

        self.notify_game_end();
        outcome
    }

    fn notify_game_start(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.on_game_start(&*self);
            self.observer = Some(observer);
        }
    }

    fn notify_turn_rolled(&mut self, roll: u32) {
        if let Some(observer) = self.observer.take() {
            observer.on_turn_rolled(&*self, roll);
            self.observer = Some(observer);
        }
    }

    fn notify_game_end(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.on_game_end(&*self);
            self.observer = Some(observer);
        }
    }
}

impl DiceGame for Game<'_> {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn dice_sides(&self) -> u32 {
        self.dice.sides()
    }

    fn players(&self) -> &[Player] {
        &self.players
    }

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn turns_taken(&self) -> u64 {
        self.turns_taken
    }

    fn active_player(&self) -> Option<&Player> {
        self.active.and_then(|i| self.players.get(i))
    }

    fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    fn play(&mut self) -> Result<GameOutcome, GameError> {
        match self.phase {
            GamePhase::NotStarted => {}
            GamePhase::Running => return Err(GameError::AlreadyRunning),
            GamePhase::Ended => return Err(GameError::AlreadyEnded),
        }

        self.phase = GamePhase::Running;
        info!(
            players = self.players.len(),
            winning_score = self.config.winning_score,
            "Knock Out started"
        );
        self.notify_game_start();

        Ok(self.run())
    }
}

impl fmt::Debug for Game<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("dice", &self.dice)
            .field("players", &self.players)
            .field("phase", &self.phase)
            .field("turns_taken", &self.turns_taken)
            .field("outcome", &self.outcome)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
