//! Observer notification tests.
//!
//! These verify that observers see each lifecycle point exactly once, in
//! order, and that they only ever get a read-only view of the game.

use knockout::{
    DiceGame, GameBuilder, GameEvent, GameObserver, GameOutcome, GameRecorder, PlayerId,
    ScriptedSource, TurnCounter,
};

/// An observer that relies on every default method.
struct Silent;

impl GameObserver for Silent {}

/// Counts each notification kind separately.
#[derive(Default)]
struct Tally {
    starts: u32,
    turns: u32,
    ends: u32,
    rolls: Vec<u32>,
}

impl GameObserver for Tally {
    fn on_game_start(&mut self, game: &dyn DiceGame) {
        assert_eq!(game.turns_taken(), 0);
        assert!(game.outcome().is_none());
        self.starts += 1;
    }

    fn on_turn_rolled(&mut self, game: &dyn DiceGame, roll: u32) {
        assert_eq!(self.starts, 1, "turn before start");
        assert_eq!(self.ends, 0, "turn after end");
        assert!(game.outcome().is_none());
        self.turns += 1;
        self.rolls.push(roll);
    }

    fn on_game_end(&mut self, game: &dyn DiceGame) {
        assert!(game.outcome().is_some());
        self.ends += 1;
    }
}

fn scripted_game(sum_source: u32, winning_score: u32) -> GameBuilder {
    GameBuilder::new()
        .player_count(2)
        .knockout_numbers([9, 9])
        .winning_score(winning_score)
        .random_source(ScriptedSource::constant(sum_source))
}

/// Notifications arrive start, turns, end, with nothing after the end.
#[test]
fn test_notification_order() {
    let mut tally = Tally::default();
    // Every sum is 6: player 1 hits 18 on turn 5
    let mut game = scripted_game(2, 18).build().unwrap();
    game.attach_observer(&mut tally);
    game.play().unwrap();
    drop(game);

    assert_eq!(tally.starts, 1);
    assert_eq!(tally.turns, 5);
    assert_eq!(tally.ends, 1);
    assert_eq!(tally.rolls, vec![6; 5]);
}

/// The turn counter resets on each game it observes.
#[test]
fn test_turn_counter_resets_between_games() {
    let mut counter = TurnCounter::new();

    {
        // Sums of 2: player 1 reaches 10 on turn 9
        let mut game = scripted_game(0, 10).build().unwrap();
        game.attach_observer(&mut counter);
        game.play().unwrap();
    }
    assert_eq!(counter.turns(), 9);
    assert_eq!(counter.games_observed(), 1);

    {
        // Sums of 12: player 1 wins on turn 1
        let mut game = scripted_game(5, 10).build().unwrap();
        game.attach_observer(&mut counter);
        game.play().unwrap();
    }
    assert_eq!(counter.turns(), 1);
    assert_eq!(counter.games_observed(), 2);
}

/// Games run the same with or without an observer.
#[test]
fn test_observer_does_not_change_game() {
    let mut silent = Silent;

    let mut observed = GameBuilder::new().player_count(6).seed(31).build().unwrap();
    observed.attach_observer(&mut silent);
    let mut unobserved = GameBuilder::new().player_count(6).seed(31).build().unwrap();

    assert_eq!(observed.play(), unobserved.play());
    assert_eq!(observed.players(), unobserved.players());
    assert_eq!(observed.turns_taken(), unobserved.turns_taken());
}

/// The recorder tags every roll with the player whose turn it was.
#[test]
fn test_recorder_attributes_rolls() {
    // Source 2, 3 alternates faces 3 and 4: every sum is 7
    let mut recorder = GameRecorder::new();
    let mut game = GameBuilder::new()
        .player_count(3)
        .knockout_numbers([8, 7, 9])
        .winning_score(14)
        .random_source(ScriptedSource::cycle([2, 3]))
        .build()
        .unwrap();
    game.attach_observer(&mut recorder);

    let outcome = game.play().unwrap();
    assert_eq!(outcome, GameOutcome::Winner { player: PlayerId::new(1), score: 14 });
    drop(game);

    // Player 2 is out on their first turn and never rolls again
    assert_eq!(recorder.rolls_for(PlayerId::new(1)), vec![7, 7]);
    assert_eq!(recorder.rolls_for(PlayerId::new(2)), vec![7]);
    assert_eq!(recorder.rolls_for(PlayerId::new(3)), vec![7]);

    let order: Vec<PlayerId> = recorder
        .events()
        .iter()
        .filter_map(|e| match e {
            GameEvent::TurnRolled { player, .. } => Some(*player),
            _ => None,
        })
        .collect();
    assert_eq!(
        order,
        vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3), PlayerId::new(1)]
    );
}

/// Recorded events survive a serde round trip and can be cleared.
#[test]
fn test_recorder_events_serialize() {
    let mut recorder = GameRecorder::new();
    let mut game = scripted_game(5, 10).build().unwrap();
    game.attach_observer(&mut recorder);
    game.play().unwrap();
    drop(game);

    let json = serde_json::to_string(recorder.events()).unwrap();
    let restored: Vec<GameEvent> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, recorder.events());

    recorder.clear();
    assert!(recorder.events().is_empty());
    assert_eq!(recorder.turns(), 0);
}
