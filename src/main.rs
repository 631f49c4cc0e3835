//! Plays a single game of Knock Out from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use knockout::{DiceGame, GameBuilder, GameConfig, TurnCounter};

/// Knock Out - a dice elimination game simulator
#[derive(Parser, Debug)]
#[command(name = "knockout")]
#[command(about = "Simulate a game of Knock Out", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with a game configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of players
    #[arg(short, long)]
    players: Option<u32>,

    /// Sides on each die
    #[arg(long)]
    sides: Option<u32>,

    /// Score needed to win
    #[arg(long)]
    winning_score: Option<u32>,

    /// Stop after this many turns
    #[arg(long)]
    max_turns: Option<u64>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

/// Players in a game started without a config file.
const DEFAULT_PLAYERS: u32 = 15;

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config: GameConfig = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => GameConfig::new().with_player_count(DEFAULT_PLAYERS),
        };

        if let Some(players) = self.players {
            config.player_count = players;
        }
        if let Some(sides) = self.sides {
            config.dice_sides = sides;
        }
        if let Some(score) = self.winning_score {
            config.winning_score = score;
        }
        if let Some(turns) = self.max_turns {
            config.max_turns = Some(turns);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;

    let mut builder = GameBuilder::from_config(config);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }

    let mut tracker = TurnCounter::new();
    let mut game = builder.build().context("setting up game")?;
    game.attach_observer(&mut tracker);

    let outcome = game.play()?;
    for player in game.players() {
        info!(
            player = %player.id(),
            knockout_number = player.knockout_number(),
            score = player.score(),
            knocked_out = player.is_knocked_out(),
            "Final standing"
        );
    }
    info!(%outcome, "Game over");

    Ok(())
}
