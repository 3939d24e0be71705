//! Headless platformer driver.
//!
//! Loads a level file, replays a fixed input script for a number of ticks
//! and prints where the session ended up.
//!
//! Usage:
//!   platformer Map.txt --ticks 300 --right --jump-every 40
//!   RUST_LOG=info platformer Map.txt --config tuning.json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use platformer_engine::{Command, GameConfig, InputEvent};
use platformer_runner::{FileLevel, GameRunner};

#[derive(Parser)]
#[command(name = "platformer")]
#[command(about = "Run a platformer level headlessly")]
struct Cli {
    /// Level descriptor file
    level: PathBuf,

    /// JSON file overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of fixed ticks to simulate
    #[arg(long, default_value_t = 500)]
    ticks: u32,

    /// Hold left for the whole run
    #[arg(long)]
    left: bool,

    /// Hold right for the whole run
    #[arg(long)]
    right: bool,

    /// Press jump every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    jump_every: u32,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    GameConfig::from_json(&json).with_context(|| format!("Invalid config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    let tick_ms = config.tick_ms;
    let mut runner = GameRunner::new(FileLevel::new(&cli.level), config);
    runner
        .start()
        .with_context(|| format!("Failed to start level {}", cli.level.display()))?;

    for tick in 0..cli.ticks {
        // Re-sent every tick so held directions survive a restart
        if cli.left {
            runner.push_input(InputEvent::press(Command::MoveLeft));
        }
        if cli.right {
            runner.push_input(InputEvent::press(Command::MoveRight));
        }
        if cli.jump_every > 0 && tick % cli.jump_every == 0 {
            runner.push_input(InputEvent::press(Command::Jump));
            runner.push_input(InputEvent::release(Command::Jump));
        }
        runner.tick(tick_ms);
        if runner.is_game_over() {
            break;
        }
    }

    let sim = runner.simulation();
    println!("lives: {}", runner.lives());
    println!("score: {}", sim.score());
    match sim.avatar() {
        Some(avatar) => println!("avatar: ({}, {})", avatar.pos().x, avatar.pos().y),
        None => println!("avatar: none"),
    }
    match runner.session().outcome() {
        Some(outcome) => println!("{}", outcome.message()),
        None => println!("still playing"),
    }
    Ok(())
}
