mod assets;
mod headless;
mod input;
mod tui;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use cannonbattle::{Game, GameConfig, SimulationLoop};
use clap::Parser;

use assets::DiskAssets;

#[derive(Parser)]
#[command(name = "cannonbattle")]
#[command(about = "Artillery duel in the terminal")]
struct Args {
    #[arg(long, help = "Path to the target sprite image")]
    sprite: Option<PathBuf>,

    #[arg(short, long, default_value_t = cannonbattle::DEFAULT_TICK_RATE)]
    tick_rate: u32,

    #[arg(long, help = "Seed for target placement")]
    seed: Option<u64>,

    #[arg(long, help = "Run without the terminal UI, logging to stderr")]
    headless: bool,

    #[arg(long, default_value_t = 600, help = "Ticks to simulate in headless mode")]
    ticks: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mut config = GameConfig::default();
    config.target.sprite_path = args.sprite.unwrap_or_else(default_sprite);
    if let Some(seed) = args.seed {
        config.target.seed = seed;
    }

    let sprite_path = config.target.sprite_path.clone();
    let game = Game::new(config, &DiskAssets, Instant::now())
        .with_context(|| format!("failed to start game with sprite {}", sprite_path.display()))?;
    let atlas = assets::init_atlas(game.config(), game.target_sprite());

    let mut sim = SimulationLoop::new(game, args.tick_rate);

    if args.headless {
        log::info!("Running {} ticks at {} Hz", args.ticks, args.tick_rate);
        headless::run(&mut sim, args.ticks)?;
        log::info!("Headless run complete");
    } else {
        tui::run(&mut sim, atlas)?;
    }

    Ok(())
}

fn default_sprite() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/enemy.png")
}
