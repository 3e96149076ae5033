//! # Random Dungeon Main Entry Point
//!
//! Parses the command line, sets up logging, and runs the frame loop in a
//! macroquad window.

use clap::Parser;
use log::info;
use macroquad::prelude::*;
use randomdungeon::config::{DEFAULT_SEED, WINDOW_HEIGHT, WINDOW_WIDTH};
use randomdungeon::{DungeonResult, GameConfig, GameState, InputHandler, SceneManager};
use std::path::PathBuf;

/// Command line arguments for the dungeon crawler.
#[derive(Parser, Debug)]
#[command(name = "randomdungeon")]
#[command(about = "A small tile-based dungeon crawler")]
#[command(version)]
struct Args {
    /// Random seed for monster placement and behavior
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// JSON file with gameplay settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Random Dungeon".to_string(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> DungeonResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Random Dungeon v{}", randomdungeon::VERSION);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    if (config.surface_width, config.surface_height) != (WINDOW_WIDTH, WINDOW_HEIGHT) {
        request_new_screen_size(config.surface_width as f32, config.surface_height as f32);
        next_frame().await;
    }
    config.surface_width = screen_width() as u32;
    config.surface_height = screen_height() as u32;

    info!(
        "Render surface {}x{}, seed {}",
        config.surface_width, config.surface_height, args.seed
    );
    let game_state = GameState::new(config, args.seed)?;
    let mut scenes = SceneManager::new(game_state, InputHandler::new());
    scenes.run().await?;

    info!("Game loop ended");
    Ok(())
}

/// Initializes env_logger, letting `RUST_LOG` override the command line level.
fn initialize_logging(log_level: &str) {
    let level = log_level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}
