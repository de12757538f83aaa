mod app;
mod config;
mod confetti;

use clap::Parser;
use eframe::egui;
use engine::game::{Difficulty, GameState, SessionRng};
use engine::log;
use engine::logger::init_logger;

use app::GameApp;
use config::{ClientConfig, default_config_path, load_config};

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a bot")]
struct Args {
    /// Difficulty tier (easy, medium, hard); overrides the config file
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(Some("client".to_string()));

    let config_path = args.config.unwrap_or_else(default_config_path);
    let mut config: ClientConfig = load_config(&config_path)?;
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting session: difficulty {}, seed {}",
        config.difficulty,
        rng.seed()
    );

    let game = GameState::new(config.human_mark)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(config, config_path, game, rng)))),
    )?;

    Ok(())
}
