//! Othello AI engine
//!
//! Play against the AI in a window, or measure it against a random player
//! from the command line.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use othello::config::EngineConfig;
use othello::eval::EvaluatorKind;
use othello::players::RandomPlayer;
use othello::simulate::run_series;
use othello::ui::OthelloApp;
use othello::AIEngine;

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Othello with an alpha-beta AI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    engine: EngineArgs,

    /// Log every search decision
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Engine settings; flags override values from the config file
#[derive(Args, Debug, Clone)]
struct EngineArgs {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(short, long, global = true)]
    depth: Option<u8>,

    /// Threads for the root search
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Evaluation function
    #[arg(long, global = true, value_enum)]
    evaluator: Option<EvaluatorKind>,

    /// Seconds to wait before the AI replies in the GUI
    #[arg(long, global = true)]
    countdown: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the AI in a window (default)
    Play,
    /// Pit the AI (Black) against a random player (White)
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Seed for the random player
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl EngineArgs {
    fn resolve(&self) -> othello::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_toml_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(evaluator) = self.evaluator {
            config.evaluator = evaluator;
        }
        if let Some(countdown) = self.countdown {
            config.countdown_secs = countdown;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.engine.resolve()?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(config)?,
        Command::Simulate { games, seed } => simulate(config, games, seed),
    }
    Ok(())
}

fn play(config: EngineConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, config)))),
    )
}

fn simulate(config: EngineConfig, games: usize, seed: Option<u64>) {
    let mut ai = AIEngine::with_config(config);
    let mut opponent = match seed {
        Some(seed) => RandomPlayer::with_seed(seed),
        None => RandomPlayer::new(),
    };

    let summary = run_series(&mut ai, &mut opponent, games);
    for game in &summary.games {
        println!("{game}");
    }
    println!(
        "AI wins: {}, random wins: {}, draws: {}",
        summary.ai_wins, summary.opponent_wins, summary.draws
    );
    println!("Win rate: {:.2}", summary.win_rate());
}
