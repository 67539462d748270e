//! Phirldle - CLI
//!
//! Word guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phirldle::{
    commands::run_simple,
    game::{GameConfig, Session},
    wordlists::loader::load_from_file,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "phirldle",
    about = "Guess the words before your lives run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line, played in order (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Life tokens at the start of a session
    #[arg(long, global = true, default_value_t = phirldle::game::config::DEFAULT_LIVES)]
    lives: usize,

    /// Attempts allowed per word
    #[arg(long, global = true, default_value_t = phirldle::game::config::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Pause between a round outcome and the next word, in milliseconds
    #[arg(long, global = true, default_value_t = 3000)]
    delay_ms: u64,

    /// Seed for reproducible flavor text and life loss
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words, no TUI)
    Simple,
}

/// Build the game configuration from the command line
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            GameConfig::new(words)?
        }
        None => GameConfig::default(),
    };

    let config = config
        .with_lives(cli.lives)
        .with_max_attempts(cli.max_attempts)
        .with_round_delay(Duration::from_millis(cli.delay_ms));
    config.validate()?;
    Ok(config)
}

/// Initialize logging
///
/// Logs go to `log_file` when given. Without one, only line mode logs (to
/// stderr); the TUI owns the terminal and stays silent.
fn init_logging(log_file: Option<&PathBuf>, level: &str, tui: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("phirldle={level}")));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .init();
        }
        None if !tui => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        None => {}
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    let tui = matches!(command, Commands::Play);

    init_logging(cli.log_file.as_ref(), &cli.log_level, tui)?;

    let config = load_config(&cli)?;
    let rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    info!(
        words = config.words().len(),
        lives = config.lives,
        max_attempts = config.max_attempts,
        seeded = cli.seed.is_some(),
        "starting session"
    );
    let mut session = Session::new(config, rng)?;

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple(&mut session).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(session: Session) -> Result<()> {
    use phirldle::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
