//! Wordle-style puzzle - CLI
//!
//! Play in a terminal UI or a plain line mode, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use wordle_puzzle::{
    commands::{run_simple, score_words},
    config::{GameConfig, WordlistSource},
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_puzzle",
    about = "Guess the hidden word: terminal Wordle with hard mode and keyboard hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hard mode: revealed hints must be used in later guesses
    #[arg(long, global = true)]
    hard: bool,

    /// Wordlist: 'embedded' (default), 'answers', or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: WordlistSource,

    /// Seed for picking secrets (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play against a fixed secret instead of a random one
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Write logs to this file instead of stderr (RUST_LOG sets the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a secret and show the feedback
    Score {
        /// The hidden word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            wordlist: self.wordlist.clone(),
            hard_mode: self.hard,
            seed: self.seed,
            secret: self.secret.clone(),
        }
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the default `warn` filter.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = cli.game_config();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
    }
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_words(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let words = config.wordlist.load()?;
    run_simple(&words, config)
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_puzzle::interactive::{App, run_tui};

    let words = config.wordlist.load()?;
    let app = App::new(&words, config.clone())?;
    run_tui(app)
}
