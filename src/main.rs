//! Lying Wordle - CLI
//!
//! Word game with TUI and line modes where one hint per missed round is a lie.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lying_wordle::{
    commands::{SimulationConfig, run_simple, score_words, simulate_game},
    core::ROUNDS,
    game::GameConfig,
    output::{print_score_result, print_simulation_result},
    wordlists::Dictionary,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Parser)]
#[command(
    name = "lying_wordle",
    about = "Wordle where exactly one hint per missed round is a lie",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for answer choice and lies (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of rounds before the game is lost
    #[arg(short, long, global = true, default_value_t = ROUNDS)]
    rounds: usize,

    /// File of accepted guesses, one word per line (embedded list when omitted)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// File of possible answers, one word per line (embedded list when omitted)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the honest hints for a guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        answer: String,
    },

    /// Play a scripted game and reveal every lie
    Simulate {
        /// The hidden word
        #[arg(long)]
        answer: String,

        /// Guesses in the order they are typed
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(
        cli.quiet,
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    let config = GameConfig::new(cli.rounds, cli.seed);
    config.validate()?;

    let dictionary = Dictionary::load(cli.dictionary.as_deref(), cli.answers.as_deref())
        .context("failed to load word lists")?;
    tracing::info!(
        words = dictionary.len(),
        answers = dictionary.answers().len(),
        "word lists loaded"
    );

    match command {
        Commands::Play => run_play_command(&dictionary, config),
        Commands::Simple => Ok(run_simple(&dictionary, &config)?),
        Commands::Score { guess, answer } => run_score_command(&guess, &answer, &dictionary),
        Commands::Simulate { answer, guesses } => {
            run_simulate_command(answer, guesses, config, &dictionary)
        }
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so without a log file it logs nowhere.
fn init_logging(quiet: bool, verbose: u8, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let log_level = match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (_, 0) => tracing::Level::WARN,
        (_, 1) => tracing::Level::INFO,
        (_, 2) => tracing::Level::DEBUG,
        (_, _) => tracing::Level::TRACE,
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if tui => builder.with_writer(std::io::sink).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn run_score_command(guess: &str, answer: &str, dictionary: &Dictionary) -> Result<()> {
    let result = score_words(guess, answer, dictionary)?;
    print_score_result(&result);
    Ok(())
}

fn run_simulate_command(
    answer: String,
    guesses: Vec<String>,
    config: GameConfig,
    dictionary: &Dictionary,
) -> Result<()> {
    let mut simulation = SimulationConfig::new(answer, guesses);
    simulation.game = config;

    let result = simulate_game(simulation, dictionary)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    use lying_wordle::interactive::{App, run_tui};

    let app = App::new(dictionary, config);
    run_tui(app)
}
