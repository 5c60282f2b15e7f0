//! Tordle - CLI
//!
//! Word-guessing game with a TUI (default) and a line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tordle::{
    commands::run_simple,
    config::{DEFAULT_TARGET_LENGTH, DEFAULT_TOTAL_GUESSES, GameConfig},
    dictionary::Dictionary,
    logging::{self, LogConfig},
    output::print_corpus_summary,
};

#[derive(Parser)]
#[command(
    name = "tordle",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The number of letters in the target word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_TARGET_LENGTH)]
    target_length: usize,

    /// The number of guesses you have to find the word
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_TOTAL_GUESSES)]
    total_guesses: usize,

    /// Hide the hint alphabet while guessing
    #[arg(long, global = true)]
    no_alphabet: bool,

    /// Word list file (one word per line) instead of the built-in corpus
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Log debug events
    #[arg(short = 'd', long, global = true)]
    debug: bool,

    /// Write logs to this file (required for logging in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple line-based game without the TUI
    Simple,

    /// Show how many words are available for each length
    Words,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            target_length: self.target_length,
            total_guesses: self.total_guesses,
            show_alphabet: !self.no_alphabet,
        }
    }

    fn log_config(&self, full_screen: bool) -> LogConfig {
        LogConfig {
            debug: self.debug,
            file: self.log_file.clone(),
            require_file: full_screen,
        }
    }
}

/// Load the dictionary from `--words` or the embedded corpus
fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => Dictionary::from_file(path)
            .with_context(|| format!("cannot read word list {}", path.display())),
        None => Ok(Dictionary::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    logging::init(&cli.log_config(matches!(command, Commands::Play)))?;

    let dictionary = load_dictionary(cli.words.as_ref())?;
    let config = cli.game_config();

    match command {
        Commands::Play => run_play_command(&dictionary, config),
        Commands::Simple => run_simple(&config, &dictionary),
        Commands::Words => {
            print_corpus_summary(&dictionary);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    use tordle::interactive::{App, run_tui};

    let app = App::new(dictionary, config)?;
    run_tui(app)
}
