//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line on stdin.

use crate::config::GameConfig;
use crate::dictionary::Dictionary;
use crate::output::formatters::hints_to_glyphs;
use crate::output::{print_alphabet, print_board, print_outcome};
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player asked for at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    NewGame,
    Quit,
}

impl Command {
    /// Interpret a line of input. Commands start with ':' so they never
    /// shadow a dictionary word.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" => Self::NewGame,
            _ => Self::Guess(line.trim().to_string()),
        }
    }
}

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    Decided,
    NewGame,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails or no session can be started
/// with the given configuration.
pub fn run_simple(config: &GameConfig, dictionary: &Dictionary) -> Result<()> {
    let stdin = io::stdin();
    play(config, dictionary, &mut stdin.lock())
}

/// Game loop over any line source
///
/// # Errors
///
/// Returns an error if reading input fails or no session can be started.
pub fn play<R: BufRead>(config: &GameConfig, dictionary: &Dictionary, input: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║              T O R D L E                 ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Hints: {} hit   {} close   {} miss", "$".green(), "!".yellow(), "X".bright_black());
    println!("Commands: ':new' for a new word, ':quit' to exit\n");

    loop {
        let mut session = config.start_session(dictionary)?;
        println!(
            "Guess the {}-letter word. You have {} guesses.",
            session.target_length(),
            session.total_guesses()
        );

        match play_session(&mut session, config, input)? {
            SessionEnd::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SessionEnd::NewGame => {
                println!("\n🔄 New game started!\n");
            }
            SessionEnd::Decided => {
                print_outcome(&session);
                match read_line("Play again? (yes/no)", input)?
                    .map(|answer| answer.to_lowercase())
                    .as_deref()
                {
                    Some("yes" | "y") => println!("\n🔄 New game started!\n"),
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Drive one session until it is decided or the player leaves
fn play_session<R: BufRead>(
    session: &mut Session,
    config: &GameConfig,
    input: &mut R,
) -> Result<SessionEnd> {
    while session.is_active() {
        print_board(session);
        if config.show_alphabet {
            print_alphabet(&session.hint_alphabet());
        }

        let prompt = format!("Guess {}/{}", session.guess_count() + 1, session.total_guesses());
        let Some(line) = read_line(&prompt, input)? else {
            return Ok(SessionEnd::Quit);
        };

        match Command::parse(&line) {
            Command::Guess(guess) => match session.guess(&guess) {
                Ok(hints) => println!("  {}", hints_to_glyphs(&hints)),
                Err(err) => println!("{} {err}", "❌".red()),
            },
            Command::NewGame => return Ok(SessionEnd::NewGame),
            Command::Quit => return Ok(SessionEnd::Quit),
        }
    }

    print_board(session);
    Ok(SessionEnd::Decided)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
