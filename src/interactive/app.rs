//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::validate_char;
use crate::dictionary::Dictionary;
use crate::session::{Session, SessionStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GameConfig,
    pub session: Session<'a>,
    pub pending_guess: String,
    pub message: Option<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Start the app with a freshly drawn target
    ///
    /// # Errors
    ///
    /// Returns an error if no session can be started with `config`.
    pub fn new(dictionary: &'a Dictionary, config: GameConfig) -> Result<Self> {
        let session = config.start_session(dictionary)?;
        Ok(Self::with_session(session, config))
    }

    /// Start the app on an existing session
    #[must_use]
    pub fn with_session(session: Session<'a>, config: GameConfig) -> Self {
        Self {
            dictionary: session.dictionary(),
            config,
            session,
            pending_guess: String::new(),
            message: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Title text for the current status
    #[must_use]
    pub fn title(&self) -> String {
        match self.session.status() {
            SessionStatus::Victory => "Victory!".to_string(),
            SessionStatus::Defeat => format!("It was '{}'", self.session.target()),
            SessionStatus::Active | SessionStatus::Error => "Tordle!".to_string(),
        }
    }

    /// Append a typed letter to the pending guess
    ///
    /// Ignored once the guess is as long as the target.
    pub fn add_letter(&mut self, letter: char) {
        if self.pending_guess.chars().count() >= self.session.target_length() {
            return;
        }

        match validate_char(&letter.to_string()) {
            Ok(letter) => self.pending_guess.push(letter),
            Err(err) => self.set_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn remove_letter(&mut self) {
        self.pending_guess.pop();
    }

    /// Submit the pending guess to the session
    ///
    /// A rejected guess stays in the input so it can be corrected.
    pub fn submit_guess(&mut self) {
        match self.session.guess(&self.pending_guess) {
            Ok(_) => {
                self.pending_guess.clear();
                if self.session.status().is_finished() {
                    self.record_result();
                }
            }
            Err(err) => self.set_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn record_result(&mut self) {
        self.stats.total_games += 1;
        if self.session.status() == SessionStatus::Victory {
            self.stats.games_won += 1;
        }
        tracing::info!(
            status = %self.session.status(),
            guesses = self.session.guess_count(),
            "game finished"
        );
        self.set_message("Press Esc to exit or 'n' for a new word.", MessageStyle::Info);
    }

    /// Replace the session with a new one drawn from the same dictionary
    pub fn new_game(&mut self) {
        match self.config.start_session(self.dictionary) {
            Ok(session) => {
                self.session = session;
                self.pending_guess.clear();
                self.message = None;
            }
            Err(err) => self.set_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn set_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Some(Message {
            text: text.to_string(),
            style,
        });
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (avoids double input on Windows)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if !self.session.is_active() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        self.message = None;
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Backspace | KeyCode::Delete => self.remove_letter(),
            KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.remove_letter();
            }
            KeyCode::Char(c) => self.add_letter(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HintCategory;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn config(length: usize, guesses: usize) -> GameConfig {
        GameConfig {
            target_length: length,
            total_guesses: guesses,
            show_alphabet: true,
        }
    }

    #[test]
    fn typing_builds_uppercase_guess_capped_at_length() {
        let words = Dictionary::new(["ABC"]);
        let mut app = App::new(&words, config(3, 6)).unwrap();

        type_word(&mut app, "abcd");
        assert_eq!(app.pending_guess, "ABC");

        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.pending_guess, "AB");
        app.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL));
        assert_eq!(app.pending_guess, "A");
    }

    #[test]
    fn invalid_letter_shows_error() {
        let words = Dictionary::new(["ABC"]);
        let mut app = App::new(&words, config(3, 6)).unwrap();

        app.handle_key(press(KeyCode::Char('1')));

        assert!(app.pending_guess.is_empty());
        let message = app.message.clone().unwrap();
        assert_eq!(message.style, MessageStyle::Error);
        assert!(message.text.contains("not a valid letter"));

        // The next key clears the message
        app.handle_key(press(KeyCode::Char('a')));
        assert!(app.message.is_none());
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let words = Dictionary::new(["ABC", "XYZ"]);
        let session = Session::new("ABC", 6, &words).unwrap();
        let mut app = App::with_session(session, config(3, 6));

        type_word(&mut app, "ab");
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.pending_guess, "AB");
        assert!(app.message.is_some());
        assert_eq!(app.session.guess_count(), 0);
    }

    #[test]
    fn winning_updates_title_and_stats() {
        let words = Dictionary::new(["ABC"]);
        let mut app = App::new(&words, config(3, 6)).unwrap();

        type_word(&mut app, "abc");
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.session.status(), SessionStatus::Victory);
        assert_eq!(app.session.hint_history()[0], vec![HintCategory::Hit; 3]);
        assert_eq!(app.title(), "Victory!");
        assert!(app.pending_guess.is_empty());
        assert_eq!(app.stats.games_won, 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn losing_reveals_target() {
        let words = Dictionary::new(["ABC", "XYZ"]);
        let session = Session::new("ABC", 1, &words).unwrap();
        let mut app = App::with_session(session, config(3, 1));

        type_word(&mut app, "xyz");
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.session.status(), SessionStatus::Defeat);
        assert_eq!(app.title(), "It was 'ABC'");
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn finished_game_ignores_letters_and_starts_over() {
        let words = Dictionary::new(["ABC"]);
        let mut app = App::new(&words, config(3, 6)).unwrap();
        type_word(&mut app, "abc");
        app.handle_key(press(KeyCode::Enter));

        app.handle_key(press(KeyCode::Char('x')));
        assert!(app.pending_guess.is_empty());
        assert!(!app.should_quit);

        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.session.status(), SessionStatus::Active);
        assert_eq!(app.session.guess_count(), 0);
        assert_eq!(app.title(), "Tordle!");
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let words = Dictionary::new(["ABC"]);
        let mut app = App::new(&words, config(3, 6)).unwrap();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = App::new(&words, config(3, 6)).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.pending_guess.is_empty());
    }
}
