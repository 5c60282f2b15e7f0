//! TUI rendering with ratatui
//!
//! Title, message line, guess grid, pending guess and the hint alphabet,
//! stacked vertically and centered.

use super::app::{App, MessageStyle};
use crate::core::HintCategory;
use crate::output::display::ALPHABET_ROW_WIDTH;
use crate::session::SessionStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let alphabet_height = if app.config.show_alphabet { 4 } else { 0 };
    let grid_height = u16::try_from(app.session.total_guesses())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Title
            Constraint::Length(3),               // Message
            Constraint::Length(grid_height),     // Guess grid
            Constraint::Length(3),               // Pending guess
            Constraint::Length(alphabet_height), // Alphabet
            Constraint::Min(0),                  // Spacer
            Constraint::Length(1),               // Status bar
        ])
        .split(f.area());

    render_title(f, app, chunks[0]);
    render_message(f, app, chunks[1]);
    render_guess_grid(f, app, chunks[2]);
    render_pending_guess(f, app, chunks[3]);
    if app.config.show_alphabet {
        render_alphabet(f, app, chunks[4]);
    }
    render_status(f, app, chunks[6]);
}

/// Style for a letter cell given its hint
#[must_use]
pub fn hint_style(hint: Option<HintCategory>) -> Style {
    match hint {
        None => Style::default().add_modifier(Modifier::BOLD),
        Some(HintCategory::Hit) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(HintCategory::Close) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(HintCategory::Miss) => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn letter_cell(letter: char, hint: Option<HintCategory>) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {letter} "), hint_style(hint)),
        Span::raw(" "),
    ]
}

fn centered_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.session.status() {
        SessionStatus::Victory => Color::Green,
        SessionStatus::Defeat | SessionStatus::Error => Color::Red,
        SessionStatus::Active => Color::Cyan,
    };

    let title = Paragraph::new(app.title())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(title, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.message {
        Some(message) => {
            let color = match message.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Error => Color::Red,
            };
            (message.text.as_str(), Style::default().fg(color))
        }
        None => ("", Style::default()),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(paragraph, area);
}

fn render_guess_grid(f: &mut Frame, app: &App, area: Rect) {
    let width = app.session.target_length();

    let mut lines: Vec<Line> = app
        .session
        .turns()
        .map(|(guess, hints)| {
            let spans: Vec<Span> = guess
                .chars()
                .zip(hints)
                .flat_map(|(letter, &hint)| letter_cell(letter, Some(hint)))
                .collect();
            Line::from(spans)
        })
        .collect();

    // Rows past the panel height are never visible
    let blank_rows = app.session.remaining_guesses().min(usize::from(area.height));
    for _ in 0..blank_rows {
        let spans: Vec<Span> = (0..width)
            .flat_map(|_| letter_cell('·', None))
            .collect();
        lines.push(Line::from(spans).style(Style::default().fg(Color::DarkGray)));
    }

    let grid = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(centered_block(" Guesses "));
    f.render_widget(grid, area);
}

fn render_pending_guess(f: &mut Frame, app: &App, area: Rect) {
    let width = app.session.target_length();
    let typed = app.pending_guess.chars().chain(std::iter::repeat(' '));

    let spans: Vec<Span> = typed
        .take(width)
        .flat_map(|letter| {
            [
                Span::styled(
                    format!("[{letter}]"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect();

    let pending = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(centered_block(" Guess "));
    f.render_widget(pending, area);
}

fn render_alphabet(f: &mut Frame, app: &App, area: Rect) {
    let alphabet = app.session.hint_alphabet();
    let letters: Vec<_> = alphabet.iter().collect();

    let lines: Vec<Line> = letters
        .chunks(ALPHABET_ROW_WIDTH)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&(letter, hint)| letter_cell(letter, hint))
                .collect();
            Line::from(spans)
        })
        .collect();

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(centered_block(" Alphabet "));
    f.render_widget(panel, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let remaining = Paragraph::new(format!(
        "Guesses left: {}/{}",
        app.session.remaining_guesses(),
        app.session.total_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.is_active() {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    } else {
        "n: New Word | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::dictionary::Dictionary;
    use crate::session::Session;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_title_guesses_and_alphabet() {
        let words = Dictionary::new(["CRANE", "SLATE"]);
        let mut session = Session::new("CRANE", 6, &words).unwrap();
        session.guess("slate").unwrap();
        let app = App::with_session(session, GameConfig::default());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Tordle!"));
        assert!(text.contains(" S "));
        assert!(text.contains("Alphabet"));
        assert!(text.contains("Guesses left: 5/6"));
    }

    #[test]
    fn hides_alphabet_when_disabled() {
        let words = Dictionary::new(["CRANE"]);
        let session = Session::new("CRANE", 6, &words).unwrap();
        let config = GameConfig {
            show_alphabet: false,
            ..GameConfig::default()
        };
        let app = App::with_session(session, config);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(!buffer_text(&terminal).contains("Alphabet"));
    }

    #[test]
    fn renders_with_more_guesses_than_rows() {
        let words = Dictionary::new(["ABC"]);
        for total_guesses in [65_535, 70_000, usize::MAX] {
            let session = Session::new("ABC", total_guesses, &words).unwrap();
            let app = App::with_session(session, GameConfig::default());

            let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
            terminal.draw(|f| ui(f, &app)).unwrap();

            assert!(buffer_text(&terminal).contains("Tordle!"));
        }
    }

    #[test]
    fn hint_styles_differ() {
        let styles: Vec<Style> = HintCategory::ALL
            .iter()
            .map(|&hint| hint_style(Some(hint)))
            .collect();
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert_eq!(hint_style(Some(HintCategory::Hit)).bg, Some(Color::Green));
    }
}
