//! TUI application state and logic
//!
//! Trainer mode: the app picks a secret, the player types guesses, and the
//! engine tracks the candidate set so the player can see what an optimal
//! solver would know.

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::prelude::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use crate::core::{Pattern, Word};
use crate::engine::entropy::guess_metrics;
use crate::engine::{Engine, EngineError, GameSession, SessionState};

/// Application state
pub struct App<'a> {
    pub engine: &'a Engine,
    pub session: GameSession<'a>,
    pub secret: &'a Word,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub hint: Option<HintInfo>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub max_attempts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solver suggestion shown when the player asks for help
#[derive(Debug, Clone)]
pub struct HintInfo {
    pub word: String,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            // One bucket per possible winning attempt count (index 0 unused)
            guess_distribution: vec![0; max_attempts + 1],
        }
    }
}

impl<'a> App<'a> {
    /// Start a trainer session with a random secret
    ///
    /// # Errors
    /// Fails only if a session cannot be opened on the engine.
    pub fn new(engine: &'a Engine, max_attempts: usize) -> Result<Self, EngineError> {
        let secret = pick_secret(engine);
        let session = engine
            .new_game(Some(secret.text()))?
            .with_max_attempts(max_attempts);

        Ok(Self {
            engine,
            session,
            secret,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Type a five-letter guess and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB shows what the solver would play.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            hint: None,
            stats: Statistics::new(max_attempts),
            should_quit: false,
            input_mode: InputMode::Guessing,
            max_attempts,
        })
    }

    pub fn submit_guess(&mut self) {
        let typed = self.input_buffer.clone();

        let Ok(guess) = Word::new(&typed) else {
            self.add_message("Guess must be exactly 5 letters!", MessageStyle::Error);
            return;
        };
        if !self.engine.contains(guess.text()) {
            self.add_message(
                &format!("'{}' is not in the word list!", guess.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let candidates_before = self.session.candidates_remaining();
        let pattern = Pattern::evaluate(self.secret, &guess);

        if self.session.apply_feedback(&guess, pattern).is_err() {
            return;
        }

        self.history.push(HistoryEntry {
            guess: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after: self.session.candidates_remaining(),
        });
        self.input_buffer.clear();
        self.hint = None;

        match self.session.state() {
            SessionState::Solved => self.finish_won(),
            SessionState::Exhausted => self.finish_lost(),
            _ => {
                self.add_message(
                    &format!(
                        "{} candidates remain after that guess",
                        self.session.candidates_remaining()
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    fn finish_won(&mut self) {
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        let attempts = self.history.len();
        if let Some(bucket) = self.stats.guess_distribution.get_mut(attempts) {
            *bucket += 1;
        }

        let celebration = match attempts {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            _ => "😅 PHEW! Got it just in time! 😅",
        };

        self.input_mode = InputMode::GameOver;
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn finish_lost(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        self.add_message(
            &format!(
                "😔 Out of guesses! The word was {}.",
                self.secret.text().to_uppercase()
            ),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Ask the solver for its pick over the current candidate set
    pub fn show_hint(&mut self) {
        if let Some(suggestion) = self.session.next_guess() {
            let metrics = guess_metrics(suggestion, self.session.candidates());
            self.hint = Some(HintInfo {
                word: suggestion.text().to_string(),
                entropy: metrics.entropy,
                expected_remaining: metrics.expected_remaining,
                max_partition: metrics.max_partition,
            });
        } else {
            self.add_message("No suggestion available!", MessageStyle::Error);
        }
    }

    pub fn new_game(&mut self) {
        self.secret = pick_secret(self.engine);
        // Vocabulary members always open a session
        if let Ok(session) = self.engine.new_game(Some(self.secret.text())) {
            self.session = session.with_max_attempts(self.max_attempts);
        }
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.hint = None;
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! I'm thinking of a word.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        self.session.candidates_remaining()
    }
}

fn pick_secret(engine: &Engine) -> &Word {
    let vocabulary = engine.vocabulary();
    vocabulary
        .choose(&mut rand::rng())
        .unwrap_or(&vocabulary[0])
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.show_hint();
                    }
                    KeyCode::Char(c) => {
                        if app.input_buffer.len() < 5 && c.is_ascii_alphabetic() {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
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

    fn engine(texts: &[&str]) -> Engine {
        let words = texts.iter().map(|t| Word::new(*t).unwrap()).collect();
        Engine::new(words).unwrap()
    }

    #[test]
    fn distribution_sized_from_attempt_budget() {
        let engine = engine(&["crane", "slate"]);
        let app = App::new(&engine, 9).unwrap();

        assert_eq!(app.stats.guess_distribution.len(), 10);
    }

    #[test]
    fn late_win_lands_in_the_distribution() {
        let engine = engine(&[
            "crane", "slate", "brake", "grape", "pride", "frost", "mound", "chirp",
        ]);
        let mut app = App::new(&engine, 8).unwrap();

        let secret = app.secret.text().to_string();
        let wrong: Vec<String> = engine
            .vocabulary()
            .iter()
            .map(|w| w.text().to_string())
            .filter(|w| *w != secret)
            .take(6)
            .collect();

        for word in wrong {
            app.input_buffer = word;
            app.submit_guess();
        }
        app.input_buffer = secret;
        app.submit_guess();

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[7], 1);
        assert_eq!(app.input_mode, InputMode::GameOver);
    }
}
