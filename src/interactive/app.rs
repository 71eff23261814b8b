//! TUI application state and logic

use crate::config::GameConfig;
use crate::puzzle::{Command, Event as PuzzleEvent, Puzzle, PuzzleError};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub config: GameConfig,
    pub puzzle: Puzzle<'a, WordList>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across every game of the session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by attempts used; index 0 is a first-guess win
    pub guess_distribution: Vec<usize>,
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    pub fn record_win(&mut self, attempts: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);

        let index = attempts.saturating_sub(1);
        if self.guess_distribution.len() <= index {
            self.guess_distribution.resize(index + 1, 0);
        }
        self.guess_distribution[index] += 1;
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won, 0 before any game finishes
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
    /// Create the app and start its first puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot produce a puzzle.
    pub fn new(words: &'a WordList, config: GameConfig) -> Result<Self> {
        let mut rng = config.rng();
        let puzzle = config.new_puzzle(words, &mut rng)?;

        let mut app = Self {
            words,
            config,
            puzzle,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries.",
                app.puzzle.word_length(),
                app.puzzle.state().max_attempts()
            ),
            MessageStyle::Info,
        );
        app.add_message("TAB toggles hard mode before the first guess.", MessageStyle::Info);
        Ok(app)
    }

    /// Abandon the current puzzle and start another
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot produce a puzzle.
    pub fn new_game(&mut self) -> Result<()> {
        self.puzzle = self.config.new_puzzle(self.words, &mut self.rng)?;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        debug!(hard_mode = self.puzzle.hard_mode(), "new game");
        Ok(())
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error only if starting a new game fails.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('n') if ctrl => return self.new_game(),
            KeyCode::Esc => {
                self.should_quit = true;
                return Ok(());
            }
            _ => {}
        }

        if self.puzzle.is_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            }
            return Ok(());
        }

        let command = match key.code {
            KeyCode::Tab => Command::ToggleHardMode,
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl => Command::Type(c),
            KeyCode::Backspace => Command::Backspace,
            KeyCode::Enter => Command::Submit,
            _ => return Ok(()),
        };

        // Any fresh input dismisses the last rejection
        if self.puzzle.message().is_some() {
            self.send(Command::ClearMessage);
        }
        self.send(command);
        self.process_events();
        Ok(())
    }

    fn send(&mut self, command: Command) {
        match self.puzzle.apply(command) {
            Ok(()) => {
                if command == Command::ToggleHardMode {
                    self.config.hard_mode = self.puzzle.hard_mode();
                    let text = if self.puzzle.hard_mode() {
                        "Hard mode on: revealed hints must be used."
                    } else {
                        "Hard mode off."
                    };
                    self.add_message(text, MessageStyle::Info);
                }
            }
            // Reported through the event queue
            Err(e) if e.is_rejected_guess() => {}
            Err(PuzzleError::InvalidOperation(misuse)) => {
                self.add_message(&capitalize(&misuse.to_string()), MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn process_events(&mut self) {
        for event in self.puzzle.drain_events() {
            match event {
                PuzzleEvent::InvalidSubmission(text) => self.add_message(&text, MessageStyle::Error),
                PuzzleEvent::AttemptScored { .. } => {}
                PuzzleEvent::Victory { attempts } => {
                    self.stats.record_win(attempts);
                    let celebration = match attempts {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                PuzzleEvent::RevealSecret(secret) => {
                    self.stats.record_loss();
                    self.add_message(&format!("The word was {secret}"), MessageStyle::Error);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
            }
        }
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
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
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
            app.handle_key(key)?;
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
    use crate::puzzle::Status;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> WordList {
        WordList::from_answers(words_from_slice(&["crane", "slate", "north", "snare"])).unwrap()
    }

    fn config() -> GameConfig {
        GameConfig {
            secret: Some("crane".to_string()),
            seed: Some(7),
            ..GameConfig::default()
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, ch: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn enter_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_fills_current_attempt() {
        let words = words();
        let mut app = App::new(&words, config()).unwrap();

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.puzzle.current_attempt().text(), "SL___");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.puzzle.current_attempt().text(), "S____");
    }

    #[test]
    fn rejected_guess_shows_message() {
        let words = words();
        let mut app = App::new(&words, config()).unwrap();

        enter_word(&mut app, "sla");
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Not enough letters");
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.puzzle.message(), Some("Not enough letters"));

        // Next key dismisses the transient message
        press(&mut app, KeyCode::Char('t'));
        assert!(app.puzzle.message().is_none());
    }

    #[test]
    fn win_updates_statistics() {
        let words = words();
        let mut app = App::new(&words, config()).unwrap();

        enter_word(&mut app, "slate");
        enter_word(&mut app, "crane");

        assert_eq!(app.puzzle.status(), Status::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution, vec![0, 1]);
        assert_eq!(app.stats.current_streak, 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn loss_reveals_secret_and_resets_streak() {
        let words = words();
        let mut app = App::new(&words, config()).unwrap();
        app.stats.current_streak = 3;

        for _ in 0..6 {
            enter_word(&mut app, "slate");
        }

        assert_eq!(app.puzzle.status(), Status::Lost);
        assert!(app.messages.iter().any(|m| m.text == "The word was CRANE"));
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.stats.current_streak, 0);
    }

    #[test]
    fn game_over_keys() {
        let words = words();
        let mut app = App::new(&words, config()).unwrap();
        enter_word(&mut app, "crane");

        // Letters are ignored once the puzzle is over
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.puzzle.status(), Status::InProgress);
        assert_eq!(app.puzzle.submitted_count(), 0);

        enter_word(&mut app, "crane");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn hard_mode_toggle_and_lock() {
        let words = words();
        let mut app = App::new(&words, config()).unwrap();

        press(&mut app, KeyCode::Tab);
        assert!(app.puzzle.hard_mode());
        assert!(app.config.hard_mode);

        enter_word(&mut app, "slate");
        press(&mut app, KeyCode::Tab);
        assert!(app.puzzle.hard_mode());
        let last = app.messages.last().unwrap();
        assert_eq!(
            last.text,
            "Hard mode can only be changed before the first guess"
        );

        // New games keep the chosen mode
        ctrl(&mut app, 'n');
        assert!(app.puzzle.hard_mode());
    }

    #[test]
    fn ctrl_h_is_not_a_toggle() {
        let words = words();
        let mut app = App::new(&words, config()).unwrap();

        // Terminals often report Ctrl-H as Backspace; TAB is the only toggle
        press(&mut app, KeyCode::Char('s'));
        ctrl(&mut app, 'h');
        press(&mut app, KeyCode::Backspace);
        assert!(!app.puzzle.hard_mode());
        assert_eq!(app.puzzle.current_attempt().text(), "_____");
    }

    #[test]
    fn quit_keys() {
        let words = words();
        let mut app = App::new(&words, config()).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "q is a letter while playing");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&words, config()).unwrap();
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let words = words();
        let mut app = App::new(&words, config()).unwrap();
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
