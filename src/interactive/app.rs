//! TUI application state and logic

use crate::game::{Input, InputOutcome, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long to wait for a key before checking scheduled rounds again
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Game(Input),
    Restart,
    Quit,
}

/// Translate a key press into a command
///
/// On the game-over screen only restart and quit are meaningful.
#[must_use]
pub fn map_key(key: KeyEvent, game_over: bool) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter | KeyCode::Char('r' | 'R') if game_over => Some(Command::Restart),
        _ if game_over => None,
        KeyCode::Enter => Some(Command::Game(Input::Submit)),
        KeyCode::Backspace => Some(Command::Game(Input::Delete)),
        KeyCode::Char(c) => Input::letter(c).map(Command::Game),
        _ => None,
    }
}

/// Application state
pub struct App<R = StdRng> {
    pub session: Session<R>,
    pub should_quit: bool,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub const fn new(session: Session<R>) -> Self {
        Self {
            session,
            should_quit: false,
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(command) = map_key(key, self.session.is_game_over()) else {
            return;
        };

        match command {
            Command::Quit => self.should_quit = true,
            Command::Restart => self.session.restart(),
            Command::Game(input) => {
                let outcome = self.session.handle_input(input);
                if outcome != InputOutcome::Edited && outcome != InputOutcome::Ignored {
                    debug!(?outcome, "key submitted");
                }
            }
        }
    }

    /// Fire any round transition that has come due
    pub fn on_tick(&mut self, now: Instant) {
        self.session.on_tick(now);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::game::GameConfig;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(words: &[&str], lives: usize) -> App {
        let words = words.iter().map(|w| SecretWord::new(*w).unwrap()).collect();
        let config = GameConfig::new(words).unwrap().with_lives(lives);
        App::new(Session::new(config, StdRng::seed_from_u64(8)).unwrap())
    }

    #[test]
    fn map_key_while_playing() {
        assert_eq!(
            map_key(key(KeyCode::Char('f')), false),
            Some(Command::Game(Input::Letter('F')))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), false),
            Some(Command::Game(Input::Submit))
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), false),
            Some(Command::Game(Input::Delete))
        );
        assert_eq!(map_key(key(KeyCode::Char('1')), false), None);
        assert_eq!(map_key(key(KeyCode::Tab), false), None);
        assert_eq!(map_key(key(KeyCode::Esc), false), Some(Command::Quit));
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                false
            ),
            Some(Command::Quit)
        );
    }

    #[test]
    fn map_key_on_game_over_screen() {
        assert_eq!(map_key(key(KeyCode::Enter), true), Some(Command::Restart));
        assert_eq!(map_key(key(KeyCode::Char('r')), true), Some(Command::Restart));
        assert_eq!(map_key(key(KeyCode::Char('f')), true), None);
        assert_eq!(map_key(key(KeyCode::Esc), true), Some(Command::Quit));
    }

    #[test]
    fn typing_a_word_wins_the_round() {
        let mut app = app(&["fall", "town"], 15);
        for c in "fall".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.session.played_words().len(), 1);
        let due = app.session.pending_round().unwrap().due();
        app.on_tick(due);
        assert_eq!(app.session.secret().unwrap().text(), "TOWN");
    }

    #[test]
    fn enter_restarts_after_game_over() {
        let mut app = app(&["fall"], 1);
        for c in "fold".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(app.session.is_game_over());

        app.handle_key(key(KeyCode::Enter));
        assert!(!app.session.is_game_over());
        assert_eq!(app.session.lives().alive(), 1);
        assert_eq!(app.session.secret().unwrap().text(), "FALL");
    }

    #[test]
    fn escape_quits() {
        let mut app = app(&["fall"], 15);
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
