//! TUI application state and logic

use crate::core::{GameConfig, Rejection, Session, Submission};
use crate::spell::WordListChecker;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What the keyboard is currently driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing into the word entry line
    Entry,
    /// A rejection dialog is up; input dismisses it
    ErrorDialog,
}

/// Application state
pub struct App<'a> {
    pub session: Session<'a, WordListChecker>,
    pub input_buffer: String,
    pub error: Option<Rejection>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(start_words: &'a [String], checker: WordListChecker, config: GameConfig) -> Self {
        Self {
            session: Session::new(start_words, checker, config),
            input_buffer: String::new(),
            error: None,
            input_mode: InputMode::Entry,
            should_quit: false,
        }
    }

    /// Submit the entry line to the session
    ///
    /// The entry line is cleared only on acceptance, so a rejected word can
    /// be fixed up rather than retyped. A rejection raises the error dialog.
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit(&input) {
            Submission::Accepted { .. } => {
                self.input_buffer.clear();
            }
            Submission::Rejected(rejection) => {
                self.error = Some(rejection);
                self.input_mode = InputMode::ErrorDialog;
            }
            Submission::Ignored => {}
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
        self.input_mode = InputMode::Entry;
    }

    pub fn new_round(&mut self) {
        self.session.start_round();
        self.input_buffer.clear();
        self.error = None;
        self.input_mode = InputMode::Entry;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
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
                InputMode::ErrorDialog => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                        app.dismiss_error();
                    }
                    _ => {
                        // While the dialog is up, ignore other keys
                    }
                },
                InputMode::Entry => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_round();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Char(c) if c.is_alphabetic() => {
                        app.input_buffer.push(c.to_ascii_lowercase());
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
