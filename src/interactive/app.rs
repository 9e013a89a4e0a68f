//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{Session, Turn, Victory};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub victory: Option<Victory>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Guess the secret word. Type 'exit' or press Esc to quit.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::Guessing,
            victory: None,
            should_quit: false,
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input) {
            Turn::Quit | Turn::Closed => self.should_quit = true,
            Turn::Won(victory) => {
                self.add_message("Correct!", MessageStyle::Success);
                self.add_message(&victory.message(), MessageStyle::Success);
                self.add_message("Press Enter or 'q' to leave.", MessageStyle::Info);
                self.victory = Some(victory);
                self.input_mode = InputMode::WinCelebration;
            }
            Turn::Rejected(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            Turn::Scored { fresh, .. } => {
                let text = if fresh {
                    format!("Attempt {} - keep going!", self.session.state().attempt())
                } else {
                    format!(
                        "Attempt {} - you already tried that one.",
                        self.session.state().attempt()
                    )
                };
                self.add_message(&text, MessageStyle::Info);
            }
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc) {
                    self.should_quit = true;
                }
            }
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                // Room for "exit" plus a little slack; longer input is rejected on submit anyway
                KeyCode::Char(c) if self.input_buffer.chars().count() < WORD_LENGTH + 3 => {
                    self.input_buffer.push(c);
                }
                _ => {}
            },
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
    enter_alternate_screen(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = res?;
    if let Some(victory) = app.victory {
        println!("{}", victory.message());
    } else {
        println!("The game is over.");
    }

    Ok(())
}

/// Switch `out` to the alternate screen, leaving raw mode if that fails
fn enter_alternate_screen<W: Write>(out: &mut W) -> Result<()> {
    if let Err(err) = execute!(out, EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(err.into());
    }
    Ok(())
}

fn run_app<'a, B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'a>,
) -> Result<App<'a>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(app);
        }
    }
}
