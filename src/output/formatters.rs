//! Styled text for clues
//!
//! The [`Painter`] trait is the only place letter states become terminal text,
//! so the game logic has no idea whether colors are available.

use crate::core::{Clue, IncorrectPool, LetterState};
use colored::Colorize;

/// Renders letter states and the incorrect-letter pool as text
pub trait Painter {
    /// Render one uppercase letter in the given state
    fn letter(&self, letter: char, state: LetterState) -> String;

    /// Render the banner of letters known to be absent
    fn pool(&self, letters: &str) -> String;
}

/// Background-colored output using ANSI escapes
///
/// Each letter is its own colored run, reset right after.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn letter(&self, letter: char, state: LetterState) -> String {
        let text = letter.to_string();
        let styled = match state {
            LetterState::Correct => text.black().on_bright_green(),
            LetterState::Present => text.black().on_bright_yellow(),
            LetterState::Absent => text.black().on_white(),
        };
        styled.to_string()
    }

    fn pool(&self, letters: &str) -> String {
        letters.black().on_bright_cyan().to_string()
    }
}

/// Markup for terminals without color
///
/// `[A]` correct, `(A)` present, ` A ` absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn letter(&self, letter: char, state: LetterState) -> String {
        match state {
            LetterState::Correct => format!("[{letter}]"),
            LetterState::Present => format!("({letter})"),
            LetterState::Absent => format!(" {letter} "),
        }
    }

    fn pool(&self, letters: &str) -> String {
        format!("Absent: {letters}")
    }
}

/// Render a clue as one line of uppercase letters
#[must_use]
pub fn format_clue<P: Painter + ?Sized>(painter: &P, clue: &Clue) -> String {
    clue.cells()
        .map(|(letter, state)| painter.letter(char::from(letter.to_ascii_uppercase()), state))
        .collect()
}

/// Render the incorrect-letter pool
#[must_use]
pub fn format_pool<P: Painter + ?Sized>(painter: &P, pool: &IncorrectPool) -> String {
    painter.pool(&pool.to_uppercase_string())
}
