//! Line-mode display of game progress

use super::formatters::{Painter, format_clue, format_pool};
use crate::core::Clue;
use crate::game::{GameState, Victory};
use std::io::{self, Write};

/// Game title printed once before the first prompt
pub const BANNER: &str = "Words Virtuoso";

/// Prompt printed before each guess is read
pub const PROMPT: &str = "Input a 5-letter word:";

/// Print every clue so far, then the incorrect-letter pool
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write + ?Sized, P: Painter + ?Sized>(
    out: &mut W,
    painter: &P,
    state: &GameState,
) -> io::Result<()> {
    writeln!(out)?;
    for clue in state.history() {
        writeln!(out, "{}", format_clue(painter, clue))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", format_pool(painter, state.pool()))?;
    writeln!(out)
}

/// Print the clue history, the solved word and the closing message
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_victory<W: Write + ?Sized, P: Painter + ?Sized>(
    out: &mut W,
    painter: &P,
    state: &GameState,
    victory: &Victory,
) -> io::Result<()> {
    for clue in state.history() {
        writeln!(out, "{}", format_clue(painter, clue))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", format_clue(painter, &Clue::solved(&victory.secret)))?;
    writeln!(out)?;
    writeln!(out, "Correct!")?;
    writeln!(out, "{}", victory.message())
}

/// Print the farewell shown when the player quits
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_farewell<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "The game is over.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Session, Turn};
    use crate::output::PlainPainter;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_strings;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_lists_clues_then_pool() {
        let dict = Dictionary::from_words(words_from_strings(&["crane", "built", "slate"]));
        let mut session = Session::new(&dict, Word::new("crane").unwrap());
        session.submit("built");
        session.submit("slate");

        let text = render(|out| print_board(out, &PlainPainter, session.state()));
        assert_eq!(
            text,
            "\n B  U  I  L  T \n S  L [A] T [E]\n\nAbsent: BILSTU\n\n"
        );
    }

    #[test]
    fn victory_shows_solved_word_and_message() {
        let dict = Dictionary::from_words(words_from_strings(&["crane"]));
        let mut session = Session::new(&dict, Word::new("crane").unwrap());
        let Turn::Won(victory) = session.submit("crane") else {
            panic!("expected a win");
        };

        let text = render(|out| print_victory(out, &PlainPainter, session.state(), &victory));
        assert_eq!(
            text,
            "\n[C][R][A][N][E]\n\nCorrect!\nAmazing luck! The solution was found at once.\n"
        );
    }

    #[test]
    fn farewell() {
        let text = render(|out| print_farewell(out));
        assert_eq!(text, "\nThe game is over.\n");
    }
}
