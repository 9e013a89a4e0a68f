//! Line-mode game loop
//!
//! Prompts for guesses on any reader/writer pair and prints the board after
//! each scored guess.

use crate::game::{Session, Turn};
use crate::output::{BANNER, PROMPT, Painter, print_board, print_farewell, print_victory};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// How a line-mode game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won,
    Quit,
}

/// Run the game until the secret is found or the player quits
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R, W, P>(
    session: &mut Session<'_>,
    painter: &P,
    input: &mut R,
    out: &mut W,
) -> Result<PlayOutcome>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    P: Painter + ?Sized,
{
    writeln!(out, "{BANNER}")?;

    loop {
        writeln!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed");
            print_farewell(out)?;
            return Ok(PlayOutcome::Quit);
        }

        match session.submit(&line) {
            Turn::Quit | Turn::Closed => {
                print_farewell(out)?;
                return Ok(PlayOutcome::Quit);
            }
            Turn::Won(victory) => {
                print_victory(out, painter, session.state(), &victory)?;
                return Ok(PlayOutcome::Won);
            }
            Turn::Rejected(err) => writeln!(out, "{err}")?,
            Turn::Scored { .. } => print_board(out, painter, session.state())?,
        }
    }
}
