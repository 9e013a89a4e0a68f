//! Core domain types for the game
//!
//! Words, clues and the per-session clue accumulators. Nothing here touches
//! the terminal or the filesystem.

mod clue;
mod history;
mod word;

pub use clue::{Clue, LetterState};
pub use history::{ClueHistory, IncorrectPool};
pub use word::{WORD_LENGTH, Word, WordError, validate};
