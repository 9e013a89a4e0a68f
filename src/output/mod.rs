//! Terminal output formatting
//!
//! Painters for clue text and the line-mode display built on them.

pub mod display;
pub mod formatters;

pub use display::{BANNER, PROMPT, print_board, print_farewell, print_victory};
pub use formatters::{AnsiPainter, Painter, PlainPainter, format_clue, format_pool};
