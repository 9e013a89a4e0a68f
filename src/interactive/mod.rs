//! Full-screen interface
//!
//! Plays the same [`Session`](crate::game::Session) as line mode, drawn with
//! ratatui on a crossterm backend.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
