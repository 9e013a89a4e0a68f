//! Words Virtuoso
//!
//! A terminal word-guessing game: guess the secret five-letter word, reading
//! colored per-letter clues after each attempt.
//!
//! # Quick Start
//!
//! ```rust
//! use words_virtuoso::core::Word;
//! use words_virtuoso::game::{Session, Turn};
//! use words_virtuoso::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["crane", "built"].map(|w| Word::new(w).unwrap()));
//! let mut session = Session::new(&dictionary, Word::new("crane").unwrap());
//!
//! assert!(matches!(session.submit("built"), Turn::Scored { .. }));
//! assert_eq!(session.state().pool().to_uppercase_string(), "BILTU");
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Startup errors
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
