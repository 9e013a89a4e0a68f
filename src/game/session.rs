//! Game session state machine
//!
//! A [`Session`] owns the [`GameState`] for one secret word and turns each line
//! of player input into a [`Turn`]. It never prints; front ends decide how to
//! show the outcome.

use crate::core::{Clue, ClueHistory, IncorrectPool, Word, WordError};
use crate::wordlists::Dictionary;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, trace};

/// Input that ends the session without a win
pub const QUIT_KEYWORD: &str = "exit";

/// Why a guess was rejected
///
/// Rejections are recoverable: no attempt is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error(transparent)]
    Format(#[from] WordError),
    #[error("The input word isn't included in my words list.")]
    NotInDictionary,
}

/// Mutable state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    attempt: u32,
    elapsed_secs: u64,
    history: ClueHistory,
    pool: IncorrectPool,
    started: Instant,
}

impl GameState {
    #[must_use]
    pub fn new(secret: Word, started: Instant) -> Self {
        Self {
            secret,
            attempt: 1,
            elapsed_secs: 0,
            history: ClueHistory::new(),
            pool: IncorrectPool::new(),
            started,
        }
    }

    /// The word being guessed
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of the attempt currently being played, starting at 1
    #[must_use]
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Whole seconds since the session started, as of the last processed guess
    #[must_use]
    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Distinct clues scored so far, in play order
    #[must_use]
    pub const fn history(&self) -> &ClueHistory {
        &self.history
    }

    /// Letters known to be absent from the secret
    #[must_use]
    pub const fn pool(&self) -> &IncorrectPool {
        &self.pool
    }

    fn tick(&mut self, now: Instant) {
        self.elapsed_secs = now.saturating_duration_since(self.started).as_secs();
    }
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Won,
    Exited,
}

/// Summary of a won game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Victory {
    pub secret: Word,
    pub attempts: u32,
    pub elapsed_secs: u64,
}

impl Victory {
    /// Closing line shown to the player
    #[must_use]
    pub fn message(&self) -> String {
        if self.attempts == 1 {
            "Amazing luck! The solution was found at once.".to_string()
        } else {
            format!(
                "The solution was found after {} tries in {} seconds.",
                self.attempts, self.elapsed_secs
            )
        }
    }
}

/// Outcome of submitting one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The player typed the quit keyword
    Quit,
    /// The guess matched the secret
    Won(Victory),
    /// The guess was malformed or unknown; nothing changed
    Rejected(GuessError),
    /// The guess was scored; `fresh` is false when the clue was already in the history
    Scored { clue: Clue, fresh: bool },
    /// The session already ended; input is ignored
    Closed,
}

/// One game against a single secret word
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    state: GameState,
    phase: Phase,
}

impl<'a> Session<'a> {
    /// Start a session now
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, secret: Word) -> Self {
        Self::started_at(dictionary, secret, Instant::now())
    }

    /// Start a session with an explicit start instant
    #[must_use]
    pub fn started_at(dictionary: &'a Dictionary, secret: Word, started: Instant) -> Self {
        debug!(secret = %secret, "session started");
        Self {
            dictionary,
            state: GameState::new(secret, started),
            phase: Phase::AwaitingInput,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the session has ended by a win or a quit
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != Phase::AwaitingInput
    }

    /// Submit a line of input, sampling the clock now
    pub fn submit(&mut self, input: &str) -> Turn {
        self.submit_at(input, Instant::now())
    }

    /// Submit a line of input as if it arrived at `now`
    ///
    /// Only the line terminator is stripped before lowercasing, so padded
    /// input fails validation. The quit keyword and the secret word
    /// are recognized before any validation.
    ///
    /// # Examples
    /// ```
    /// use words_virtuoso::core::Word;
    /// use words_virtuoso::game::{Session, Turn};
    /// use words_virtuoso::wordlists::Dictionary;
    ///
    /// let crane = Word::new("crane").unwrap();
    /// let dictionary = Dictionary::from_words([crane.clone()]);
    /// let mut session = Session::new(&dictionary, crane);
    ///
    /// match session.submit("CRANE") {
    ///     Turn::Won(victory) => assert_eq!(victory.attempts, 1),
    ///     other => panic!("unexpected {other:?}"),
    /// }
    /// ```
    pub fn submit_at(&mut self, input: &str, now: Instant) -> Turn {
        if self.is_over() {
            return Turn::Closed;
        }

        let guess = input.trim_end_matches(['\n', '\r']).to_lowercase();

        if guess == QUIT_KEYWORD {
            debug!(attempt = self.state.attempt, "player quit");
            self.phase = Phase::Exited;
            return Turn::Quit;
        }

        if guess == self.state.secret.text() {
            self.state.tick(now);
            self.phase = Phase::Won;
            debug!(
                attempts = self.state.attempt,
                elapsed = self.state.elapsed_secs,
                "secret found"
            );
            return Turn::Won(Victory {
                secret: self.state.secret.clone(),
                attempts: self.state.attempt,
                elapsed_secs: self.state.elapsed_secs,
            });
        }

        let word = match self.check_guess(&guess) {
            Ok(word) => word,
            Err(err) => {
                debug!(input = %guess, reason = ?err, "guess rejected");
                return Turn::Rejected(err);
            }
        };

        let clue = Clue::evaluate(&self.state.secret, &word);
        let fresh = self.state.history.insert(clue.clone());
        self.state.pool.absorb(&clue);
        self.state.attempt += 1;
        self.state.tick(now);
        trace!(guess = %word, fresh, attempt = self.state.attempt, "guess scored");

        Turn::Scored { clue, fresh }
    }

    fn check_guess(&self, guess: &str) -> Result<Word, GuessError> {
        let word = Word::new(guess)?;
        if self.dictionary.contains(&word) {
            Ok(word)
        } else {
            Err(GuessError::NotInDictionary)
        }
    }
}
