//! Guess evaluation
//!
//! A [`Clue`] records, for each position of a guess, whether the letter is in
//! the right place, somewhere else in the secret, or not in the secret at all.
//!
//! Words never contain repeated letters, so each position is judged on its own
//! against the secret; there is no pairing of duplicate letters.

use super::word::{WORD_LENGTH, Word};

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Same letter at the same position in the secret
    Correct,
    /// Letter appears in the secret at another position
    Present,
    /// Letter does not appear in the secret
    Absent,
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    letters: [u8; WORD_LENGTH],
    states: [LetterState; WORD_LENGTH],
}

impl Clue {
    /// Evaluate `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use words_virtuoso::core::{Clue, LetterState, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("react").unwrap();
    /// let clue = Clue::evaluate(&secret, &guess);
    ///
    /// // R(present) E(present) A(correct) C(present) T(absent)
    /// assert_eq!(
    ///     clue.states(),
    ///     &[
    ///         LetterState::Present,
    ///         LetterState::Present,
    ///         LetterState::Correct,
    ///         LetterState::Present,
    ///         LetterState::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let letters = *guess.letters();
        let mut states = [LetterState::Absent; WORD_LENGTH];

        for (i, state) in states.iter_mut().enumerate() {
            let letter = letters[i];
            *state = if secret.letters()[i] == letter {
                LetterState::Correct
            } else if secret.has_letter(letter) {
                LetterState::Present
            } else {
                LetterState::Absent
            };
        }

        Self { letters, states }
    }

    /// The all-correct clue for `word`, shown when the secret is found
    #[must_use]
    pub fn solved(word: &Word) -> Self {
        Self {
            letters: *word.letters(),
            states: [LetterState::Correct; WORD_LENGTH],
        }
    }

    /// Get the guessed letters as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.states
    }

    /// Iterate over `(letter, state)` pairs in position order
    pub fn cells(&self) -> impl Iterator<Item = (u8, LetterState)> + '_ {
        self.letters.iter().copied().zip(self.states.iter().copied())
    }

    /// Letters of the guess that are not in the secret
    pub fn absent_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells()
            .filter(|&(_, state)| state == LetterState::Absent)
            .map(|(letter, _)| letter)
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.states.iter().all(|&s| s == LetterState::Correct)
    }
}
