//! Validated five-letter words
//!
//! A [`Word`] can only be built from text that passes [`validate`]: exactly five
//! ASCII letters, none repeated. Everything downstream relies on that.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// Reason a piece of text is not a valid word
///
/// Variants are listed in the order the checks run; the first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("The input isn't a 5-letter word.")]
    WrongLength(usize),
    #[error("One or more letters of the input aren't valid.")]
    InvalidCharacters,
    #[error("The input has duplicate letters.")]
    DuplicateLetters,
}

/// Check `text` against the word rules without allocating
///
/// Length is counted in characters, so multi-byte input reports its visible
/// length rather than its byte length.
///
/// # Errors
/// Returns the first rule `text` breaks, in the order
/// `WrongLength` → `InvalidCharacters` → `DuplicateLetters`.
///
/// # Examples
/// ```
/// use words_virtuoso::core::{WordError, validate};
///
/// assert!(validate("Crane").is_ok());
/// assert_eq!(validate("cran"), Err(WordError::WrongLength(4)));
/// assert_eq!(validate("cr4ne"), Err(WordError::InvalidCharacters));
/// assert_eq!(validate("aabbc"), Err(WordError::DuplicateLetters));
/// ```
pub fn validate(text: &str) -> Result<(), WordError> {
    let length = text.chars().count();
    if length != WORD_LENGTH {
        return Err(WordError::WrongLength(length));
    }

    if !text.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacters);
    }

    // 26-bit letter mask; a bit already set means a repeat
    let mut seen = 0u32;
    for byte in text.bytes() {
        let bit = 1u32 << (byte.to_ascii_lowercase() - b'a');
        if seen & bit != 0 {
            return Err(WordError::DuplicateLetters);
        }
        seen |= bit;
    }

    Ok(())
}

/// A validated, lowercase five-letter word with distinct letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
    text: String,
}

impl Word {
    /// Create a new Word, lowercasing the input
    ///
    /// # Errors
    /// Returns `WordError` if `text` fails [`validate`].
    ///
    /// # Examples
    /// ```
    /// use words_virtuoso::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("speed").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        validate(text)?;

        let text = text.to_ascii_lowercase();
        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self { letters, text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Check if the word contains a specific (lowercase) letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_distinct_letters() {
        for text in ["crane", "CRANE", "Slate", "knelt", "bread"] {
            assert_eq!(validate(text), Ok(()), "{text} should be valid");
        }
    }

    #[test]
    fn validate_wrong_length() {
        assert_eq!(validate(""), Err(WordError::WrongLength(0)));
        assert_eq!(validate("abcd"), Err(WordError::WrongLength(4)));
        assert_eq!(validate("abcdef"), Err(WordError::WrongLength(6)));
        assert_eq!(validate("too long"), Err(WordError::WrongLength(8)));
    }

    #[test]
    fn validate_counts_characters_not_bytes() {
        // Five characters, ten bytes
        assert_eq!(validate("éèêëē"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn validate_invalid_characters() {
        assert_eq!(validate("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(validate("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(validate("cr-ne"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn validate_duplicate_letters() {
        assert_eq!(validate("aabbc"), Err(WordError::DuplicateLetters));
        assert_eq!(validate("apple"), Err(WordError::DuplicateLetters));
        assert_eq!(validate("speed"), Err(WordError::DuplicateLetters));
    }

    #[test]
    fn validate_duplicates_are_case_insensitive() {
        assert_eq!(validate("Abcda"), Err(WordError::DuplicateLetters));
    }

    #[test]
    fn validate_checks_in_fixed_order() {
        // Too long and has digits and repeats: length wins
        assert_eq!(validate("aa11aa"), Err(WordError::WrongLength(6)));
        // Right length, digits and repeats: characters win
        assert_eq!(validate("aa1bb"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn validate_matches_definition() {
        let samples = [
            "crane", "apple", "ab", "abcde", "abcdd", "ABCDE", "abc1e", "zyxwv", "hello", "world",
            "abcdef", "a b c",
        ];
        for text in samples {
            let expected = text.chars().count() == 5
                && text.chars().all(|c| c.is_ascii_alphabetic())
                && text
                    .to_ascii_lowercase()
                    .chars()
                    .collect::<std::collections::HashSet<_>>()
                    .len()
                    == 5;
            assert_eq!(validate(text).is_ok(), expected, "{text}");
        }
    }

    #[test]
    fn word_creation_lowercases() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn word_creation_rejects_invalid() {
        assert_eq!(Word::new("shrt"), Err(WordError::WrongLength(4)));
        assert_eq!(Word::new("sh0rt"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("sheep"), Err(WordError::DuplicateLetters));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_equality_ignores_input_case() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }

    #[test]
    fn word_display() {
        let word = Word::new("Knelt").unwrap();
        assert_eq!(format!("{word}"), "knelt");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            WordError::WrongLength(3).to_string(),
            "The input isn't a 5-letter word."
        );
        assert_eq!(
            WordError::InvalidCharacters.to_string(),
            "One or more letters of the input aren't valid."
        );
        assert_eq!(
            WordError::DuplicateLetters.to_string(),
            "The input has duplicate letters."
        );
    }
}
