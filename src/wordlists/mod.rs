//! Word lists for the game
//!
//! The dictionary holds every word accepted as a guess; the candidates are the
//! words the secret may be drawn from. Candidates are always a subset of the
//! dictionary once [`loader::load_word_lists`] succeeds.

pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Set of words accepted as guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Check if `word` is in the dictionary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Validated dictionary plus the secret candidates drawn from it
#[derive(Debug, Clone)]
pub struct WordLists {
    dictionary: Dictionary,
    candidates: Vec<Word>,
}

impl WordLists {
    #[must_use]
    pub const fn new(dictionary: Dictionary, candidates: Vec<Word>) -> Self {
        Self {
            dictionary,
            candidates,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Words the secret may be drawn from
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Draw the secret word uniformly from the candidates
    ///
    /// Returns `None` only when there are no candidates.
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.candidates.choose(rng)
    }
}
