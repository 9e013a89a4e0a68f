//! Clue accumulation across a session

use super::clue::Clue;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Clues seen so far, without repeats, in the order they were first seen
#[derive(Debug, Clone, Default)]
pub struct ClueHistory {
    order: Vec<Clue>,
    seen: FxHashSet<Clue>,
}

impl ClueHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clue, returning `false` if an identical clue is already present
    pub fn insert(&mut self, clue: Clue) -> bool {
        if self.seen.contains(&clue) {
            return false;
        }
        self.seen.insert(clue.clone());
        self.order.push(clue);
        true
    }

    /// Replay clues in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Clue> {
        self.order.iter()
    }

    /// Number of distinct clues recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no guess has been scored yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<'a> IntoIterator for &'a ClueHistory {
    type Item = &'a Clue;
    type IntoIter = std::slice::Iter<'a, Clue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Letters known to be missing from the secret, kept sorted
///
/// The pool only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncorrectPool(BTreeSet<u8>);

impl IncorrectPool {
    /// Create an empty pool
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the absent letters of `clue` into the pool
    pub fn absorb(&mut self, clue: &Clue) {
        self.0.extend(clue.absent_letters());
    }

    /// Pool letters in alphabetical order
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Check if a (lowercase) letter is known to be absent
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Number of letters in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pool as an uppercase string, e.g. `"BILTU"`
    #[must_use]
    pub fn to_uppercase_string(&self) -> String {
        self.letters()
            .map(|b| char::from(b.to_ascii_uppercase()))
            .collect()
    }
}
