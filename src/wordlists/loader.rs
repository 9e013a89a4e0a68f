//! Word list loading and startup validation
//!
//! Reads the dictionary and candidates files and runs the startup checks in
//! their fixed order. The first failing check is reported.

use super::{Dictionary, WordLists};
use crate::core::{Word, validate};
use crate::error::{Result, StartupError};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Split the positional arguments into `(dictionary, candidates)` paths
///
/// # Errors
/// Returns `StartupError::WrongArgumentCount` unless exactly two paths are given.
pub fn paths_from_args(args: &[PathBuf]) -> Result<(&Path, &Path)> {
    match args {
        [words, candidates] => Ok((words.as_path(), candidates.as_path())),
        _ => Err(StartupError::WrongArgumentCount),
    }
}

/// Read a word list file, one word per line
///
/// Lines are lowercased and otherwise kept as written, so blank or padded
/// lines surface as invalid words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn read_words<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content.lines().map(str::to_lowercase).collect())
}

/// Count entries that are not valid words
#[must_use]
pub fn count_invalid(words: &[String]) -> usize {
    words.par_iter().filter(|w| validate(w).is_err()).count()
}

/// Count candidates that do not appear in the dictionary
#[must_use]
pub fn count_missing(candidates: &[String], dictionary: &[String]) -> usize {
    let known: FxHashSet<&str> = dictionary.iter().map(String::as_str).collect();
    candidates
        .par_iter()
        .filter(|c| !known.contains(c.as_str()))
        .count()
}

/// Load and cross-check both word lists
///
/// Checks, in order: dictionary exists, candidates exist, dictionary entries
/// are valid, candidate entries are valid, every candidate is in the
/// dictionary, and at least one candidate exists.
///
/// # Errors
///
/// Returns the first `StartupError` encountered.
///
/// # Examples
/// ```no_run
/// use words_virtuoso::wordlists::loader::load_word_lists;
///
/// let lists = load_word_lists("words.txt", "candidates.txt").unwrap();
/// println!("{} candidates", lists.candidates().len());
/// ```
pub fn load_word_lists<P: AsRef<Path>, Q: AsRef<Path>>(
    words_path: P,
    candidates_path: Q,
) -> Result<WordLists> {
    let words_path = words_path.as_ref();
    let candidates_path = candidates_path.as_ref();
    let words_name = file_name(words_path);
    let candidates_name = file_name(candidates_path);

    if !words_path.exists() {
        return Err(StartupError::WordsFileMissing(words_name));
    }
    if !candidates_path.exists() {
        return Err(StartupError::CandidatesFileMissing(candidates_name));
    }

    let words = read_words(words_path).map_err(|source| StartupError::Io {
        file: words_name.clone(),
        source,
    })?;
    let candidates = read_words(candidates_path).map_err(|source| StartupError::Io {
        file: candidates_name.clone(),
        source,
    })?;
    debug!(
        words = words.len(),
        candidates = candidates.len(),
        "read word lists"
    );

    let count = count_invalid(&words);
    if count > 0 {
        return Err(StartupError::InvalidDictionaryWords {
            count,
            file: words_name,
        });
    }

    let count = count_invalid(&candidates);
    if count > 0 {
        return Err(StartupError::InvalidCandidateWords {
            count,
            file: candidates_name,
        });
    }

    let count = count_missing(&candidates, &words);
    if count > 0 {
        return Err(StartupError::CandidatesNotInDictionary {
            count,
            file: words_name,
        });
    }

    if candidates.is_empty() {
        return Err(StartupError::NoCandidates(candidates_name));
    }

    Ok(WordLists::new(
        Dictionary::from_words(words_from_strings(&words)),
        words_from_strings(&candidates),
    ))
}

/// Convert already-validated strings into words, skipping anything invalid
#[must_use]
pub fn words_from_strings<S: AsRef<str>>(strings: &[S]) -> Vec<Word> {
    strings
        .iter()
        .filter_map(|s| Word::new(s.as_ref()).ok())
        .collect()
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_list(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        path
    }

    #[test]
    fn paths_from_args_requires_two() {
        let one = vec![PathBuf::from("a")];
        let three = vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")];
        assert!(matches!(
            paths_from_args(&[]),
            Err(StartupError::WrongArgumentCount)
        ));
        assert!(matches!(
            paths_from_args(&one),
            Err(StartupError::WrongArgumentCount)
        ));
        assert!(matches!(
            paths_from_args(&three),
            Err(StartupError::WrongArgumentCount)
        ));

        let two = vec![PathBuf::from("w.txt"), PathBuf::from("c.txt")];
        let (w, c) = paths_from_args(&two).unwrap();
        assert_eq!(w, Path::new("w.txt"));
        assert_eq!(c, Path::new("c.txt"));
    }

    #[test]
    fn read_words_keeps_lines_as_written() {
        let dir = TempDir::new().unwrap();
        let path = write_list(&dir, "w.txt", &["CRANE", "  Slate  ", "", "knelt\r"]);
        let words = read_words(&path).unwrap();
        assert_eq!(words, vec!["crane", "  slate  ", "", "knelt"]);
    }

    #[test]
    fn padded_and_blank_lines_count_as_invalid() {
        let dir = TempDir::new().unwrap();
        let words = write_list(&dir, "words.txt", &["crane", "", " slate ", "built"]);
        let candidates = write_list(&dir, "candidates.txt", &["crane"]);

        let err = load_word_lists(&words, &candidates).unwrap_err();
        assert_eq!(
            err.to_string(),
            "2 invalid words were found in the words.txt file."
        );
    }

    #[test]
    fn count_invalid_counts_every_rule() {
        let words: Vec<String> = ["crane", "apple", "abc", "cr4ne", "slate"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(count_invalid(&words), 3);
    }

    #[test]
    fn count_missing_is_set_difference() {
        let dictionary: Vec<String> = vec!["crane".into(), "slate".into()];
        let candidates: Vec<String> = vec!["crane".into(), "built".into(), "react".into()];
        assert_eq!(count_missing(&candidates, &dictionary), 2);
    }

    #[test]
    fn load_valid_lists() {
        let dir = TempDir::new().unwrap();
        let words = write_list(&dir, "words.txt", &["Crane", "built", "bread"]);
        let candidates = write_list(&dir, "candidates.txt", &["CRANE"]);

        let lists = load_word_lists(&words, &candidates).unwrap();
        assert_eq!(lists.dictionary().len(), 3);
        assert_eq!(lists.candidates().len(), 1);
        assert_eq!(lists.candidates()[0].text(), "crane");
        assert!(lists.dictionary().contains(&Word::new("built").unwrap()));
    }

    #[test]
    fn missing_words_file_reported_first() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");
        let also_missing = dir.path().join("gone.txt");

        let err = load_word_lists(&missing, &also_missing).unwrap_err();
        assert_eq!(err.to_string(), "The words file nope.txt doesn't exist.");
    }

    #[test]
    fn missing_candidates_file() {
        let dir = TempDir::new().unwrap();
        let words = write_list(&dir, "words.txt", &["crane"]);
        let missing = dir.path().join("gone.txt");

        let err = load_word_lists(&words, &missing).unwrap_err();
        assert!(matches!(err, StartupError::CandidatesFileMissing(ref f) if f == "gone.txt"));
    }

    #[test]
    fn invalid_dictionary_words_counted() {
        let dir = TempDir::new().unwrap();
        let words = write_list(&dir, "words.txt", &["crane", "apple", "toolong", "b1rds"]);
        let candidates = write_list(&dir, "candidates.txt", &["crane", "xx"]);

        let err = load_word_lists(&words, &candidates).unwrap_err();
        assert_eq!(
            err.to_string(),
            "3 invalid words were found in the words.txt file."
        );
    }

    #[test]
    fn invalid_candidate_words_counted() {
        let dir = TempDir::new().unwrap();
        let words = write_list(&dir, "words.txt", &["crane", "slate"]);
        let candidates = write_list(&dir, "candidates.txt", &["crane", "sheep"]);

        let err = load_word_lists(&words, &candidates).unwrap_err();
        assert!(matches!(
            err,
            StartupError::InvalidCandidateWords { count: 1, ref file } if file == "candidates.txt"
        ));
    }

    #[test]
    fn candidate_not_in_dictionary() {
        let dir = TempDir::new().unwrap();
        let words = write_list(&dir, "words.txt", &["crane", "slate"]);
        let candidates = write_list(&dir, "candidates.txt", &["crane", "Knelt"]);

        let err = load_word_lists(&words, &candidates).unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 candidate words are not included in the words.txt file."
        );
    }

    #[test]
    fn empty_candidates_rejected() {
        let dir = TempDir::new().unwrap();
        let words = write_list(&dir, "words.txt", &["crane"]);
        let candidates = write_list(&dir, "candidates.txt", &[]);

        let err = load_word_lists(&words, &candidates).unwrap_err();
        assert!(matches!(err, StartupError::NoCandidates(_)));
    }
}
