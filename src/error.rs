//! Startup error types
//!
//! Every variant is fatal: the binary prints `Error: {message}` on standard
//! output and exits with a failure status before any gameplay starts.

use thiserror::Error;

/// Result type alias for startup operations
pub type Result<T> = std::result::Result<T, StartupError>;

/// Problems with the command line or the word list files
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Wrong number of arguments.")]
    WrongArgumentCount,

    #[error("The words file {0} doesn't exist.")]
    WordsFileMissing(String),

    #[error("The candidate words file {0} doesn't exist.")]
    CandidatesFileMissing(String),

    #[error("{count} invalid words were found in the {file} file.")]
    InvalidDictionaryWords { count: usize, file: String },

    #[error("{count} invalid words were found in the {file} file.")]
    InvalidCandidateWords { count: usize, file: String },

    #[error("{count} candidate words are not included in the {file} file.")]
    CandidatesNotInDictionary { count: usize, file: String },

    #[error("The candidate words file {0} contains no words.")]
    NoCandidates(String),

    #[error("Could not read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
}
