//! Error types for the sqnces engine

use std::path::PathBuf;
use thiserror::Error;

use super::word::WordError;

/// Errors produced while evaluating guesses, loading lists or running a session
#[derive(Debug, Error)]
pub enum SqncesError {
    /// The anchor is absent from a word handed to the feedback engine
    #[error("anchor \"{anchor}\" not found in \"{word}\"")]
    AnchorNotFound { anchor: String, word: String },

    #[error("anchor must be exactly 3 letters, got {0}")]
    InvalidAnchorLength(usize),

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// A feedback string that cannot describe a real guess result
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),

    #[error("feedback marks \"{found}\" as the anchor, expected \"{expected}\"")]
    AnchorMismatch { expected: String, found: String },

    #[error("\"{word}\" has {found} letters, expected {expected}")]
    AnswerLengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    /// Candidate weights must line up one to one with the candidates
    #[error("{weights} weights given for {candidates} candidates")]
    WeightCountMismatch { candidates: usize, weights: usize },

    #[error("no word list loaded for length {0}")]
    UnsupportedLength(usize),

    /// Every candidate was ruled out; the observed feedback contradicts itself
    #[error("no candidates remain; the observed feedback is contradictory")]
    EmptyCandidatePool,

    #[error("failed to read word list {}", path.display())]
    WordListIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse word list {}", path.display())]
    WordListFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for fallible engine operations
pub type Result<T, E = SqncesError> = std::result::Result<T, E>;
