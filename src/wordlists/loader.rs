//! Word list loading utilities
//!
//! Lists come as a JSON array of words (`guesses-7.json`), a JSON object
//! mapping each word to its frequency rank (`answers-7-index.json`), or plain
//! text with one word per line.

use crate::core::{Result, SqncesError, Word};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// `WordListIo` if the file cannot be read, `WordListFormat` if it looks like
/// JSON but does not parse.
///
/// # Examples
/// ```no_run
/// use sqnces_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("guesses-7.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    Ok(load_ranked_from_file(path)?
        .into_iter()
        .map(|(word, _)| word)
        .collect())
}

/// Load words with the frequency rank stored next to each, if any
///
/// Only the JSON object form carries ranks (`{"sensory": 12, ...}`); words
/// from arrays and plain text come back with `None`.
///
/// # Errors
/// Same as [`load_from_file`].
pub fn load_ranked_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<(Word, Option<u64>)>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SqncesError::WordListIo {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_ranked(&content).map_err(|source| SqncesError::WordListFormat {
        path: path.to_path_buf(),
        source,
    })?;

    let ranked = entries.iter().filter(|(_, rank)| rank.is_some()).count();
    debug!(path = %path.display(), words = entries.len(), ranked, "loaded word list");
    Ok(entries)
}

/// Parse list content in any of the supported formats
///
/// # Errors
/// The JSON error when the content starts like JSON but is malformed.
pub fn parse(content: &str) -> std::result::Result<Vec<Word>, serde_json::Error> {
    Ok(parse_ranked(content)?
        .into_iter()
        .map(|(word, _)| word)
        .collect())
}

/// Parse list content, keeping the rank of each word of a JSON object
///
/// A value that is not a non-negative integer leaves the word unranked.
///
/// # Errors
/// The JSON error when the content starts like JSON but is malformed.
pub fn parse_ranked(
    content: &str,
) -> std::result::Result<Vec<(Word, Option<u64>)>, serde_json::Error> {
    let trimmed = content.trim_start();
    if !trimmed.starts_with(['[', '{']) {
        return Ok(words_from_lines(content)
            .into_iter()
            .map(|word| (word, None))
            .collect());
    }

    let entries = match serde_json::from_str::<Value>(trimmed)? {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|s| Word::new(s).ok())
            .map(|word| (word, None))
            .collect(),
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, rank)| Some((Word::new(key.as_str()).ok()?, rank.as_u64())))
            .collect(),
        _ => Vec::new(),
    };
    Ok(entries)
}

/// One word per line; blank lines and invalid entries are skipped
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}
