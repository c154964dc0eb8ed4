//! Word lists for sqnces solving
//!
//! Lists are loaded at runtime and grouped by word length. A puzzle of
//! length `n` draws its candidates from the length-`n` list. Frequency ranks
//! from the answer indexes are kept per length for the answer prior.

pub mod loader;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::core::{Result, SqncesError, Word};

/// Answer lengths the game ships lists for
pub const SUPPORTED_LENGTHS: [usize; 3] = [6, 7, 8];

/// File name of the guess list for `length` inside a lists directory
#[must_use]
pub fn list_file_name(length: usize) -> String {
    format!("guesses-{length}.json")
}

/// File name of the ranked answer index for `length`
#[must_use]
pub fn index_file_name(length: usize) -> String {
    format!("answers-{length}-index.json")
}

/// Frequency rank of each word, lower is more common
pub type Ranks = FxHashMap<Word, u64>;

/// Deduplicated words grouped by length, with optional frequency ranks
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    by_length: BTreeMap<usize, Vec<Word>>,
    ranks: BTreeMap<usize, Ranks>,
}

impl WordLists {
    /// Group `words` by length, dropping duplicates and keeping first-seen order
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut lists = Self::default();
        lists.extend(words);
        lists
    }

    /// Load `guesses-6.json`, `guesses-7.json` and `guesses-8.json` from `dir`
    ///
    /// Missing files are skipped with a warning; a directory with none of them
    /// yields empty lists and every lookup fails with `UnsupportedLength`.
    /// Ranks are read from `answers-N-index.json` when present; the index only
    /// ranks words, it does not add candidates.
    ///
    /// # Errors
    /// A list file that exists but cannot be read or parsed.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut lists = Self::default();

        for length in SUPPORTED_LENGTHS {
            let path: PathBuf = dir.join(list_file_name(length));
            if !path.is_file() {
                warn!(path = %path.display(), "word list not found");
                continue;
            }
            lists.extend(loader::load_from_file(&path)?);

            let index = dir.join(index_file_name(length));
            if index.is_file() {
                lists.add_ranks(loader::load_ranked_from_file(&index)?);
            } else {
                debug!(path = %index.display(), "no answer index, priors are uniform");
            }
        }

        debug!(dir = %dir.display(), lengths = ?lists.lengths(), "word lists loaded");
        Ok(lists)
    }

    /// Load one list file holding words of any length
    ///
    /// Ranks from a JSON object file are kept.
    ///
    /// # Errors
    /// The file cannot be read or parsed.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let entries = loader::load_ranked_from_file(path)?;
        let mut lists = Self::from_words(entries.iter().map(|(word, _)| word.clone()));
        lists.add_ranks(entries);
        Ok(lists)
    }

    /// Record frequency ranks; unranked entries are ignored and a later rank
    /// for the same word replaces the earlier one
    pub fn add_ranks(&mut self, entries: impl IntoIterator<Item = (Word, Option<u64>)>) {
        for (word, rank) in entries {
            if let Some(rank) = rank {
                self.ranks.entry(word.len()).or_default().insert(word, rank);
            }
        }
    }

    /// Frequency ranks of `length`-letter words, if any were loaded
    #[must_use]
    pub fn ranks_for(&self, length: usize) -> Option<&Ranks> {
        self.ranks.get(&length).filter(|ranks| !ranks.is_empty())
    }

    /// Words of exactly `length` letters
    ///
    /// # Errors
    /// `UnsupportedLength` when no word of that length is loaded.
    pub fn for_length(&self, length: usize) -> Result<&[Word]> {
        self.by_length
            .get(&length)
            .filter(|words| !words.is_empty())
            .map(Vec::as_slice)
            .ok_or(SqncesError::UnsupportedLength(length))
    }

    /// Lengths with at least one word, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.by_length.keys().copied().collect()
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}

impl Extend<Word> for WordLists {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, words: I) {
        let mut seen: FxHashSet<Word> = self.by_length.values().flatten().cloned().collect();
        for word in words {
            if seen.insert(word.clone()) {
                self.by_length.entry(word.len()).or_default().push(word);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn groups_by_length_and_dedupes() {
        let lists = WordLists::from_words(words(&[
            "scatter", "catnip", "Scatter", "wildcat", "catalogs", "catnip",
        ]));

        assert_eq!(lists.lengths(), vec![6, 7, 8]);
        assert_eq!(lists.len(), 4);
        assert_eq!(lists.for_length(7).unwrap(), words(&["scatter", "wildcat"]).as_slice());
        assert_eq!(lists.for_length(6).unwrap(), words(&["catnip"]).as_slice());
    }

    #[test]
    fn missing_length_is_unsupported() {
        let lists = WordLists::from_words(words(&["scatter"]));
        assert!(matches!(
            lists.for_length(6),
            Err(SqncesError::UnsupportedLength(6))
        ));
        assert!(WordLists::default().is_empty());
    }

    #[test]
    fn load_dir_reads_guess_lists() {
        let dir = std::env::temp_dir().join(format!("sqnces-lists-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("guesses-6.json"), r#"["catnip", "catsup"]"#).unwrap();
        fs::write(dir.join("guesses-7.json"), r#"["scatter"]"#).unwrap();

        let lists = WordLists::load_dir(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(lists.lengths(), vec![6, 7]);
        assert_eq!(lists.for_length(6).unwrap().len(), 2);
        assert!(lists.for_length(8).is_err());
        assert!(lists.ranks_for(6).is_none());
    }

    #[test]
    fn load_dir_reads_answer_index_ranks() {
        let dir = std::env::temp_dir().join(format!("sqnces-ranks-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("guesses-6.json"), r#"["catnip", "catsup"]"#).unwrap();
        fs::write(dir.join("answers-6-index.json"), r#"{"catnip": 3, "cattle": 9}"#).unwrap();

        let lists = WordLists::load_dir(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        let ranks = lists.ranks_for(6).unwrap();
        assert_eq!(ranks.get(&Word::new("catnip").unwrap()), Some(&3));
        assert_eq!(ranks.get(&Word::new("cattle").unwrap()), Some(&9));
        assert!(!ranks.contains_key(&Word::new("catsup").unwrap()));
        // Index words rank, they do not join the guess list
        assert_eq!(lists.for_length(6).unwrap().len(), 2);
    }

    #[test]
    fn add_ranks_groups_by_length() {
        let mut lists = WordLists::from_words(words(&["catnip", "scatter"]));
        lists.add_ranks(vec![
            (Word::new("catnip").unwrap(), Some(1)),
            (Word::new("scatter").unwrap(), None),
            (Word::new("catnip").unwrap(), Some(5)),
        ]);

        assert_eq!(lists.ranks_for(6).unwrap().get(&Word::new("catnip").unwrap()), Some(&5));
        assert!(lists.ranks_for(7).is_none());
    }

    #[test]
    fn file_names_follow_length() {
        assert_eq!(list_file_name(7), "guesses-7.json");
        assert_eq!(SUPPORTED_LENGTHS.map(list_file_name)[0], "guesses-6.json");
        assert_eq!(index_file_name(8), "answers-8-index.json");
    }
}
