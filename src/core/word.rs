//! Word and anchor representation
//!
//! A `Word` is a lowercase ASCII word of 3 to 27 letters. An `Anchor` is the
//! 3-letter sequence every answer and guess must contain.

use std::fmt;
use thiserror::Error;

use super::error::SqncesError;

/// Number of letters in an anchor
pub const ANCHOR_LEN: usize = 3;

/// Shortest word that can still contain an anchor
pub const MIN_WORD_LEN: usize = ANCHOR_LEN;

/// Longest word a `Pattern` can encode
pub const MAX_WORD_LEN: usize = 27;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be {MIN_WORD_LEN} to {MAX_WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Lowercase and validate raw input, shared by `Word` and `Anchor`
fn normalize(text: impl Into<String>) -> Result<String, WordError> {
    let text: String = text.into().trim().to_lowercase();

    if !text.is_ascii() {
        return Err(WordError::NonAscii);
    }

    if !text.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(WordError::InvalidCharacters);
    }

    Ok(text)
}

/// A candidate answer or guess word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside `3..=27`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use sqnces_solver::core::Word;
    ///
    /// let word = Word::new("Scatter").unwrap();
    /// assert_eq!(word.text(), "scatter");
    ///
    /// assert!(Word::new("no").is_err());
    /// assert!(Word::new("sc4tter").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = normalize(text)?;

        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (one byte per letter)
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // A Word always has at least 3 letters
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Start index of the first occurrence of `anchor`
    #[inline]
    #[must_use]
    pub fn find(&self, anchor: &Anchor) -> Option<usize> {
        self.text.find(anchor.as_str())
    }

    #[inline]
    #[must_use]
    pub fn contains_anchor(&self, anchor: &Anchor) -> bool {
        self.find(anchor).is_some()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The 3-letter sequence shared by the answer and every guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Anchor {
    text: String,
}

impl Anchor {
    /// Create an anchor, normalizing case
    ///
    /// # Errors
    /// `InvalidAnchorLength` unless the input has exactly 3 characters,
    /// `InvalidWord` if any of them is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use sqnces_solver::core::Anchor;
    ///
    /// assert_eq!(Anchor::new("CAT").unwrap().as_str(), "cat");
    /// assert!(Anchor::new("at").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SqncesError> {
        let text: String = text.into();
        let len = text.trim().chars().count();
        if len != ANCHOR_LEN {
            return Err(SqncesError::InvalidAnchorLength(len));
        }

        Ok(Self {
            text: normalize(text)?,
        })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("scatter").unwrap();
        assert_eq!(word.text(), "scatter");
        assert_eq!(word.chars(), b"scatter");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("SCATTER").unwrap();
        assert_eq!(word.text(), "scatter");

        let word2 = Word::new("ScAtTeR").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("ab"), Err(WordError::InvalidLength(2))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        let long = "a".repeat(MAX_WORD_LEN + 1);
        assert!(matches!(
            Word::new(long),
            Err(WordError::InvalidLength(28))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("catt1e"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cat tle"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cattlé"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_find_anchor_first_occurrence() {
        let anchor = Anchor::new("tat").unwrap();
        let word = Word::new("tatatat").unwrap();
        assert_eq!(word.find(&anchor), Some(0));

        let anchor = Anchor::new("cat").unwrap();
        assert_eq!(Word::new("scatter").unwrap().find(&anchor), Some(1));
        assert!(!Word::new("cattle").unwrap().contains_anchor(&Anchor::new("dog").unwrap()));
    }

    #[test]
    fn anchor_rejects_wrong_length() {
        assert!(matches!(
            Anchor::new("at"),
            Err(SqncesError::InvalidAnchorLength(2))
        ));
        assert!(matches!(
            Anchor::new("cats"),
            Err(SqncesError::InvalidAnchorLength(4))
        ));
    }

    #[test]
    fn anchor_rejects_non_letters() {
        assert!(matches!(
            Anchor::new("c4t"),
            Err(SqncesError::InvalidWord(WordError::InvalidCharacters))
        ));
    }

    #[test]
    fn anchor_normalizes_case() {
        let anchor = Anchor::new(" CaT ").unwrap();
        assert_eq!(anchor.as_str(), "cat");
        assert_eq!(format!("{anchor}"), "cat");
    }
}
