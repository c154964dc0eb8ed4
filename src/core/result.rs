//! Tile classifications and per-guess feedback results

use std::fmt;
use std::ops::RangeInclusive;

use super::error::{Result, SqncesError};
use super::pattern::Pattern;
use super::word::{ANCHOR_LEN, Anchor, Word};

/// Feedback class of a single guess tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Not yet classified; never survives evaluation
    Undefined,
    /// Part of the anchor occurrence in the guess
    Sequence,
    /// Letter matches the aligned answer position
    Correct,
    /// Letter occurs elsewhere in the answer
    Misplaced,
    /// Letter does not occur (or all copies are already accounted for)
    Incorrect,
    /// No aligned answer position exists for this tile
    Empty,
}

impl Classification {
    /// Feedback-string symbol: `S`, `G`, `Y`, `X`, `.` (`?` for `Undefined`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Undefined => '?',
            Self::Sequence => 'S',
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Incorrect => 'X',
            Self::Empty => '.',
        }
    }

    /// Parse a feedback-string symbol (emoji accepted)
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'S' | 's' | '⬜' => Some(Self::Sequence),
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            'X' | 'x' | '-' | '_' | '🟥' => Some(Self::Incorrect),
            '.' | '⬛' => Some(Self::Empty),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Undefined => '❔',
            Self::Sequence => '⬜',
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '🟥',
            Self::Empty => '⬛',
        }
    }
}

/// One classified character of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    letter: u8,
    classification: Classification,
}

impl Tile {
    #[must_use]
    pub const fn new(letter: u8, classification: Classification) -> Self {
        Self {
            letter,
            classification,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.classification
    }
}

/// Feedback for one guess: a tile per guess letter plus the answer length
///
/// Always holds exactly three contiguous `Sequence` tiles forming the anchor,
/// and no `Undefined` tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    tiles: Vec<Tile>,
    anchor: Anchor,
    guess_anchor: usize,
    answer_len: usize,
}

impl GuessResult {
    /// Assemble a result the feedback engine has fully classified
    pub(crate) fn from_classified(
        tiles: Vec<Tile>,
        anchor: Anchor,
        guess_anchor: usize,
        answer_len: usize,
    ) -> Self {
        debug_assert!(
            tiles
                .iter()
                .all(|t| t.classification != Classification::Undefined),
            "unclassified tile survived evaluation"
        );
        Self {
            tiles,
            anchor,
            guess_anchor,
            answer_len,
        }
    }

    /// Result of playing the bare anchor against an answer of `answer_len`
    ///
    /// Filtering with it keeps every word of that length containing the anchor.
    #[must_use]
    pub fn anchor_only(anchor: &Anchor, answer_len: usize) -> Self {
        let tiles = anchor
            .as_bytes()
            .iter()
            .map(|&letter| Tile::new(letter, Classification::Sequence))
            .collect();

        Self {
            tiles,
            anchor: anchor.clone(),
            guess_anchor: 0,
            answer_len,
        }
    }

    /// Build a result from a feedback string such as `"SSSGXY"`
    ///
    /// # Errors
    /// - `InvalidFeedback` if the string length differs from the guess, holds
    ///   an unknown symbol, does not mark exactly three contiguous `S` tiles,
    ///   or places `Empty` tiles anywhere but the two ends
    /// - `AnchorMismatch` if the `S` tiles do not spell `anchor`
    ///
    /// # Examples
    /// ```
    /// use sqnces_solver::core::{Anchor, GuessResult, Word};
    ///
    /// let anchor = Anchor::new("cat").unwrap();
    /// let guess = Word::new("cattle").unwrap();
    /// let result = GuessResult::from_feedback(&anchor, &guess, "SSSGXY", 7).unwrap();
    /// assert_eq!(result.guess_anchor_index(), 0);
    /// assert_eq!(result.answer_len(), 7);
    /// ```
    pub fn from_feedback(
        anchor: &Anchor,
        guess: &Word,
        feedback: &str,
        answer_len: usize,
    ) -> Result<Self> {
        let classes = feedback
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Classification::from_symbol(c)
                    .ok_or_else(|| SqncesError::InvalidFeedback(format!("unknown symbol '{c}'")))
            })
            .collect::<Result<Vec<_>>>()?;

        if classes.len() != guess.len() {
            return Err(SqncesError::InvalidFeedback(format!(
                "expected {} symbols for \"{guess}\", got {}",
                guess.len(),
                classes.len()
            )));
        }

        let sequence: Vec<usize> = classes
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == Classification::Sequence)
            .map(|(i, _)| i)
            .collect();
        let guess_anchor = match sequence.as_slice() {
            &[a, b, c] if b == a + 1 && c == b + 1 => a,
            _ => {
                return Err(SqncesError::InvalidFeedback(
                    "exactly three adjacent anchor tiles are required".to_string(),
                ));
            }
        };

        let found = &guess.chars()[guess_anchor..guess_anchor + ANCHOR_LEN];
        if found != anchor.as_bytes() {
            return Err(SqncesError::AnchorMismatch {
                expected: anchor.to_string(),
                found: String::from_utf8_lossy(found).into_owned(),
            });
        }

        let is_empty = |c: &&Classification| **c == Classification::Empty;
        let leading = classes.iter().take_while(is_empty).count();
        let trailing = classes.iter().rev().take_while(is_empty).count();
        if classes.iter().filter(is_empty).count() != leading + trailing {
            return Err(SqncesError::InvalidFeedback(
                "empty tiles may only appear at the ends".to_string(),
            ));
        }

        let tiles = guess
            .chars()
            .iter()
            .zip(classes)
            .map(|(&letter, class)| Tile::new(letter, class))
            .collect();

        Ok(Self {
            tiles,
            anchor: anchor.clone(),
            guess_anchor,
            answer_len,
        })
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The letters marked `Sequence`
    #[inline]
    #[must_use]
    pub const fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    /// Index of the first `Sequence` tile
    #[inline]
    #[must_use]
    pub const fn guess_anchor_index(&self) -> usize {
        self.guess_anchor
    }

    #[inline]
    #[must_use]
    pub fn guess_len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub const fn answer_len(&self) -> usize {
        self.answer_len
    }

    /// The guessed word, rebuilt from the tiles
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.tiles.iter().map(|t| char::from(t.letter)).collect()
    }

    #[must_use]
    pub fn count(&self, class: Classification) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.classification == class)
            .count()
    }

    /// Compact key for the classification sequence
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        Pattern::from_tiles(&self.tiles)
    }

    /// True when the guess was the answer
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.guess_len() == self.answer_len && self.pattern().is_perfect()
    }

    /// Alignment offsets (guess anchor index minus answer anchor index) that
    /// agree with the `Empty` tiles of this result
    ///
    /// Leading `Empty` tiles pin the offset to their count; trailing ones pin
    /// it through the length difference. Without either, the answer anchor
    /// cannot sit closer to an end than the guess anchor does. That admits
    /// offsets `len(guess) - len(answer) ..= 0`, a single value when the
    /// lengths match.
    #[must_use]
    pub fn anchor_offset_bounds(&self) -> RangeInclusive<isize> {
        let is_empty = |t: &&Tile| t.classification == Classification::Empty;
        let leading = self.tiles.iter().take_while(is_empty).count() as isize;
        let trailing = self.tiles.iter().rev().take_while(is_empty).count() as isize;
        let len_delta = self.guess_len() as isize - self.answer_len as isize;

        if leading > 0 {
            leading..=leading
        } else if trailing > 0 {
            let offset = len_delta - trailing;
            offset..=offset
        } else {
            len_delta..=0
        }
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile.classification.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Anchor {
        Anchor::new("cat").unwrap()
    }

    #[test]
    fn from_feedback_parses_symbols() {
        let guess = Word::new("cattle").unwrap();
        let result = GuessResult::from_feedback(&anchor(), &guess, "sssgxy", 7).unwrap();

        let classes: Vec<_> = result.tiles().iter().map(Tile::classification).collect();
        assert_eq!(
            classes,
            vec![
                Classification::Sequence,
                Classification::Sequence,
                Classification::Sequence,
                Classification::Correct,
                Classification::Incorrect,
                Classification::Misplaced,
            ]
        );
        assert_eq!(result.guess_text(), "cattle");
        assert_eq!(result.to_string(), "SSSGXY");
    }

    #[test]
    fn from_feedback_accepts_emoji() {
        let guess = Word::new("cattle").unwrap();
        let plain = GuessResult::from_feedback(&anchor(), &guess, "SSSG-Y", 7).unwrap();
        let emoji = GuessResult::from_feedback(&anchor(), &guess, "⬜⬜⬜🟩🟥🟨", 7).unwrap();
        assert_eq!(plain, emoji);
    }

    #[test]
    fn from_feedback_rejects_wrong_length() {
        let guess = Word::new("cattle").unwrap();
        assert!(matches!(
            GuessResult::from_feedback(&anchor(), &guess, "SSSGX", 7),
            Err(SqncesError::InvalidFeedback(_))
        ));
    }

    #[test]
    fn from_feedback_rejects_broken_sequence() {
        let guess = Word::new("cattle").unwrap();
        assert!(matches!(
            GuessResult::from_feedback(&anchor(), &guess, "SSXSGX", 7),
            Err(SqncesError::InvalidFeedback(_))
        ));
        assert!(matches!(
            GuessResult::from_feedback(&anchor(), &guess, "GGGGGG", 7),
            Err(SqncesError::InvalidFeedback(_))
        ));
    }

    #[test]
    fn from_feedback_rejects_wrong_anchor_letters() {
        let guess = Word::new("cattle").unwrap();
        assert!(matches!(
            GuessResult::from_feedback(&anchor(), &guess, "XSSSXX", 7),
            Err(SqncesError::AnchorMismatch { ref found, .. }) if found == "att"
        ));
    }

    #[test]
    fn from_feedback_rejects_inner_empty() {
        let guess = Word::new("bobcats").unwrap();
        assert!(matches!(
            GuessResult::from_feedback(&anchor(), &guess, "X.XSSSG", 6),
            Err(SqncesError::InvalidFeedback(_))
        ));
        assert!(GuessResult::from_feedback(&anchor(), &guess, "...SSSG", 6).is_ok());
    }

    #[test]
    fn anchor_only_has_three_sequence_tiles() {
        let result = GuessResult::anchor_only(&anchor(), 7);
        assert_eq!(result.guess_len(), 3);
        assert_eq!(result.count(Classification::Sequence), 3);
        assert_eq!(result.anchor_offset_bounds(), -4..=0);
        assert!(!result.is_solved());
    }

    #[test]
    fn offset_bounds_from_leading_empty() {
        let guess = Word::new("bobcats").unwrap();
        let result = GuessResult::from_feedback(&anchor(), &guess, "...SSSX", 6).unwrap();
        assert_eq!(result.anchor_offset_bounds(), 3..=3);
    }

    #[test]
    fn offset_bounds_from_trailing_empty() {
        let guess = Word::new("catalogs").unwrap();
        let result = GuessResult::from_feedback(&anchor(), &guess, "SSSXXX..", 6).unwrap();
        assert_eq!(result.anchor_offset_bounds(), 0..=0);
    }

    #[test]
    fn offset_bounds_equal_lengths_are_exact() {
        let guess = Word::new("cattle").unwrap();
        let result = GuessResult::from_feedback(&anchor(), &guess, "SSSXXX", 6).unwrap();
        assert_eq!(result.anchor_offset_bounds(), 0..=0);
    }

    #[test]
    fn symbols_round_trip() {
        for class in [
            Classification::Sequence,
            Classification::Correct,
            Classification::Misplaced,
            Classification::Incorrect,
            Classification::Empty,
        ] {
            assert_eq!(Classification::from_symbol(class.symbol()), Some(class));
            assert_eq!(Classification::from_symbol(class.to_emoji()), Some(class));
        }
        assert_eq!(Classification::from_symbol('?'), None);
    }
}
