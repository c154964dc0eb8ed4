//! Anchor alignment between a guess and a target word
//!
//! Guess positions and target positions only correspond once both anchor
//! occurrences are lined up. Every index translation in the crate goes
//! through [`Alignment`], so the feedback engine and the validator agree on
//! which guess tile lands on which target letter.

use std::ops::Range;

use super::error::{Result, SqncesError};
use super::word::{ANCHOR_LEN, Anchor, Word};

/// Positional relationship between a guess and a target (answer or candidate)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    guess_anchor: usize,
    target_anchor: usize,
    guess_len: usize,
    target_len: usize,
}

impl Alignment {
    #[must_use]
    pub const fn new(
        guess_anchor: usize,
        target_anchor: usize,
        guess_len: usize,
        target_len: usize,
    ) -> Self {
        Self {
            guess_anchor,
            target_anchor,
            guess_len,
            target_len,
        }
    }

    /// Align `guess` to `target` on the first occurrence of `anchor` in each
    ///
    /// # Errors
    /// `AnchorNotFound` naming whichever word lacks the anchor.
    pub fn locate(anchor: &Anchor, guess: &Word, target: &Word) -> Result<Self> {
        let find = |word: &Word| {
            word.find(anchor).ok_or_else(|| SqncesError::AnchorNotFound {
                anchor: anchor.to_string(),
                word: word.to_string(),
            })
        };

        Ok(Self::new(find(guess)?, find(target)?, guess.len(), target.len()))
    }

    #[inline]
    #[must_use]
    pub const fn guess_anchor(&self) -> usize {
        self.guess_anchor
    }

    #[inline]
    #[must_use]
    pub const fn target_anchor(&self) -> usize {
        self.target_anchor
    }

    /// How far the guess's anchor sits to the right of the target's
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> isize {
        self.guess_anchor as isize - self.target_anchor as isize
    }

    /// Target position lined up with `guess_index`, if any
    #[inline]
    #[must_use]
    pub const fn target_index(&self, guess_index: usize) -> Option<usize> {
        let index = guess_index as isize - self.offset();
        if index >= 0 && (index as usize) < self.target_len {
            Some(index as usize)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_guess_anchor(&self, guess_index: usize) -> bool {
        guess_index >= self.guess_anchor && guess_index < self.guess_anchor + ANCHOR_LEN
    }

    #[inline]
    #[must_use]
    pub const fn is_target_anchor(&self, target_index: usize) -> bool {
        target_index >= self.target_anchor && target_index < self.target_anchor + ANCHOR_LEN
    }

    /// Guess tiles hanging off the start of the target
    #[must_use]
    pub const fn leading_empty(&self) -> usize {
        let offset = self.offset();
        if offset > 0 { offset as usize } else { 0 }
    }

    /// Guess tiles hanging off the end of the target
    #[must_use]
    pub const fn trailing_empty(&self) -> usize {
        let overhang = self.guess_len as isize - self.target_len as isize - self.offset();
        if overhang > 0 { overhang as usize } else { 0 }
    }

    /// Guess positions that map onto a real target position
    #[must_use]
    pub const fn window(&self) -> Range<usize> {
        let start = self.leading_empty();
        let end = self.guess_len.saturating_sub(self.trailing_empty());
        if end < start { start..start } else { start..end }
    }
}
