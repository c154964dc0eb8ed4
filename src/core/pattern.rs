//! sqnces feedback pattern representation
//!
//! A pattern encodes the classification of every guess tile using base-5
//! digits, least significant digit first:
//! - 0 = Sequence (anchor tile)
//! - 1 = Correct
//! - 2 = Misplaced
//! - 3 = Incorrect
//! - 4 = Empty
//!
//! Up to 27 tiles fit in a `u64`. The tile count is stored alongside, so
//! patterns of different guess lengths never compare equal.

use std::fmt;

use super::result::{Classification, Tile};
use super::word::MAX_WORD_LEN;

const BASE: u64 = 5;

/// Feedback pattern of a guess, usable as a hash key for bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    digits: u64,
    len: u8,
}

const fn digit(class: Classification) -> u64 {
    match class {
        // Undefined never reaches a pattern; GuessResult rejects it
        Classification::Sequence | Classification::Undefined => 0,
        Classification::Correct => 1,
        Classification::Misplaced => 2,
        Classification::Incorrect => 3,
        Classification::Empty => 4,
    }
}

const fn class_of(digit: u64) -> Classification {
    match digit {
        0 => Classification::Sequence,
        1 => Classification::Correct,
        2 => Classification::Misplaced,
        3 => Classification::Incorrect,
        _ => Classification::Empty,
    }
}

impl Pattern {
    fn from_classes(classes: impl IntoIterator<Item = Classification>) -> Self {
        let mut digits = 0u64;
        let mut multiplier = 1u64;
        let mut len = 0u8;

        for class in classes {
            digits += digit(class) * multiplier;
            multiplier = multiplier.wrapping_mul(BASE);
            len += 1;
        }

        Self { digits, len }
    }

    /// Encode the classifications of `tiles`
    ///
    /// # Panics
    /// Panics in debug mode if there are more than 27 tiles
    #[must_use]
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        debug_assert!(tiles.len() <= MAX_WORD_LEN, "Pattern holds at most 27 tiles");
        Self::from_classes(tiles.iter().map(Tile::classification))
    }

    /// Get the raw base-5 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.digits
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Every guess has at least 3 tiles
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Every tile's classification, in guess order
    pub fn classifications(self) -> impl Iterator<Item = Classification> {
        let mut val = self.digits;
        (0..self.len).map(move |_| {
            let class = class_of(val % BASE);
            val /= BASE;
            class
        })
    }

    /// Check if every tile is either anchor or correct
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.classifications()
            .all(|c| matches!(c, Classification::Sequence | Classification::Correct))
    }

    /// Parse a pattern from a string like "SSSGXY" or "⬜⬜⬜🟩🟥🟨"
    ///
    /// Accepts:
    /// - 'S'/'s'/⬜ for the anchor
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for misplaced
    /// - 'X'/'x'/'-'/'_'/🟥 for incorrect
    /// - '.'/⬛ for empty
    ///
    /// # Examples
    /// ```
    /// use sqnces_solver::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("SSSGXY").unwrap();
    /// let p2 = Pattern::from_str("⬜⬜⬜🟩🟥🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let classes: Option<Vec<Classification>> =
            s.chars().map(Classification::from_symbol).collect();
        let classes = classes?;

        if classes.is_empty() || classes.len() > MAX_WORD_LEN {
            return None;
        }

        Some(Self::from_classes(classes))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use sqnces_solver::core::Pattern;
    ///
    /// let p = Pattern::from_str("SSSGXY.").unwrap();
    /// assert_eq!(p.to_emoji(), "⬜⬜⬜🟩🟥🟨⬛");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.classifications().map(Classification::to_emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in self.classifications() {
            write!(f, "{}", class.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
