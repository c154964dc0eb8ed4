//! Consistency of a candidate answer with one observed guess result
//!
//! Tile indices in a `GuessResult` are guess-relative, so every check first
//! aligns the guess to the candidate with the same `Alignment` the feedback
//! engine uses, then reads the tile's constraint at the aligned position.

use thiserror::Error;

use crate::core::{Alignment, Classification, GuessResult, Word};

const ALPHABET: usize = 26;

/// Why a candidate cannot be the answer behind a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Inconsistency {
    #[error("length {found} differs from answer length {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("anchor is missing")]
    MissingAnchor,

    #[error("anchor offset {offset} contradicts the empty tiles")]
    AnchorMisplaced { offset: isize },

    #[error("correct tile {index} does not match")]
    CorrectMismatch { index: usize },

    #[error("'{letter}' occurs more often than the feedback allows")]
    IncorrectPresent { letter: char },

    #[error("misplaced tile {index} sits in its own position")]
    MisplacedInPlace { index: usize },

    #[error("'{letter}' occurs less often than the feedback requires")]
    MisplacedAbsent { letter: char },
}

#[inline]
fn slot(letter: u8) -> usize {
    usize::from(letter - b'a')
}

/// Check `candidate` against `result`, reporting the first failed constraint
///
/// Checks run in order: answer length (first guess only), anchor presence,
/// anchor placement, `Correct` tiles, `Incorrect` tiles, `Misplaced` tiles.
///
/// # Errors
/// The `Inconsistency` of the first failing check.
pub fn check(
    candidate: &Word,
    result: &GuessResult,
    is_first_guess: bool,
) -> Result<(), Inconsistency> {
    if is_first_guess && candidate.len() != result.answer_len() {
        return Err(Inconsistency::LengthMismatch {
            expected: result.answer_len(),
            found: candidate.len(),
        });
    }

    let candidate_anchor = candidate
        .find(result.anchor())
        .ok_or(Inconsistency::MissingAnchor)?;

    let alignment = Alignment::new(
        result.guess_anchor_index(),
        candidate_anchor,
        result.guess_len(),
        candidate.len(),
    );
    if !result.anchor_offset_bounds().contains(&alignment.offset()) {
        return Err(Inconsistency::AnchorMisplaced {
            offset: alignment.offset(),
        });
    }

    let letters = candidate.chars();

    // Letters of the candidate outside its anchor occurrence
    let mut available = [0u8; ALPHABET];
    for (j, &letter) in letters.iter().enumerate() {
        if !alignment.is_target_anchor(j) {
            available[slot(letter)] += 1;
        }
    }

    // Copies of each letter the feedback proves present
    let mut credited = [0u8; ALPHABET];
    for tile in result.tiles() {
        if matches!(
            tile.classification(),
            Classification::Correct | Classification::Misplaced
        ) {
            credited[slot(tile.letter())] += 1;
        }
    }

    let aligned = |i: usize| alignment.target_index(i).map(|j| (j, letters[j]));
    let tiles_of = |class: Classification| {
        result
            .tiles()
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.classification() == class)
    };

    for (i, tile) in tiles_of(Classification::Correct) {
        match aligned(i) {
            Some((j, letter)) if letter == tile.letter() && !alignment.is_target_anchor(j) => {}
            _ => return Err(Inconsistency::CorrectMismatch { index: i }),
        }
    }

    for (i, tile) in tiles_of(Classification::Incorrect) {
        let letter = tile.letter();
        let in_place = aligned(i).is_some_and(|(_, l)| l == letter);
        if in_place || available[slot(letter)] > credited[slot(letter)] {
            return Err(Inconsistency::IncorrectPresent {
                letter: char::from(letter),
            });
        }
    }

    for (i, tile) in tiles_of(Classification::Misplaced) {
        let letter = tile.letter();
        if aligned(i).is_some_and(|(_, l)| l == letter) {
            return Err(Inconsistency::MisplacedInPlace { index: i });
        }
        if available[slot(letter)] < credited[slot(letter)] {
            return Err(Inconsistency::MisplacedAbsent {
                letter: char::from(letter),
            });
        }
    }

    Ok(())
}

/// Whether `candidate` could be the answer that produced `result`
#[must_use]
pub fn is_consistent(candidate: &Word, result: &GuessResult, is_first_guess: bool) -> bool {
    check(candidate, result, is_first_guess).is_ok()
}
