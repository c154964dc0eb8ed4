//! Feedback calculation: classify every guess tile against an answer
//!
//! The guess is first aligned to the answer on their anchor occurrences.
//! Tiles outside the overlap window are `Empty`; inside it the usual
//! exact-then-present matching applies, with each answer letter consumed at
//! most once.

use super::alignment::Alignment;
use super::error::Result;
use super::result::{Classification, GuessResult, Tile};
use super::word::{ANCHOR_LEN, Anchor, Word};

/// Classify each tile of `guess` when `answer` is the target
///
/// # Algorithm
/// 1. Mark the anchor tiles `Sequence` and blank the answer's anchor letters
/// 2. Mark tiles outside the overlap window `Empty`
/// 3. First pass: exact aligned matches are `Correct` and consume the letter
/// 4. Second pass, left to right: letters still present elsewhere are
///    `Misplaced` and consume their first remaining occurrence; the rest are
///    `Incorrect`
///
/// # Errors
/// `AnchorNotFound` if either word lacks the anchor.
///
/// # Examples
/// ```
/// use sqnces_solver::core::{Anchor, Word, evaluate};
///
/// let anchor = Anchor::new("cat").unwrap();
/// let guess = Word::new("cattle").unwrap();
/// let answer = Word::new("scatter").unwrap();
///
/// let result = evaluate(&anchor, &guess, &answer).unwrap();
/// assert_eq!(result.to_string(), "SSSGXY");
/// ```
pub fn evaluate(anchor: &Anchor, guess: &Word, answer: &Word) -> Result<GuessResult> {
    let alignment = Alignment::locate(anchor, guess, answer)?;
    let letters = guess.chars();

    // Working copy of the answer; `None` marks a consumed letter
    let mut remaining: Vec<Option<u8>> = answer.chars().iter().copied().map(Some).collect();
    let mut classes = vec![Classification::Undefined; letters.len()];

    let gi = alignment.guess_anchor();
    let ai = alignment.target_anchor();
    for k in 0..ANCHOR_LEN {
        classes[gi + k] = Classification::Sequence;
        remaining[ai + k] = None;
    }

    let window = alignment.window();
    for (i, class) in classes.iter_mut().enumerate() {
        if !window.contains(&i) {
            *class = Classification::Empty;
        }
    }

    // First pass: exact aligned matches
    for i in window.clone() {
        if classes[i] != Classification::Undefined {
            continue;
        }
        if let Some(j) = alignment.target_index(i)
            && remaining[j] == Some(letters[i])
        {
            classes[i] = Classification::Correct;
            remaining[j] = None;
        }
    }

    // Second pass: present elsewhere, or absent
    for i in window {
        if classes[i] != Classification::Undefined {
            continue;
        }
        classes[i] = match remaining.iter_mut().find(|slot| **slot == Some(letters[i])) {
            Some(slot) => {
                *slot = None;
                Classification::Misplaced
            }
            None => Classification::Incorrect,
        };
    }

    let tiles = letters
        .iter()
        .zip(classes)
        .map(|(&letter, class)| Tile::new(letter, class))
        .collect();

    Ok(GuessResult::from_classified(
        tiles,
        anchor.clone(),
        gi,
        answer.len(),
    ))
}

/// Evaluate every guess of a session against the same answer, in order
///
/// # Errors
/// Stops at the first guess (or the answer) lacking the anchor.
pub fn evaluate_all(anchor: &Anchor, guesses: &[Word], answer: &Word) -> Result<Vec<GuessResult>> {
    guesses
        .iter()
        .map(|guess| evaluate(anchor, guess, answer))
        .collect()
}
