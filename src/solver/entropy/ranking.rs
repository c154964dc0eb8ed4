//! Entropy ranking of guesses against a candidate pool
//!
//! Scores every guess by its expected information gain. Scoring runs on the
//! rayon pool; the ranking keeps the input order of the guesses.

use super::calculator::calculate_weighted_entropy;
use crate::core::{Anchor, Result, Word};
use rayon::prelude::*;
use tracing::debug;

/// One scored guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore<'a> {
    pub word: &'a Word,
    /// Expected information gain in bits
    pub entropy: f64,
}

/// Guesses paired with their entropy, in the order they were scored
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking<'a> {
    scores: Vec<GuessScore<'a>>,
}

impl<'a> Ranking<'a> {
    #[must_use]
    pub fn scores(&self) -> &[GuessScore<'a>] {
        &self.scores
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entropy of `word`, if it was scored
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<f64> {
        self.scores
            .iter()
            .find(|score| score.word == word)
            .map(|score| score.entropy)
    }

    /// First entry with the highest entropy, or `None` for an empty ranking
    #[must_use]
    pub fn best(&self) -> Option<GuessScore<'a>> {
        self.scores.iter().copied().fold(None, |best, score| match best {
            Some(b) if b.entropy >= score.entropy => Some(b),
            _ => Some(score),
        })
    }

    /// Scores ordered by entropy, highest first; equal scores keep input order
    #[must_use]
    pub fn sorted_descending(&self) -> Vec<GuessScore<'a>> {
        let mut sorted = self.scores.clone();
        sorted.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
        sorted
    }

    /// The `n` highest-scoring guesses; `0` returns all of them
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<GuessScore<'a>> {
        let mut sorted = self.sorted_descending();
        if n > 0 {
            sorted.truncate(n);
        }
        sorted
    }
}

/// Rank every candidate of the pool as a guess against the pool itself
///
/// # Errors
/// `AnchorNotFound` if any pool word lacks the anchor.
///
/// # Examples
/// ```
/// use sqnces_solver::core::{Anchor, Word};
/// use sqnces_solver::solver::entropy::rank;
///
/// let anchor = Anchor::new("cat").unwrap();
/// let words = vec![
///     Word::new("catnip").unwrap(),
///     Word::new("catsup").unwrap(),
///     Word::new("catgut").unwrap(),
/// ];
/// let pool: Vec<&Word> = words.iter().collect();
///
/// let ranking = rank(&anchor, &pool).unwrap();
/// assert_eq!(ranking.len(), 3);
/// assert_eq!(ranking.best().unwrap().word.text(), "catnip");
/// ```
pub fn rank<'a>(anchor: &Anchor, pool: &[&'a Word]) -> Result<Ranking<'a>> {
    rank_guesses(anchor, pool, pool)
}

/// Rank the pool against itself with `weights[i]` as the mass of `pool[i]`
///
/// # Errors
/// `WeightCountMismatch` when the weights do not line up with the pool,
/// `AnchorNotFound` if any pool word lacks the anchor.
pub fn rank_weighted<'a>(
    anchor: &Anchor,
    pool: &[&'a Word],
    weights: &[f64],
) -> Result<Ranking<'a>> {
    rank_with_progress(anchor, pool, pool, Some(weights), || {})
}

/// Rank an arbitrary guess list against the pool
///
/// # Errors
/// `AnchorNotFound` if a guess or a pool word lacks the anchor.
pub fn rank_guesses<'a>(
    anchor: &Anchor,
    guesses: &[&'a Word],
    pool: &[&Word],
) -> Result<Ranking<'a>> {
    rank_with_progress(anchor, guesses, pool, None, || {})
}

/// Rank guesses, calling `on_scored` once per finished guess
///
/// `weights`, when given, line up with `pool`. The callback runs on rayon
/// worker threads.
///
/// # Errors
/// `WeightCountMismatch` when the weights do not line up with the pool,
/// `AnchorNotFound` if a guess or a pool word lacks the anchor.
pub fn rank_with_progress<'a, F>(
    anchor: &Anchor,
    guesses: &[&'a Word],
    pool: &[&Word],
    weights: Option<&[f64]>,
    on_scored: F,
) -> Result<Ranking<'a>>
where
    F: Fn() + Sync,
{
    let scores = guesses
        .par_iter()
        .map(|&word| {
            let entropy = calculate_weighted_entropy(anchor, word, pool, weights)?;
            on_scored();
            Ok(GuessScore { word, entropy })
        })
        .collect::<Result<Vec<_>>>()?;

    let ranking = Ranking { scores };
    if let Some(best) = ranking.best() {
        debug!(
            pool = pool.len(),
            guesses = guesses.len(),
            weighted = weights.is_some(),
            best = %best.word,
            entropy = best.entropy,
            "ranked guesses"
        );
    }
    Ok(ranking)
}
