//! One sqnces analysis session
//!
//! Owns the feedback history and the current candidate pool for a fixed
//! anchor and answer length. The backing word list is borrowed and never
//! modified; the pool holds references into it.

use tracing::debug;

use super::entropy::{self, Ranking, max_entropy};
use super::filter::filter;
use super::prior::AnswerPrior;
use crate::core::{Anchor, GuessResult, Result, SqncesError, Word};

/// Candidate counts and entropy figures after one observed guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// log₂ of the pool size before the guess
    pub entropy_before: f64,
    /// log₂ of the pool size after the guess
    pub entropy_after: f64,
    /// Bits of uncertainty the guess actually removed
    pub reduction: f64,
}

/// Guess history and candidate pool for one puzzle
pub struct Session<'a> {
    anchor: Anchor,
    answer_len: usize,
    words: &'a [Word],
    prior: AnswerPrior<'a>,
    history: Vec<GuessResult>,
    pool: Vec<&'a Word>,
}

impl<'a> Session<'a> {
    /// Start a session over `words`
    ///
    /// The history is seeded with the anchor-only result, so the pool starts
    /// as the words of `answer_len` letters that contain the anchor.
    #[must_use]
    pub fn new(anchor: Anchor, answer_len: usize, words: &'a [Word]) -> Self {
        let history = vec![GuessResult::anchor_only(&anchor, answer_len)];
        let pool = filter(words.iter().collect(), &history);
        debug!(%anchor, answer_len, words = words.len(), pool = pool.len(), "session started");

        Self {
            anchor,
            answer_len,
            words,
            prior: AnswerPrior::uniform(),
            history,
            pool,
        }
    }

    /// Weight candidates by `prior` when ranking
    #[must_use]
    pub fn with_prior(mut self, prior: AnswerPrior<'a>) -> Self {
        self.prior = prior;
        self
    }

    #[must_use]
    pub const fn prior(&self) -> &AnswerPrior<'a> {
        &self.prior
    }

    #[must_use]
    pub const fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    #[must_use]
    pub const fn answer_len(&self) -> usize {
        self.answer_len
    }

    /// Candidates still consistent with every observed result
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.pool
    }

    /// Every result in order, starting with the anchor-only seed
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// Observed guesses, without the seed
    #[must_use]
    pub fn guesses(&self) -> &[GuessResult] {
        &self.history[1..]
    }

    /// Chance of each candidate being the answer, aligned with `candidates()`
    #[must_use]
    pub fn probabilities(&self) -> Vec<f64> {
        self.prior.probabilities(&self.pool)
    }

    /// Whether the last observed guess was the answer
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.guesses().last().is_some_and(GuessResult::is_solved)
    }

    /// Record one guess result and narrow the pool
    ///
    /// # Errors
    /// - `AnchorMismatch` or `InvalidFeedback` when the result belongs to a
    ///   different puzzle; nothing is recorded
    /// - `EmptyCandidatePool` when no candidate survives; the result stays in
    ///   the history so it can be undone
    pub fn observe(&mut self, result: GuessResult) -> Result<Observation> {
        if result.anchor() != &self.anchor {
            return Err(SqncesError::AnchorMismatch {
                expected: self.anchor.to_string(),
                found: result.anchor().to_string(),
            });
        }
        if result.answer_len() != self.answer_len {
            return Err(SqncesError::InvalidFeedback(format!(
                "result is for answer length {}, session has {}",
                result.answer_len(),
                self.answer_len
            )));
        }

        let candidates_before = self.pool.len();
        self.history.push(result);
        self.pool = filter(std::mem::take(&mut self.pool), &self.history);
        let candidates_after = self.pool.len();

        debug!(
            guess = self.history.len() - 1,
            candidates_before, candidates_after, "observed"
        );

        if self.pool.is_empty() {
            return Err(SqncesError::EmptyCandidatePool);
        }

        let entropy_before = max_entropy(candidates_before);
        let entropy_after = max_entropy(candidates_after);
        Ok(Observation {
            candidates_before,
            candidates_after,
            entropy_before,
            entropy_after,
            reduction: entropy_before - entropy_after,
        })
    }

    /// Drop the last observed result and rebuild the pool
    ///
    /// Returns `None` when only the seed is left.
    pub fn undo(&mut self) -> Option<GuessResult> {
        if self.history.len() <= 1 {
            return None;
        }
        let undone = self.history.pop();
        self.rebuild();
        undone
    }

    /// Forget every observed result
    pub fn reset(&mut self) {
        self.history.truncate(1);
        self.rebuild();
    }

    /// Rank the current candidates as guesses, weighted by the prior
    ///
    /// # Errors
    /// Never fails in practice: every pool word contains the anchor.
    pub fn rank(&self) -> Result<Ranking<'a>> {
        self.rank_with_progress(|| {})
    }

    /// Rank the current candidates, calling `on_scored` after each guess
    ///
    /// # Errors
    /// See [`Session::rank`].
    pub fn rank_with_progress<F>(&self, on_scored: F) -> Result<Ranking<'a>>
    where
        F: Fn() + Sync,
    {
        // A uniform prior weighs every bucket by its count
        let weights = (!self.prior.is_uniform()).then(|| self.prior.weights(&self.pool));
        entropy::rank_with_progress(
            &self.anchor,
            &self.pool,
            &self.pool,
            weights.as_deref(),
            on_scored,
        )
    }

    fn rebuild(&mut self) {
        self.pool = filter(self.words.iter().collect(), &self.history);
    }
}
