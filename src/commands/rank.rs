//! Opening ranking command

use anyhow::{Context, Result};

use super::ranking::{Suggestion, rank_session, suggestions};
use crate::core::{Anchor, Word};
use crate::solver::entropy::max_entropy;
use crate::solver::{AnswerPrior, Session};

/// Best first guesses for a puzzle before any feedback
pub struct OpeningReport {
    pub anchor: Anchor,
    pub answer_len: usize,
    pub candidates: usize,
    /// log₂ of the candidate count
    pub entropy: f64,
    pub suggestions: Vec<Suggestion>,
}

/// Rank every candidate of the given length as an opening guess
///
/// # Errors
///
/// Returns an error if the anchor is invalid.
pub fn rank_opening(
    answer_len: usize,
    anchor: &str,
    words: &[Word],
    prior: AnswerPrior<'_>,
    top: usize,
) -> Result<OpeningReport> {
    let anchor = Anchor::new(anchor).context("invalid anchor")?;
    let session = Session::new(anchor.clone(), answer_len, words).with_prior(prior);
    let ranking = rank_session(&session)?;

    Ok(OpeningReport {
        anchor,
        answer_len,
        candidates: session.candidates().len(),
        entropy: max_entropy(session.candidates().len()),
        suggestions: suggestions(&session, &ranking, top),
    })
}
