//! Ranking shared by the commands, with a progress bar for large pools

use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;

use crate::core::{Result, Word};
use crate::solver::Session;
use crate::solver::entropy::{Ranking, expected_score, max_entropy};

/// Pools larger than this show a progress bar while ranking
pub const PROGRESS_THRESHOLD: usize = 500;

/// A ranked guess detached from the session's borrows
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: String,
    pub entropy: f64,
    /// Normalized prior of the word being the answer
    pub probability: f64,
    /// Expected turns to finish when playing this word next, lower is better
    pub expected_score: f64,
}

/// Rank the session's candidates, drawing a bar on stderr for big pools
///
/// # Errors
/// Propagates ranking failures.
pub fn rank_session<'a>(session: &Session<'a>) -> Result<Ranking<'a>> {
    let pool = session.candidates().len();
    if pool <= PROGRESS_THRESHOLD {
        return session.rank();
    }

    let pb = ProgressBar::new(pool as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message("scoring guesses");

    let ranking = session.rank_with_progress(|| pb.inc(1));
    pb.finish_and_clear();
    ranking
}

/// The `top` best guesses as owned suggestions (`0` keeps all)
///
/// Every scored guess gets an expected score first, charging the turn after
/// the session's last guess against the pool's current `log2(n)`. Suggestions
/// are ordered by that score, lowest first, and only then cut to `top`.
/// Equal scores keep the entropy order.
#[must_use]
pub fn suggestions(session: &Session<'_>, ranking: &Ranking<'_>, top: usize) -> Vec<Suggestion> {
    let probabilities: FxHashMap<&Word, f64> = session
        .candidates()
        .iter()
        .copied()
        .zip(session.probabilities())
        .collect();
    let previous_entropy = max_entropy(session.candidates().len());
    let upcoming_turn = session.guesses().len() + 1;

    let mut ranked: Vec<Suggestion> = ranking
        .sorted_descending()
        .into_iter()
        .map(|score| {
            let probability = probabilities.get(score.word).copied().unwrap_or(0.0);
            Suggestion {
                word: score.word.text().to_string(),
                entropy: score.entropy,
                probability,
                expected_score: expected_score(
                    probability,
                    score.entropy,
                    previous_entropy,
                    upcoming_turn,
                ),
            }
        })
        .collect();
    ranked.sort_by(|a, b| a.expected_score.total_cmp(&b.expected_score));
    if top > 0 {
        ranked.truncate(top);
    }
    ranked
}
