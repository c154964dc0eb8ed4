//! Game analysis command
//!
//! Replays a finished game: scores each guess against the known answer,
//! narrows the pool after every guess and ranks what would be best next.

use anyhow::{Context, Result};

use super::ranking::{Suggestion, rank_session, suggestions};
use crate::core::{Anchor, GuessResult, SqncesError, Word, evaluate_all};
use crate::solver::entropy::max_entropy;
use crate::solver::{AnswerPrior, Observation, Session};

/// Inputs of one analysis run
pub struct AnalyzeConfig {
    pub answer_len: usize,
    pub anchor: String,
    pub guesses: Vec<String>,
    pub answer: String,
    /// How many next guesses to keep per step (`0` keeps all)
    pub top: usize,
}

/// What a guess did to the pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    Narrowed(Observation),
    /// No candidate survived; the run stops here
    Exhausted { candidates_before: usize },
}

/// One replayed guess
pub struct AnalysisStep {
    pub result: GuessResult,
    pub outcome: StepOutcome,
    /// Remaining candidates, best next guess first
    pub suggestions: Vec<Suggestion>,
}

/// Result of replaying a game
pub struct AnalysisReport {
    pub anchor: Anchor,
    pub answer: Word,
    pub initial_candidates: usize,
    pub initial_entropy: f64,
    pub steps: Vec<AnalysisStep>,
}

impl AnalysisReport {
    /// Whether one of the guesses was the answer
    #[must_use]
    pub fn solved(&self) -> bool {
        self.steps.iter().any(|step| step.result.is_solved())
    }

    /// Whether the pool ran dry before the guesses did
    #[must_use]
    pub fn exhausted(&self) -> bool {
        self.steps
            .last()
            .is_some_and(|step| matches!(step.outcome, StepOutcome::Exhausted { .. }))
    }
}

/// Replay `config.guesses` against `config.answer` over `words`
///
/// Suggestions are weighted by `prior`.
///
/// # Errors
///
/// Returns an error if:
/// - The anchor, the answer or a guess is not a valid word
/// - The answer has the wrong length or lacks the anchor
/// - A guess lacks the anchor
pub fn analyze_game(
    config: &AnalyzeConfig,
    words: &[Word],
    prior: AnswerPrior<'_>,
) -> Result<AnalysisReport> {
    let anchor = Anchor::new(config.anchor.as_str()).context("invalid anchor")?;
    let answer = Word::new(config.answer.as_str())
        .with_context(|| format!("invalid answer \"{}\"", config.answer))?;

    if answer.len() != config.answer_len {
        return Err(SqncesError::AnswerLengthMismatch {
            word: answer.to_string(),
            expected: config.answer_len,
            found: answer.len(),
        }
        .into());
    }
    if !answer.contains_anchor(&anchor) {
        return Err(SqncesError::AnchorNotFound {
            anchor: anchor.to_string(),
            word: answer.to_string(),
        }
        .into());
    }

    let guesses = config
        .guesses
        .iter()
        .map(|g| Word::new(g.as_str()).with_context(|| format!("invalid guess \"{g}\"")))
        .collect::<Result<Vec<_>>>()?;

    let results = evaluate_all(&anchor, &guesses, &answer).context("cannot score guesses")?;

    let mut session = Session::new(anchor.clone(), config.answer_len, words).with_prior(prior);
    let initial_candidates = session.candidates().len();
    let mut steps = Vec::with_capacity(results.len());

    for result in results {
        match session.observe(result.clone()) {
            Ok(observation) => {
                let ranking = rank_session(&session)?;
                steps.push(AnalysisStep {
                    result,
                    outcome: StepOutcome::Narrowed(observation),
                    suggestions: suggestions(&session, &ranking, config.top),
                });
            }
            Err(SqncesError::EmptyCandidatePool) => {
                let candidates_before = steps
                    .last()
                    .map_or(initial_candidates, |step: &AnalysisStep| match step.outcome {
                        StepOutcome::Narrowed(obs) => obs.candidates_after,
                        StepOutcome::Exhausted { .. } => 0,
                    });
                steps.push(AnalysisStep {
                    result,
                    outcome: StepOutcome::Exhausted { candidates_before },
                    suggestions: Vec::new(),
                });
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(AnalysisReport {
        anchor,
        answer,
        initial_candidates,
        initial_entropy: max_entropy(initial_candidates),
        steps,
    })
}
