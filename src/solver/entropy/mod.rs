//! Entropy-based guess ranking
//!
//! Implements Shannon entropy over sqnces feedback patterns: how many bits a
//! guess is expected to reveal about the answer. Candidates can be weighted
//! by their answer prior, and `expected_score` turns entropy and prior into
//! an expected number of turns.

mod calculator;
mod ranking;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, calculate_weighted_entropy,
    expected_score, max_entropy, shannon_entropy, weighted_shannon_entropy,
};
pub use ranking::{GuessScore, Ranking, rank, rank_guesses, rank_weighted, rank_with_progress};
