//! Answer priors from word frequency ranks
//!
//! Common words are likelier answers. A word's rank in the answer index goes
//! through a logistic curve centred on a per-length cutoff rank, so words well
//! inside the cutoff weigh close to 1 and obscure words close to 0.

use rustc_hash::FxHashMap;

use crate::core::Word;

/// Steepness of the logistic curve, per rank
pub const SIGMOID_SLOPE: f64 = 0.01;

/// Rank assumed for words missing from the index
pub const UNRANKED: u64 = 999_999;

/// Prior of every word when no ranks are available
pub const UNIFORM_PRIOR: f64 = 0.5;

/// Rank at which a word of `length` letters is as likely an answer as not
#[must_use]
pub const fn cutoff(length: usize) -> Option<u64> {
    match length {
        6 => Some(4400),
        7 => Some(5770),
        8 => Some(4700),
        _ => None,
    }
}

/// `1 / (1 + e^(-slope * (cutoff - rank)))`
#[must_use]
pub fn sigmoid(rank: u64, cutoff: u64) -> f64 {
    1.0 / (1.0 + (-SIGMOID_SLOPE * (cutoff as f64 - rank as f64)).exp())
}

/// Per-word answer prior for one answer length
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerPrior<'a> {
    ranked: Option<(&'a FxHashMap<Word, u64>, u64)>,
}

impl<'a> AnswerPrior<'a> {
    /// Every word weighs [`UNIFORM_PRIOR`]
    #[must_use]
    pub const fn uniform() -> Self {
        Self { ranked: None }
    }

    /// Prior from `ranks` for `length`-letter answers
    ///
    /// Falls back to uniform when there are no ranks or the length has no
    /// cutoff.
    #[must_use]
    pub fn new(ranks: Option<&'a FxHashMap<Word, u64>>, length: usize) -> Self {
        Self {
            ranked: ranks.zip(cutoff(length)),
        }
    }

    #[must_use]
    pub const fn is_uniform(&self) -> bool {
        self.ranked.is_none()
    }

    /// Unnormalized prior of `word`
    #[must_use]
    pub fn weight(&self, word: &Word) -> f64 {
        match self.ranked {
            None => UNIFORM_PRIOR,
            Some((ranks, cutoff)) => {
                sigmoid(ranks.get(word).copied().unwrap_or(UNRANKED), cutoff)
            }
        }
    }

    /// Priors of `words`, aligned with the slice
    #[must_use]
    pub fn weights(&self, words: &[&Word]) -> Vec<f64> {
        words.iter().map(|&word| self.weight(word)).collect()
    }

    /// Priors of `words` scaled to sum to 1
    #[must_use]
    pub fn probabilities(&self, words: &[&Word]) -> Vec<f64> {
        normalize(&self.weights(words))
    }
}

/// Scale `weights` to sum to 1; a zero total gives equal shares
#[must_use]
pub fn normalize(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        let share = 1.0 / weights.len().max(1) as f64;
        return vec![share; weights.len()];
    }
    weights.iter().map(|w| w / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(entries: &[(&str, u64)]) -> FxHashMap<Word, u64> {
        entries
            .iter()
            .map(|&(w, rank)| (Word::new(w).unwrap(), rank))
            .collect()
    }

    #[test]
    fn sigmoid_is_half_at_cutoff() {
        assert!((sigmoid(4400, 4400) - 0.5).abs() < 1e-12);
        assert!(sigmoid(100, 4400) > 0.999);
        assert!(sigmoid(UNRANKED, 4400) < 1e-12);
        // e^-1 at one hundred ranks past the cutoff
        assert!((sigmoid(4500, 4400) - 1.0 / (1.0 + 1f64.exp())).abs() < 1e-12);
    }

    #[test]
    fn cutoffs_per_length() {
        assert_eq!(cutoff(6), Some(4400));
        assert_eq!(cutoff(7), Some(5770));
        assert_eq!(cutoff(8), Some(4700));
        assert_eq!(cutoff(5), None);
    }

    #[test]
    fn uniform_without_ranks() {
        let word = Word::new("sensory").unwrap();
        assert!((AnswerPrior::uniform().weight(&word) - UNIFORM_PRIOR).abs() < f64::EPSILON);
        assert!(AnswerPrior::new(None, 7).is_uniform());

        let ranks = ranks(&[("sensory", 1)]);
        // No cutoff for this length
        assert!(AnswerPrior::new(Some(&ranks), 9).is_uniform());
    }

    #[test]
    fn ranked_words_outweigh_unranked() {
        let ranks = ranks(&[("sensory", 12), ("sonnets", 5770)]);
        let prior = AnswerPrior::new(Some(&ranks), 7);
        let common = Word::new("sensory").unwrap();
        let middling = Word::new("sonnets").unwrap();
        let missing = Word::new("unsound").unwrap();

        assert!(!prior.is_uniform());
        assert!(prior.weight(&common) > 0.99);
        assert!((prior.weight(&middling) - 0.5).abs() < 1e-12);
        assert!((prior.weight(&missing) - sigmoid(UNRANKED, 5770)).abs() < f64::EPSILON);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let ranks = ranks(&[("catnip", 10), ("catsup", 4400)]);
        let words: Vec<Word> = ["catnip", "catsup", "catgut"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let refs: Vec<&Word> = words.iter().collect();

        let probs = AnswerPrior::new(Some(&ranks), 6).probabilities(&refs);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(probs[0] > probs[1] && probs[1] > probs[2]);

        let uniform = AnswerPrior::uniform().probabilities(&refs);
        assert!(uniform.iter().all(|p| (p - 1.0 / 3.0).abs() < 1e-12));
    }

    #[test]
    fn normalize_handles_zero_total() {
        assert_eq!(normalize(&[0.0, 0.0]), vec![0.5, 0.5]);
        assert!(normalize(&[]).is_empty());
    }
}
