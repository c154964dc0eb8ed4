//! Shannon entropy calculation for sqnces patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.
//! Candidates may carry weights (answer priors); a bucket's probability is then
//! its share of the total weight instead of its share of the count.

use crate::core::{Anchor, Pattern, Result, SqncesError, Word, evaluate};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Errors
/// `AnchorNotFound` if the guess or any candidate lacks the anchor.
///
/// # Examples
/// ```
/// use sqnces_solver::core::{Anchor, Word};
/// use sqnces_solver::solver::entropy::calculate_entropy;
///
/// let anchor = Anchor::new("cat").unwrap();
/// let guess = Word::new("cattle").unwrap();
/// let candidates = vec![
///     Word::new("scatter").unwrap(),
///     Word::new("wildcat").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&anchor, &guess, &candidate_refs).unwrap();
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
pub fn calculate_entropy(anchor: &Anchor, guess: &Word, candidates: &[&Word]) -> Result<f64> {
    calculate_weighted_entropy(anchor, guess, candidates, None)
}

/// Entropy of the feedback with `weights[i]` as the mass of `candidates[i]`
///
/// `None` counts every candidate once, which is what equal weights give too.
///
/// # Errors
/// - `WeightCountMismatch` when the weights do not line up with the candidates
/// - `AnchorNotFound` if the guess or any candidate lacks the anchor
pub fn calculate_weighted_entropy(
    anchor: &Anchor,
    guess: &Word,
    candidates: &[&Word],
    weights: Option<&[f64]>,
) -> Result<f64> {
    match weights {
        None if candidates.is_empty() => Ok(0.0),
        None => Ok(shannon_entropy(&group_by_pattern(anchor, guess, candidates)?)),
        Some(weights) => Ok(weighted_shannon_entropy(&group_weights(
            anchor, guess, candidates, weights,
        )?)),
    }
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(
    anchor: &Anchor,
    guess: &Word,
    candidates: &[&Word],
) -> Result<FxHashMap<Pattern, usize>> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = evaluate(anchor, guess, candidate)?.pattern();
        *counts.entry(pattern).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Sum the candidate weights per pattern
fn group_weights(
    anchor: &Anchor,
    guess: &Word,
    candidates: &[&Word],
    weights: &[f64],
) -> Result<FxHashMap<Pattern, f64>> {
    if weights.len() != candidates.len() {
        return Err(SqncesError::WeightCountMismatch {
            candidates: candidates.len(),
            weights: weights.len(),
        });
    }

    let mut masses = FxHashMap::default();
    for (&candidate, &weight) in candidates.iter().zip(weights) {
        let pattern = evaluate(anchor, guess, candidate)?.pattern();
        *masses.entry(pattern).or_insert(0.0) += weight;
    }

    Ok(masses)
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use sqnces_solver::solver::entropy::shannon_entropy;
/// use sqnces_solver::core::Pattern;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::from_str("SSSG").unwrap(), 25);
/// uniform.insert(Pattern::from_str("SSSY").unwrap(), 25);
/// uniform.insert(Pattern::from_str("SSSX").unwrap(), 25);
/// uniform.insert(Pattern::from_str("SSS.").unwrap(), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Shannon entropy of weighted buckets, `p = mass / total mass`
///
/// Zero or negative masses are skipped; a zero total gives 0.
#[must_use]
pub fn weighted_shannon_entropy<S>(
    pattern_masses: &std::collections::HashMap<Pattern, f64, S>,
) -> f64
where
    S: std::hash::BuildHasher,
{
    let total: f64 = pattern_masses.values().filter(|&&m| m > 0.0).sum();

    if total <= 0.0 {
        return 0.0;
    }

    pattern_masses
        .values()
        .filter(|&&mass| mass > 0.0)
        .map(|&mass| {
            let p = mass / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected number of turns to finish when guessing a word next
///
/// A hit (chance `probability`) ends on `upcoming_turn`. A miss costs that
/// turn plus the turns still needed for the uncertainty left over,
/// `x = previous_entropy - guess_entropy` bits, estimated by
/// `0.713049·ln(1 + 0.863437·x) + 0.056182·x`.
#[must_use]
pub fn expected_score(
    probability: f64,
    guess_entropy: f64,
    previous_entropy: f64,
    upcoming_turn: usize,
) -> f64 {
    let x = (previous_entropy - guess_entropy).max(0.0);
    let turn = upcoming_turn as f64;
    let remaining = 0.713_049 * (0.863_437 * x).ln_1p() + 0.056_182 * x;
    probability * turn + (1.0 - probability) * (turn + 1.0 + remaining)
}

/// Entropy of `n` equally likely candidates: log₂(n), or 0 for an empty pool
///
/// The difference between two of these is the uncertainty a real guess removed.
#[must_use]
pub fn max_entropy(n: usize) -> f64 {
    if n == 0 { 0.0 } else { (n as f64).log2() }
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
///
/// # Errors
/// `AnchorNotFound` if the guess or any candidate lacks the anchor.
pub fn calculate_metrics(
    anchor: &Anchor,
    guess: &Word,
    candidates: &[&Word],
) -> Result<GuessMetrics> {
    if candidates.is_empty() {
        return Ok(GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        });
    }

    let pattern_counts = group_by_pattern(anchor, guess, candidates)?;
    let total = candidates.len() as f64;

    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    Ok(GuessMetrics {
        entropy: shannon_entropy(&pattern_counts),
        expected_remaining,
        max_partition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> Pattern {
        Pattern::from_str(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(pattern("SSSG"), 1);
        counts.insert(pattern("SSSY"), 1);
        counts.insert(pattern("SSSX"), 1);
        counts.insert(pattern("SSS."), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(pattern("SSSG"), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut uniform = FxHashMap::default();
        uniform.insert(pattern("SSSG"), 25);
        uniform.insert(pattern("SSSY"), 25);
        uniform.insert(pattern("SSSX"), 25);

        let mut skewed = FxHashMap::default();
        skewed.insert(pattern("SSSG"), 73);
        skewed.insert(pattern("SSSY"), 1);
        skewed.insert(pattern("SSSX"), 1);

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!((shannon_entropy(&counts) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn max_entropy_values() {
        assert!((max_entropy(0) - 0.0).abs() < f64::EPSILON);
        assert!((max_entropy(1) - 0.0).abs() < f64::EPSILON);
        assert!((max_entropy(8) - 3.0).abs() < 1e-12);
        // Reduction from 16 to 2 candidates is 3 bits
        assert!((max_entropy(16) - max_entropy(2) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn perfect_split_reaches_the_ceiling() {
        // Against each of these the guess produces a different pattern
        let anchor = Anchor::new("cat").unwrap();
        let candidates = words(&["catnip", "catsup", "catgut"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let entropy = calculate_entropy(&anchor, &candidates[0], &refs).unwrap();
        assert!((entropy - max_entropy(3)).abs() < 1e-9);
    }

    #[test]
    fn identical_patterns_give_zero() {
        // Guess letters absent from every candidate: all patterns equal
        let anchor = Anchor::new("cat").unwrap();
        let guess = Word::new("catzzz").unwrap();
        let candidates = words(&["catnip", "catsup", "catgut"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let entropy = calculate_entropy(&anchor, &guess, &refs).unwrap();
        assert!(entropy.abs() < 1e-12);
    }

    #[test]
    fn entropy_empty_candidates() {
        let anchor = Anchor::new("cat").unwrap();
        let guess = Word::new("cattle").unwrap();
        let entropy = calculate_entropy(&anchor, &guess, &[]).unwrap();
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_propagates_missing_anchor() {
        let anchor = Anchor::new("cat").unwrap();
        let guess = Word::new("cattle").unwrap();
        let candidates = words(&["catnip", "dogleg"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        assert!(calculate_entropy(&anchor, &guess, &refs).is_err());
    }

    #[test]
    fn metrics_describe_partition() {
        let anchor = Anchor::new("cat").unwrap();
        let guess = Word::new("catzzz").unwrap();
        let candidates = words(&["catnip", "catsup", "catgut", "catzzz"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let metrics = calculate_metrics(&anchor, &guess, &refs).unwrap();

        // Buckets: {catnip, catsup, catgut} and {catzzz}
        assert_eq!(metrics.max_partition, 3);
        assert!((metrics.expected_remaining - 2.5).abs() < 1e-9);
        assert!(metrics.entropy > 0.0 && metrics.entropy < 1.0);
    }

    #[test]
    fn uniform_weights_match_counts() {
        let anchor = Anchor::new("cat").unwrap();
        let candidates = words(&["catnip", "catsup", "catgut", "catzzz", "catsip"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        for guess in &candidates {
            let plain = calculate_entropy(&anchor, guess, &refs).unwrap();
            for weight in [0.5, 1.0, 3.0] {
                let weights = vec![weight; refs.len()];
                let weighted =
                    calculate_weighted_entropy(&anchor, guess, &refs, Some(&weights)).unwrap();
                assert!((plain - weighted).abs() < 1e-12, "{guess} at {weight}");
            }
        }
    }

    #[test]
    fn weights_shift_bucket_probabilities() {
        // Buckets {catnip, catsup, catgut} and {catzzz}
        let anchor = Anchor::new("cat").unwrap();
        let guess = Word::new("catzzz").unwrap();
        let candidates = words(&["catnip", "catsup", "catgut", "catzzz"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        // Equal mass on both buckets is one full bit
        let weights = [1.0, 1.0, 1.0, 3.0];
        let entropy = calculate_weighted_entropy(&anchor, &guess, &refs, Some(&weights)).unwrap();
        assert!((entropy - 1.0).abs() < 1e-12);

        // A weightless candidate drops out
        let weights = [1.0, 1.0, 1.0, 0.0];
        let entropy = calculate_weighted_entropy(&anchor, &guess, &refs, Some(&weights)).unwrap();
        assert!(entropy.abs() < 1e-12);
    }

    #[test]
    fn mismatched_weights_are_rejected() {
        let anchor = Anchor::new("cat").unwrap();
        let candidates = words(&["catnip", "catsup"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let err = calculate_weighted_entropy(&anchor, &candidates[0], &refs, Some(&[1.0]))
            .unwrap_err();
        assert!(matches!(
            err,
            SqncesError::WeightCountMismatch {
                candidates: 2,
                weights: 1
            }
        ));
    }

    #[test]
    fn weighted_entropy_of_nothing_is_zero() {
        let masses: FxHashMap<Pattern, f64> = FxHashMap::default();
        assert!(weighted_shannon_entropy(&masses).abs() < f64::EPSILON);

        let mut zero = FxHashMap::default();
        zero.insert(pattern("SSSG"), 0.0);
        assert!(weighted_shannon_entropy(&zero).abs() < f64::EPSILON);
    }

    #[test]
    fn expected_score_follows_turn_cost() {
        // A certain hit finishes on the upcoming turn
        assert!((expected_score(1.0, 0.0, 3.0, 2) - 2.0).abs() < 1e-12);
        // A sure miss that leaves nothing unknown costs exactly one more turn
        assert!((expected_score(0.0, 3.0, 3.0, 2) - 3.0).abs() < 1e-12);

        let x: f64 = 4.0;
        let miss = 2.0 + 0.713_049 * (1.0 + 0.863_437 * x).ln() + 0.056_182 * x;
        let expected = 0.25 * 1.0 + 0.75 * miss;
        assert!((expected_score(0.25, 1.0, 5.0, 1) - expected).abs() < 1e-12);

        // More information now means fewer turns later
        assert!(expected_score(0.1, 2.0, 5.0, 1) < expected_score(0.1, 1.0, 5.0, 1));
    }

    #[test]
    fn group_by_pattern_counts_everything() {
        let anchor = Anchor::new("cat").unwrap();
        let guess = Word::new("catnip").unwrap();
        let candidates = words(&["catnip", "catsup", "catgut"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let groups = group_by_pattern(&anchor, &guess, &refs).unwrap();
        assert_eq!(groups.values().sum::<usize>(), 3);
    }
}
