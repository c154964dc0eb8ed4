//! Candidate pool filtering across a session's guess results

use std::borrow::Borrow;

use tracing::trace;

use super::validator::check;
use crate::core::{GuessResult, Word};

/// Keep the candidates consistent with every result, in guess order
///
/// Result 0 is the first guess and also enforces the answer length. The pool
/// is consumed and the survivors are returned in their input order; it
/// never grows, and filtering again with the same results changes nothing.
///
/// # Examples
/// ```
/// use sqnces_solver::core::{Anchor, Word, evaluate};
/// use sqnces_solver::solver::filter;
///
/// let anchor = Anchor::new("cat").unwrap();
/// let answer = Word::new("scatter").unwrap();
/// let result = evaluate(&anchor, &Word::new("cattle").unwrap(), &answer).unwrap();
///
/// let pool = vec![answer.clone(), Word::new("catcall").unwrap()];
/// let pool = filter(pool, &[result]);
/// assert_eq!(pool, vec![answer]);
/// ```
pub fn filter<W: Borrow<Word>>(mut pool: Vec<W>, results: &[GuessResult]) -> Vec<W> {
    for (guess_number, result) in results.iter().enumerate() {
        pool.retain(|candidate| {
            let candidate = candidate.borrow();
            match check(candidate, result, guess_number == 0) {
                Ok(()) => true,
                Err(reason) => {
                    trace!(%candidate, guess = %result.guess_text(), %reason, "rejected");
                    false
                }
            }
        });
    }
    pool
}
