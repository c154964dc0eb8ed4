//! sqnces solving: narrowing the candidate pool and ranking guesses
//!
//! The validator decides whether one candidate fits one result, the filter
//! applies it across a whole history, and the session ties both to the
//! entropy ranker for a running puzzle. Answer priors from frequency ranks
//! weight the ranker's buckets.

pub mod entropy;
mod filter;
pub mod prior;
mod session;
pub mod validator;

pub use filter::filter;
pub use prior::AnswerPrior;
pub use session::{Observation, Session};
pub use validator::{Inconsistency, is_consistent};
