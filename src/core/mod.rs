//! Core domain types for sqnces
//!
//! Words, anchors, alignment and the feedback engine. Everything here is
//! pure: no I/O, no shared state.

mod alignment;
mod error;
mod feedback;
mod pattern;
mod result;
mod word;

pub use alignment::Alignment;
pub use error::{Result, SqncesError};
pub use feedback::{evaluate, evaluate_all};
pub use pattern::Pattern;
pub use result::{Classification, GuessResult, Tile};
pub use word::{ANCHOR_LEN, Anchor, MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
