//! sqnces solver
//!
//! Feedback, filtering and entropy ranking for sqnces, the word game where
//! every guess and the answer share a 3-letter anchor and tiles are compared
//! after aligning the two words on it.
//!
//! # Quick Start
//!
//! ```rust
//! use sqnces_solver::core::{Anchor, Word, evaluate};
//! use sqnces_solver::solver::Session;
//!
//! let anchor = Anchor::new("cat").unwrap();
//! let words: Vec<Word> = ["scatter", "catcall", "wildcat", "locater"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let mut session = Session::new(anchor.clone(), 7, &words);
//! let answer = Word::new("scatter").unwrap();
//! let result = evaluate(&anchor, &Word::new("cattle").unwrap(), &answer).unwrap();
//! assert_eq!(result.to_string(), "SSSGXY");
//!
//! let observation = session.observe(result).unwrap();
//! assert!(observation.candidates_after < observation.candidates_before);
//! assert!(session.candidates().contains(&&answer));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
