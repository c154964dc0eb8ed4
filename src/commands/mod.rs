//! Command implementations

pub mod analyze;
pub mod assist;
pub mod rank;
mod ranking;

pub use analyze::{AnalysisReport, AnalysisStep, AnalyzeConfig, StepOutcome, analyze_game};
pub use assist::run_assist;
pub use rank::{OpeningReport, rank_opening};
pub use ranking::{PROGRESS_THRESHOLD, Suggestion, rank_session, suggestions};
