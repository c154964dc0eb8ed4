//! sqncesbot - CLI
//!
//! Analyzes sqnces puzzles: replays finished games, ranks opening guesses
//! and assists a game in progress, using the entropy of the feedback.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sqnces_solver::{
    commands::{AnalyzeConfig, analyze_game, rank_opening, run_assist},
    core::Word,
    output::{print_analysis_report, print_opening_report},
    solver::AnswerPrior,
    wordlists::{SUPPORTED_LENGTHS, WordLists},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sqncesbot",
    about = "A tool that analyzes sqnces puzzles with information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding guesses-6.json, guesses-7.json and guesses-8.json,
    /// plus the optional answers-N-index.json frequency ranks
    #[arg(long, global = true, env = "SQNCES_LISTS_DIR", default_value = ".")]
    lists_dir: PathBuf,

    /// Single word list file to use instead of the lists directory
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// How many ranked guesses to show (0 shows all)
    #[arg(long, global = true, default_value = "20")]
    top: usize,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a finished game: tiles, remaining answers and best next guesses
    Analyze {
        /// Answer length
        length: usize,
        /// The 3-letter anchor
        anchor: String,
        /// Guesses in the order played, followed by the answer
        #[arg(required = true, num_args = 2..)]
        words: Vec<String>,
    },

    /// Rank opening guesses for a puzzle
    Rank {
        /// Answer length
        length: usize,
        /// The 3-letter anchor
        anchor: String,
    },

    /// Interactive mode: suggests guesses and reads the game's feedback
    Assist {
        /// Answer length
        length: usize,
        /// The 3-letter anchor
        anchor: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

/// Load word lists based on the -w flag
///
/// - no flag: `guesses-{6,7,8}.json` from the lists directory
/// - `<path>`: one list file, any lengths
fn load_wordlists(cli: &Cli) -> Result<WordLists> {
    let lists = match &cli.wordlist {
        Some(path) => WordLists::load_file(path)
            .with_context(|| format!("cannot load word list {}", path.display()))?,
        None => WordLists::load_dir(&cli.lists_dir).with_context(|| {
            format!("cannot load word lists from {}", cli.lists_dir.display())
        })?,
    };
    debug!(words = lists.len(), lengths = ?lists.lengths(), "word lists ready");
    Ok(lists)
}

fn words_for(lists: &WordLists, length: usize) -> Result<&[Word]> {
    lists.for_length(length).with_context(|| {
        format!(
            "no words of length {length} (shipped lengths: {SUPPORTED_LENGTHS:?}); \
             check --lists-dir or --wordlist"
        )
    })
}

/// Frequency prior for `length`, uniform when no ranks were loaded
fn prior_for(lists: &WordLists, length: usize) -> AnswerPrior<'_> {
    let prior = AnswerPrior::new(lists.ranks_for(length), length);
    debug!(length, uniform = prior.is_uniform(), "answer prior");
    prior
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lists = load_wordlists(&cli)?;

    match &cli.command {
        Commands::Analyze {
            length,
            anchor,
            words,
        } => run_analyze_command(&lists, *length, anchor, words, cli.top),
        Commands::Rank { length, anchor } => {
            let report = rank_opening(
                *length,
                anchor,
                words_for(&lists, *length)?,
                prior_for(&lists, *length),
                cli.top,
            )?;
            print_opening_report(&report);
            Ok(())
        }
        Commands::Assist { length, anchor } => {
            let stdin = io::stdin();
            run_assist(
                *length,
                anchor,
                words_for(&lists, *length)?,
                prior_for(&lists, *length),
                cli.top,
                &mut stdin.lock(),
                &mut io::stdout(),
            )
        }
    }
}

fn run_analyze_command(
    lists: &WordLists,
    length: usize,
    anchor: &str,
    words: &[String],
    top: usize,
) -> Result<()> {
    // clap guarantees at least one guess and the answer
    let (answer, guesses) = words
        .split_last()
        .context("expected guesses followed by the answer")?;

    let config = AnalyzeConfig {
        answer_len: length,
        anchor: anchor.to_string(),
        guesses: guesses.to_vec(),
        answer: answer.clone(),
        top,
    };
    let report = analyze_game(&config, words_for(lists, length)?, prior_for(lists, length))?;
    print_analysis_report(&report);
    Ok(())
}
