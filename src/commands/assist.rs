//! Interactive assist mode
//!
//! Suggests the best guess, reads the guess actually played and the
//! feedback the game showed, and narrows the pool. Text based, line by line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::ranking::{rank_session, suggestions};
use crate::core::{ANCHOR_LEN, Anchor, GuessResult, SqncesError, Word};
use crate::output::formatters::{format_probability, format_tiles, result_to_emoji};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{AnswerPrior, Session};

/// Candidate lists at most this long are printed in full
const SHOW_CANDIDATES: usize = 10;

enum Input {
    Quit,
    NewGame,
    Undo,
    Line(String),
}

fn parse_input(line: &str) -> Input {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "undo" | "u" => Input::Undo,
        _ => Input::Line(line.to_string()),
    }
}

/// Print `prompt` and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read input")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Feedback of a winning guess: `S` on the anchor, `G` everywhere else
fn winning_feedback(guess: &Word, anchor: &Anchor) -> Option<String> {
    let start = guess.find(anchor)?;
    Some(
        (0..guess.len())
            .map(|i| if (start..start + ANCHOR_LEN).contains(&i) { 'S' } else { 'G' })
            .collect(),
    )
}

/// What one prompt produced
enum Reply<T> {
    Got(T),
    /// Handled already (command, or bad input reported); start the turn over
    Again,
    /// Quit or end of input
    Stop,
}

fn new_game<W: Write>(session: &mut Session<'_>, out: &mut W) -> Result<()> {
    session.reset();
    writeln!(out, "\n🔄 New game started!\n")?;
    Ok(())
}

/// Print the turn header, the suggested guess and the short candidate list
fn print_turn<W: Write>(
    session: &Session<'_>,
    top: usize,
    turn: usize,
    out: &mut W,
) -> Result<()> {
    let candidates = session.candidates().len();
    writeln!(out, "{}", "─".repeat(62))?;
    writeln!(out, "Turn {turn}: {candidates} candidates remaining")?;
    writeln!(out, "{}", "─".repeat(62))?;

    let ranking = rank_session(session)?;
    let ranked = suggestions(session, &ranking, top);
    let suggested = ranked.split_first().and_then(|(best, rest)| {
        session
            .candidates()
            .iter()
            .find(|w| w.text() == best.word)
            .map(|word| (*word, best, rest))
    });
    if let Some((word, best, rest)) = suggested {
        let metrics = calculate_metrics(session.anchor(), word, session.candidates())?;
        writeln!(out, "\n📊 Suggested guess: {}", best.word.to_uppercase())?;
        writeln!(out, "   Entropy:          {:.3} bits", best.entropy)?;
        writeln!(
            out,
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        )?;
        writeln!(out, "   Worst case:       {} candidates", metrics.max_partition)?;
        writeln!(out, "   Probability:      {}", format_probability(best.probability))?;
        writeln!(out, "   Expected score:   {:.2} turns", best.expected_score)?;

        for s in rest {
            writeln!(
                out,
                "   also: {} ({:.3} bits, score {:.2})",
                s.word, s.entropy, s.expected_score
            )?;
        }
    }
    writeln!(out)?;

    if candidates <= SHOW_CANDIDATES {
        writeln!(out, "Remaining candidates:")?;
        for candidate in session.candidates() {
            writeln!(out, "  • {}", candidate.text().to_uppercase())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Offer `undo`, `new` or `quit` once no candidate is left
fn recover_empty_pool<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    turn: usize,
    input: &mut R,
    out: &mut W,
) -> Result<Reply<()>> {
    writeln!(out, "\n❌ No candidates remain! Your feedback may be incorrect.")?;
    writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;

    let Some(line) = read_line(input, out, "Command")? else {
        return Ok(Reply::Stop);
    };
    match parse_input(&line) {
        Input::Quit => return Ok(Reply::Stop),
        Input::NewGame => new_game(session, out)?,
        Input::Undo => {
            if session.undo().is_some() {
                writeln!(out, "✓ Undone! Back to turn {}\n", turn - 1)?;
            }
        }
        Input::Line(_) => {}
    }
    Ok(Reply::Again)
}

/// Read the guess actually played, or run the command typed instead
fn read_guess<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    turn: usize,
    input: &mut R,
    out: &mut W,
) -> Result<Reply<Word>> {
    let Some(line) = read_line(input, out, "Guess played (or command)")? else {
        return Ok(Reply::Stop);
    };
    match parse_input(&line) {
        Input::Quit => {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            Ok(Reply::Stop)
        }
        Input::NewGame => {
            new_game(session, out)?;
            Ok(Reply::Again)
        }
        Input::Undo => {
            if session.undo().is_some() {
                writeln!(out, "✓ Undone! Back to turn {}\n", turn - 1)?;
            } else {
                writeln!(out, "Nothing to undo!\n")?;
            }
            Ok(Reply::Again)
        }
        Input::Line(text) => match Word::new(text) {
            Ok(word) if word.contains_anchor(session.anchor()) => Ok(Reply::Got(word)),
            Ok(_) => {
                writeln!(
                    out,
                    "❌ The guess must contain {}\n",
                    session.anchor().as_str().to_uppercase()
                )?;
                Ok(Reply::Again)
            }
            Err(e) => {
                writeln!(out, "❌ {e}\n")?;
                Ok(Reply::Again)
            }
        },
    }
}

/// Read the feedback shown for `guess` and turn it into a result
fn read_result<R: BufRead, W: Write>(
    session: &Session<'_>,
    guess: &Word,
    input: &mut R,
    out: &mut W,
) -> Result<Reply<GuessResult>> {
    let Some(line) = read_line(input, out, "Feedback")? else {
        return Ok(Reply::Stop);
    };
    let feedback = match line.to_lowercase().as_str() {
        "win" | "correct" | "solved" => {
            winning_feedback(guess, session.anchor()).unwrap_or_default()
        }
        _ => line,
    };

    match GuessResult::from_feedback(session.anchor(), guess, &feedback, session.answer_len()) {
        Ok(result) => Ok(Reply::Got(result)),
        Err(e) => {
            writeln!(out, "❌ {e}\n")?;
            Ok(Reply::Again)
        }
    }
}

/// Print the solved banner and ask for another game; `Stop` ends the loop
fn finish_game<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<Reply<()>> {
    writeln!(out, "\n{}", "🎉 SOLVED!".bright_green().bold())?;
    writeln!(out, "\n  Guess history:")?;
    for (i, result) in session.guesses().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            i + 1,
            result.guess_text().to_uppercase(),
            result_to_emoji(result)
        )?;
    }
    writeln!(out)?;

    if let Some("yes" | "y") = read_line(input, out, "Play again? (yes/no)")?.as_deref() {
        new_game(session, out)?;
        Ok(Reply::Again)
    } else {
        writeln!(out, "\n👋 Thanks for playing!\n")?;
        Ok(Reply::Stop)
    }
}

/// Run the assist loop until `quit` or end of input
///
/// Suggestions are weighted by `prior`.
///
/// # Errors
///
/// Returns an error on I/O failure or an invalid anchor. Bad guesses and bad
/// feedback are reported and asked for again.
pub fn run_assist<R: BufRead, W: Write>(
    answer_len: usize,
    anchor: &str,
    words: &[Word],
    prior: AnswerPrior<'_>,
    top: usize,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let anchor = Anchor::new(anchor).context("invalid anchor")?;
    let mut session = Session::new(anchor.clone(), answer_len, words).with_prior(prior);

    writeln!(out, "\n{}", "═".repeat(62).cyan())?;
    writeln!(
        out,
        "  sqnces assist: {answer_len} letters, anchor {}",
        anchor.as_str().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}\n", "═".repeat(62).cyan())?;
    writeln!(out, "After each guess, enter the feedback the game showed:")?;
    writeln!(out, "  - S/⬜ for the anchor, G/🟩 correct, Y/🟨 misplaced")?;
    writeln!(out, "  - X/-/🟥 incorrect, ./⬛ empty, or 'win' if solved")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")?;

    loop {
        let turn = session.guesses().len() + 1;

        if session.candidates().is_empty() {
            match recover_empty_pool(&mut session, turn, input, out)? {
                Reply::Stop => return Ok(()),
                Reply::Got(()) | Reply::Again => continue,
            }
        }

        print_turn(&session, top, turn, out)?;

        let guess = match read_guess(&mut session, turn, input, out)? {
            Reply::Got(guess) => guess,
            Reply::Again => continue,
            Reply::Stop => return Ok(()),
        };
        let result = match read_result(&session, &guess, input, out)? {
            Reply::Got(result) => result,
            Reply::Again => continue,
            Reply::Stop => return Ok(()),
        };

        writeln!(out, "\n{}", format_tiles(&result))?;
        match session.observe(result) {
            Ok(observation) => {
                writeln!(
                    out,
                    "Possible answers: {} → {}",
                    observation.candidates_before, observation.candidates_after
                )?;
                if observation.reduction.abs() > f64::EPSILON {
                    writeln!(out, "Actual reduction: {:.2} bits\n", observation.reduction)?;
                }
            }
            Err(SqncesError::EmptyCandidatePool) => continue,
            Err(e) => {
                writeln!(out, "❌ {e}\n")?;
                continue;
            }
        }

        if session.is_solved() && matches!(finish_game(&mut session, input, out)?, Reply::Stop) {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn word_list() -> Vec<Word> {
        ["scatter", "catcall", "wildcat", "bobcats", "catnips", "locater", "cattish"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    fn run(script: &str) -> String {
        colored::control::set_override(false);
        let words = word_list();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_assist(7, "cat", &words, AnswerPrior::uniform(), 3, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let out = run("");
        assert!(out.contains("Turn 1: 7 candidates remaining"));
        assert!(out.contains("Suggested guess"));
        assert!(out.contains("Probability:      0.14"));
        assert!(out.contains("Expected score:"));
    }

    #[test]
    fn feedback_narrows_the_pool() {
        let out = run("cattle\nSSSGXY\nquit\n");
        assert!(out.contains("Possible answers: 7 → "));
        assert!(out.contains("Turn 2:"));
        assert!(out.contains("SCATTER"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn win_shortcut_solves() {
        let out = run("wildcat\nwin\nno\n");
        assert!(out.contains("SOLVED"));
        assert!(out.contains("1. WILDCAT 🟩🟩🟩🟩⬜⬜⬜"));
    }

    #[test]
    fn undo_goes_back_a_turn() {
        let out = run("cattle\nSSSGXY\nundo\nquit\n");
        assert!(out.contains("Undone! Back to turn 1"));
        assert_eq!(out.matches("Turn 1: 7 candidates remaining").count(), 2);
    }

    #[test]
    fn bad_input_is_asked_again() {
        let out = run("dogged\ncattle\nSSSG\ncattle\nSSSGXY\nq\n");
        assert!(out.contains("must contain CAT"));
        assert!(out.contains("invalid feedback"));
        assert!(out.contains("Turn 2:"));
    }

    #[test]
    fn contradictory_feedback_offers_undo() {
        let out = run("catzzzz\nSSSGGGG\nundo\nquit\n");
        assert!(out.contains("No candidates remain"));
        assert!(out.contains("Undone! Back to turn 1"));
    }

    #[test]
    fn new_game_and_play_again_restart() {
        let out = run("cattle\nSSSGXY\nnew\nwildcat\nwin\nyes\nq\n");
        assert_eq!(out.matches("New game started").count(), 2);
        assert_eq!(out.matches("Turn 1: 7 candidates remaining").count(), 3);
        assert!(out.contains("1. WILDCAT"));
    }

    #[test]
    fn nothing_to_undo_at_start() {
        let out = run("undo\nquit\n");
        assert!(out.contains("Nothing to undo!"));
    }

    #[test]
    fn winning_feedback_marks_anchor() {
        let anchor = Anchor::new("cat").unwrap();
        let guess = Word::new("scatter").unwrap();
        assert_eq!(winning_feedback(&guess, &anchor).unwrap(), "GSSSGGG");
    }
}
