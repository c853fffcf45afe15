//! Simple interactive CLI mode
//!
//! Line-based suggestion loop without the TUI

use crate::core::{Error, FeedbackPattern, Word};
use crate::output::formatters::{colored_guess, pattern_to_emoji};
use crate::solver::{RankedSuggestion, Session};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Pools at or below this size are listed in full
const SHOW_POOL_LIMIT: usize = 10;

/// What the player asked for at a prompt
enum Reply<T> {
    Value(T),
    Undo,
    New,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if ranking fails for a
/// reason other than an empty pool.
pub fn run_simple(session: &mut Session<'_>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, stdin.lock(), io::stdout())
}

/// Run the interactive loop over any input and output
///
/// Ends cleanly on `quit` or end of input.
///
/// # Errors
/// Same as [`run_simple`].
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    mut input: R,
    mut out: W,
) -> Result<()> {
    print_banner(&mut out)?;

    loop {
        let turn = session.history().len() + 1;
        let candidates = session.pool().len();

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(out, "Turn {turn}: {candidates} candidates remaining")?;
        writeln!(out, "{}", "─".repeat(60))?;

        let suggestions = match session.suggest() {
            Ok(suggestions) => suggestions,
            Err(Error::EmptyPool) => {
                writeln!(out, "\n❌ No candidates remain! Your feedback may be incorrect.")?;
                writeln!(out, "Type 'undo' to go back, 'new' to start over or 'quit'.\n")?;
                match read_command(&mut input, &mut out)? {
                    Reply::Undo | Reply::Value(()) => undo(session, &mut out)?,
                    Reply::New => new_game(session, &mut out)?,
                    Reply::Quit => return farewell(&mut out),
                }
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        print_suggestions(&mut out, &suggestions, candidates)?;
        if candidates <= SHOW_POOL_LIMIT {
            writeln!(out, "Remaining candidates:")?;
            for word in session.pool().iter() {
                writeln!(out, "  • {}", word.text().to_uppercase())?;
            }
            writeln!(out)?;
        }

        let default = suggestions[0].word;
        let guess = match read_guess(&mut input, &mut out, default)? {
            Reply::Value(guess) => guess,
            Reply::Undo => {
                undo(session, &mut out)?;
                continue;
            }
            Reply::New => {
                new_game(session, &mut out)?;
                continue;
            }
            Reply::Quit => return farewell(&mut out),
        };

        let pattern = match read_pattern(&mut input, &mut out)? {
            Reply::Value(pattern) => pattern,
            Reply::Undo => {
                undo(session, &mut out)?;
                continue;
            }
            Reply::New => {
                new_game(session, &mut out)?;
                continue;
            }
            Reply::Quit => return farewell(&mut out),
        };

        if let Err(e) = session.apply(guess, pattern) {
            writeln!(out, "❌ {e}\n")?;
            continue;
        }

        if pattern.is_solved() {
            print_victory(&mut out, session)?;
            match prompt(&mut input, &mut out, "Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    new_game(session, &mut out)?;
                }
                _ => return farewell(&mut out),
            }
        }
    }
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║            Wordle Suggest - Interactive Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Each turn I rank a sample of the remaining words by expected information.")?;
    writeln!(out, "Enter the word you played (Enter accepts my top pick), then its feedback:\n")?;
    writeln!(out, "  - G, 2 or 🟩 for green (correct position)")?;
    writeln!(out, "  - Y, 1 or 🟨 for yellow (wrong position)")?;
    writeln!(out, "  - -, 0 or ⬜ for gray (not in word)")?;
    writeln!(out, "  - Or type 'win' if you got it right!\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")
}

fn print_suggestions<W: Write>(
    out: &mut W,
    suggestions: &[RankedSuggestion<'_>],
    candidates: usize,
) -> io::Result<()> {
    writeln!(out, "\n📊 Suggested guesses:")?;
    for (i, suggestion) in suggestions.iter().enumerate() {
        let expected = candidates as f64 / suggestion.entropy.exp2();
        writeln!(
            out,
            "   {}. {}  {:.3} bits  (~{expected:.1} left)",
            i + 1,
            suggestion.word.text().to_uppercase().bright_white().bold(),
            suggestion.entropy,
        )?;
    }
    writeln!(out)
}

fn print_victory<W: Write>(out: &mut W, session: &Session<'_>) -> io::Result<()> {
    let turns = session.history().len();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "           🎉  W O R D L E   S O L V E D !  🎉".bright_green().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, turn) in session.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_guess(turn.guess.text(), turn.pattern),
            pattern_to_emoji(turn.pattern)
        )?;
    }
    writeln!(out)
}

fn undo<W: Write>(session: &mut Session<'_>, out: &mut W) -> io::Result<()> {
    match session.undo() {
        Some(turn) => writeln!(
            out,
            "✓ Undid {}. Back to turn {}\n",
            turn.guess.text().to_uppercase(),
            session.history().len() + 1
        ),
        None => writeln!(out, "Nothing to undo!\n"),
    }
}

fn new_game<W: Write>(session: &mut Session<'_>, out: &mut W) -> io::Result<()> {
    session.reset();
    writeln!(out, "\n🔄 New game started!\n")
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Map a command word, if the input is one
fn command<T>(input: &str) -> Option<Reply<T>> {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Reply::Quit),
        "new" | "n" => Some(Reply::New),
        "undo" | "u" => Some(Reply::Undo),
        _ => None,
    }
}

fn read_command<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Reply<()>> {
    loop {
        let Some(line) = prompt(input, out, "Command")? else {
            return Ok(Reply::Quit);
        };
        if let Some(reply) = command(&line) {
            return Ok(reply);
        }
        writeln!(out, "Unknown command '{line}'\n")?;
    }
}

fn read_guess<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default: &Word,
) -> Result<Reply<Word>> {
    let label = format!(
        "Word played (Enter for {})",
        default.text().to_uppercase()
    );
    loop {
        let Some(line) = prompt(input, out, &label)? else {
            return Ok(Reply::Quit);
        };
        if line.is_empty() {
            return Ok(Reply::Value(default.clone()));
        }
        if let Some(reply) = command(&line) {
            return Ok(reply);
        }
        match Word::new(&line) {
            Ok(word) => return Ok(Reply::Value(word)),
            Err(e) => writeln!(out, "❌ {e}\n")?,
        }
    }
}

fn read_pattern<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Reply<FeedbackPattern>> {
    loop {
        let Some(line) = prompt(input, out, "Feedback (G/Y/-, 2/1/0, 'win', or command)")? else {
            return Ok(Reply::Quit);
        };
        if matches!(
            line.to_lowercase().as_str(),
            "win" | "correct" | "yes" | "solved"
        ) {
            return Ok(Reply::Value(FeedbackPattern::SOLVED));
        }
        if let Some(reply) = command(&line) {
            return Ok(reply);
        }
        match FeedbackPattern::parse(&line) {
            Ok(pattern) => return Ok(Reply::Value(pattern)),
            Err(e) if e.is_invalid_pattern() => {
                writeln!(out, "❌ {e}. Use G/Y/-, 2/1/0 or 🟩🟨⬜\n")?;
            }
            Err(e) => writeln!(out, "❌ {e}\n")?,
        }
    }
}

/// Prompt for one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
