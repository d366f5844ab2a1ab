//! Interactive play loop for the `daily` and `infinite` commands.

use super::output::{format_guess_log, format_result, format_round_header};
use super::{CliError, FilterArgs, load_config, resolve_seed};
use chrono::{NaiveDate, Utc};
use shapeguess::{Catalog, GameMode, GuessOutcome, Session};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

/// Execute the `daily` command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or stdin fails.
pub(crate) fn execute_daily(config: Option<&Path>, date: Option<NaiveDate>) -> Result<(), CliError> {
    let config = load_config(config)?;
    let mut session = Session::open(Catalog::builtin(), &config, resolve_seed(None), Utc::now())?;
    if let Some(date) = date {
        session.start_daily(date)?;
    }
    play(&mut session)
}

/// Execute the `infinite` command.
///
/// # Errors
///
/// Returns an error if the filter admits no country or stdin fails.
pub(crate) fn execute_infinite(
    config: Option<&Path>,
    filter: FilterArgs,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let config = load_config(config)?;
    let mut session = Session::open(Catalog::builtin(), &config, resolve_seed(seed), Utc::now())?;
    session.set_filter(filter.filter());
    session.start_infinite()?;
    play(&mut session)
}

fn play(session: &mut Session<'_>) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_prompt(&mut stdout, session)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input == ":q" {
            break;
        }

        if session.round().is_finished() {
            // Only infinite rounds get here; daily ends the loop below
            session.start_infinite()?;
            print_prompt(&mut stdout, session)?;
            continue;
        }

        if let Some(query) = input.strip_prefix('?') {
            let names: Vec<&str> = session.round().suggest(query).iter().map(|c| c.name).collect();
            if names.is_empty() {
                writeln!(stdout, "  (no suggestions)")?;
            } else {
                writeln!(stdout, "  {}", names.join(", "))?;
            }
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }

        match session.submit_guess(input) {
            GuessOutcome::Accepted(_) => {
                write!(stdout, "{}", format_guess_log(&session.round().entries()))?;
            }
            GuessOutcome::Rejected(reason) => {
                debug!(?reason, input, "submission ignored");
                write!(stdout, "> ")?;
                stdout.flush()?;
                continue;
            }
        }

        if session.round().is_finished() {
            let summary = session.result_summary(Utc::now())?;
            let share = session.round().build_share_text()?;
            writeln!(stdout)?;
            write!(stdout, "{}", format_result(&summary, &share))?;
            if session.mode() == GameMode::Daily {
                break;
            }
            write!(stdout, "\nPress Enter for the next shape, :q to quit\n> ")?;
            stdout.flush()?;
        } else {
            print_prompt(&mut stdout, session)?;
        }
    }

    Ok(())
}

fn print_prompt(out: &mut impl Write, session: &Session<'_>) -> io::Result<()> {
    let round = session.round();
    writeln!(out)?;
    writeln!(out, "{}", format_round_header(round))?;
    write!(out, "{} (?text for suggestions, :q to quit)\n> ", round.input_hint())?;
    out.flush()
}
