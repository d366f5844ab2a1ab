//! `suggest` command: run the autocomplete for one query.

use super::{CliError, FilterArgs, ModeArg, OutputFormat, load_config};
use shapeguess::{Catalog, Eligibility, GameMode, GuessEngine};
use std::path::Path;

/// Execute the `suggest` command.
///
/// `guessed` lists names already used in the round; they are never suggested.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub(crate) fn execute(
    config: Option<&Path>,
    query: &str,
    mode: ModeArg,
    filter: FilterArgs,
    guessed: &[String],
    format: OutputFormat,
) -> Result<(), CliError> {
    let config = load_config(config)?;
    let rule = match mode {
        ModeArg::Daily => Eligibility::daily(),
        ModeArg::Infinite => Eligibility::new(GameMode::Infinite, filter.filter()),
    }
    .with_difficulty_rule(config.difficulty_rule);

    let engine = GuessEngine::new(Catalog::builtin(), rule).with_limit(config.suggestion_limit);
    let suggestions = engine.suggest(query, guessed);

    match format {
        OutputFormat::Text => {
            for country in &suggestions {
                println!("{}", country.name);
            }
        }
        OutputFormat::Json => {
            let names: Vec<&str> = suggestions.iter().map(|c| c.name).collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
    }
    Ok(())
}
