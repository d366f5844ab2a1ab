//! `countries` command: list the catalog, optionally through a filter.

use super::output::format_countries;
use super::{CliError, FilterArgs, ModeArg, OutputFormat, load_config};
use shapeguess::{Catalog, Country, Eligibility, GameMode};
use std::path::Path;

/// Execute the `countries` command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub(crate) fn execute(
    config: Option<&Path>,
    mode: Option<ModeArg>,
    filter: FilterArgs,
    format: OutputFormat,
) -> Result<(), CliError> {
    let config = load_config(config)?;
    let catalog = Catalog::builtin();

    let countries: Vec<&Country> = match mode {
        None => catalog.iter().collect(),
        Some(ModeArg::Daily) => Eligibility::daily().eligible(catalog).collect(),
        Some(ModeArg::Infinite) => Eligibility::new(GameMode::Infinite, filter.filter())
            .with_difficulty_rule(config.difficulty_rule)
            .eligible(catalog)
            .collect(),
    };

    match format {
        OutputFormat::Text => print!("{}", format_countries(&countries)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&countries)?),
    }
    Ok(())
}
