//! `simulate` command: autoplay many infinite rounds in parallel.

use super::output::{JsonSimulationResult, SimulationStats, format_simulation_text};
use super::{CliError, FilterArgs, OutputFormat, load_config, resolve_seed};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use shapeguess::autoplay::play_round;
use shapeguess::{Catalog, InfiniteSelector, Round};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Execute the `simulate` command.
///
/// Round `i` uses seed `base + i` for both target selection and the
/// autoplayer, so a run is reproducible from its seed.
///
/// # Errors
///
/// Returns an error if the filter admits no country.
#[allow(clippy::too_many_arguments)]
pub(crate) fn execute(
    config: Option<&Path>,
    filter: FilterArgs,
    rounds: u64,
    seed: Option<u64>,
    tolerance_km: u32,
    threads: Option<usize>,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    let config = load_config(config)?;
    let catalog = Catalog::builtin();
    let filter = filter.filter();
    let base_seed = resolve_seed(seed);

    // Fail once up front rather than per round
    InfiniteSelector::new(base_seed)
        .with_difficulty_rule(config.difficulty_rule)
        .select(catalog, filter, &[] as &[&str])?;

    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok();
    }

    let pb = if progress {
        let pb = ProgressBar::new(rounds);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rounds ({per_sec})")
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let stats = (0..rounds)
        .into_par_iter()
        .fold(SimulationStats::default, |mut local, i| {
            let round_seed = base_seed.wrapping_add(i);
            let mut selector =
                InfiniteSelector::new(round_seed).with_difficulty_rule(config.difficulty_rule);
            if let Ok(target) = selector.select(catalog, filter, &[] as &[&str]) {
                let mut round = Round::new(catalog, target, selector.rule(filter), None);
                let status = play_round(&mut round, tolerance_km, round_seed);
                local.add_round(status, round.guesses().len());
            }
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            local
        })
        .reduce(SimulationStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }
    let duration = start.elapsed();
    info!(rounds = stats.rounds, wins = stats.wins, ?duration, "simulation finished");

    match format {
        OutputFormat::Text => {
            println!();
            print!("{}", format_simulation_text(&stats, &filter));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        OutputFormat::Json => {
            let result = JsonSimulationResult::from_stats(&stats, &filter, tolerance_km);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
